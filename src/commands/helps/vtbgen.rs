//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

pub const HELP: &str = r#"Generate a testbench, wave script, and makefile for a verilog module.

Usage:
    vtbgen [options] <input>... <name>

Args:
    <input>...              verilog source files to search for the module
    <name>                  module under test

Options:
    --clock, -c <name>      clock signal name (default: clk)
    --period, -p <num>      clock period (default: 10)
    --timescale, -t <unit>  timescale of the testbench (default: 1ns)
    --sim-time, -s <num>    simulation time before stopping (default: 1000)
    --json                  print the module's interface as valid json
    --verbose, -v           display debugging information

Writes <name>_tb.sv, <name>_tb.do, and <name>_tb.mk to the current directory.
"#;
