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

use std::fs;
use std::path::PathBuf;
use vtbgen::core::config::TbConfig;
use vtbgen::core::lang::verilog::error::VerilogError;
use vtbgen::core::testbench::Testbench;
use vtbgen::error::{Error, Hint};
use vtbgen::util::anyerror::CodeFault;
use vtbgen::util::filesystem;

const NON_ANSI: &str = r#"
// simple synchronous fifo
module fifo (clk, rst, wr_en, din, rd_en, dout, full, empty);
    parameter WIDTH = 8;

    input clk;
    input rst;
    input wr_en;
    input [7:0] din;
    input rd_en;
    output reg [7:0] dout;
    output full, empty;

    assign full = 1'b0;
    assign empty = 1'b1;
endmodule
"#;

const ANSI: &str = r#"
module uart_tx #(
    parameter CLKS_PER_BIT = 87,
    parameter [1:0] STOP_BITS = 2'd1
) (
    input  wire       clk,
    input  wire       start,
    input  wire [7:0] data,
    output reg        tx,
    output wire       busy
);
endmodule
"#;

fn setup(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let paths = files
        .iter()
        .map(|(name, text)| {
            let p = dir.path().join(name);
            fs::write(&p, text).unwrap();
            p
        })
        .collect();
    (dir, paths)
}

#[test]
fn non_ansi_module_end_to_end() {
    let (dir, paths) = setup(&[("uart.v", ANSI), ("fifo.v", NON_ANSI)]);
    let tb = Testbench::load(&paths, "fifo", TbConfig::new()).unwrap();

    // parameters declared in the body are not part of the header
    assert_eq!(tb.get_module().get_parameters().len(), 0);

    let text = tb.into_testbench();
    assert_eq!(text.contains("parameter"), false);
    assert_eq!(
        text.contains(
            "  reg clk;\n  reg rst;\n  reg wr_en;\n  reg [7:0] din;\n  reg rd_en;\n  wire [7:0] dout;\n  wire full;\n  wire empty;\n"
        ),
        true
    );
    assert_eq!(text.contains("  fifo DUT (\n"), true);
    assert_eq!(text.matches("forever begin").count(), 1);

    let written = filesystem::write_all_or_none(dir.path(), &tb.into_artifacts()).unwrap();
    assert_eq!(written.len(), 3);

    // every input is a compilation source, not only the matched one
    let mk = fs::read_to_string(dir.path().join("fifo_tb.mk")).unwrap();
    assert_eq!(mk.contains(&format!("SRC+=\"{}\"\n", paths[0].display())), true);
    assert_eq!(mk.contains(&format!("SRC+=\"{}\"\n", paths[1].display())), true);
    assert_eq!(mk.contains("SRC+=\"fifo_tb.sv\"\n"), true);
}

#[test]
fn ansi_module_with_parameters() {
    let (_dir, paths) = setup(&[("uart.v", ANSI)]);
    let config = TbConfig::new().clock_period(Some(8)).sim_time(Some(20000));
    let tb = Testbench::load(&paths, "uart_tx", config).unwrap();

    let text = tb.into_testbench();
    assert_eq!(
        text.contains("  parameter CLKS_PER_BIT = 87;\n  parameter [1:0] STOP_BITS = 2'd1;\n"),
        true
    );
    assert_eq!(
        text.contains("  uart_tx #(\n    .CLKS_PER_BIT(CLKS_PER_BIT),\n    .STOP_BITS(STOP_BITS)\n  ) DUT (\n"),
        true
    );
    assert_eq!(text.contains("      #4;\n"), true);
    assert_eq!(text.contains("    #20000;\n"), true);
}

#[test]
fn unknown_module() {
    let (_dir, paths) = setup(&[("uart.v", ANSI), ("fifo.v", NON_ANSI)]);
    let err = Testbench::load(&paths, "spi_master", TbConfig::new()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::NotFound(
            String::from("spi_master"),
            Hint::ModuleSources
        ))
    );
}

#[test]
fn unterminated_port_list() {
    let (_dir, paths) = setup(&[("bad.v", "module bad(input a, output b\nendmodule\n")]);
    let err = Testbench::load(&paths, "bad", TbConfig::new()).unwrap_err();
    let fault = err.downcast_ref::<CodeFault>().unwrap();
    assert_eq!(
        fault.as_source_file(),
        Some(&paths[0].display().to_string())
    );
    assert_eq!(
        fault.as_fault().downcast_ref::<VerilogError>(),
        Some(&VerilogError::PortsNotFound)
    );
}
