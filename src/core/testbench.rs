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

use crate::core::config::TbConfig;
use crate::core::lang::verilog::symbols::module::Module;
use crate::core::source;
use crate::util::anyerror::{CodeFault, Fault};
use std::path::PathBuf;
use tracing::debug;

/// Indentation used for every nesting level of generated code.
const TAB: &str = "  ";

/// Name of the module instance inside the testbench.
const DUT: &str = "DUT";

/// A module under test along with the settings and sources used to simulate it.
#[derive(Debug, PartialEq)]
pub struct Testbench {
    module: Module,
    config: TbConfig,
    sources: Vec<PathBuf>,
}

impl Testbench {
    pub fn new(module: Module, config: TbConfig, sources: Vec<PathBuf>) -> Self {
        Self {
            module: module,
            config: config,
            sources: sources,
        }
    }

    /// Finds the module `name` within the `files` and parses its interface.
    ///
    /// Every file is kept as a compilation source, even the ones that were not read.
    pub fn load(files: &[PathBuf], name: &str, config: TbConfig) -> Result<Self, Fault> {
        let found = source::find_module(files, name)?;
        let module = match Module::from_source(found.as_declaration()) {
            Ok(m) => m,
            Err(e) => {
                return Err(CodeFault(
                    Some(found.get_path().display().to_string()),
                    Box::new(e),
                ))?
            }
        };
        debug!(
            "module {} has {} port(s) and {} parameter(s)",
            module.get_name(),
            module.get_ports().len(),
            module.get_parameters().len()
        );
        Ok(Self::new(module, config, files.to_vec()))
    }

    pub fn get_module(&self) -> &Module {
        &self.module
    }

    /// Name of the generated testbench module.
    pub fn get_name(&self) -> String {
        format!("{}_tb", self.module.get_name())
    }

    /// Checks if the module under test has a port named after the configured clock.
    pub fn has_clock(&self) -> bool {
        self.module.has_port(self.config.get_clock_name())
    }

    pub fn get_tb_file(&self) -> String {
        format!("{}.sv", self.get_name())
    }

    pub fn get_do_file(&self) -> String {
        format!("{}.do", self.get_name())
    }

    pub fn get_make_file(&self) -> String {
        format!("{}.mk", self.get_name())
    }

    /// Renders every artifact as (file name, contents) pairs.
    pub fn into_artifacts(&self) -> Vec<(String, String)> {
        vec![
            (self.get_tb_file(), self.into_testbench()),
            (self.get_do_file(), self.into_do_script()),
            (self.get_make_file(), self.into_makefile()),
        ]
    }
}

impl Testbench {
    /// Writes the testbench module that instantiates the module under test.
    pub fn into_testbench(&self) -> String {
        let timescale = self.config.get_timescale();
        let clock = self.config.get_clock_name();

        let mut result = String::new();
        result.push_str(&format!("`timescale {} / {}\n\n", timescale, timescale));
        result.push_str(&format!("module {};\n", self.get_name()));

        // parameters
        result.push_str(&self.module.into_params(TAB));
        result.push('\n');

        // signals
        result.push_str(&self.module.into_signals(clock, TAB));
        result.push('\n');

        // instance
        result.push_str(&self.module.into_instance(DUT, TAB));
        result.push('\n');

        // clock generator
        if self.has_clock() == true {
            result.push_str(&self.into_clock_process());
            result.push('\n');
        }

        // simulation end
        result.push_str(&format!("{}initial begin\n", TAB));
        result.push_str(&format!("{}{}#{};\n", TAB, TAB, self.config.get_sim_time()));
        result.push_str(&format!("{}{}$stop;\n", TAB, TAB));
        result.push_str(&format!("{}end\n", TAB));

        result.push_str("\nendmodule\n");
        result
    }

    /// Writes the free-running clock process toggling every half period.
    fn into_clock_process(&self) -> String {
        let clock = self.config.get_clock_name();
        let mut result = String::new();
        result.push_str(&format!("{}initial begin\n", TAB));
        result.push_str(&format!("{}{}{} = 0;\n", TAB, TAB, clock));
        result.push_str(&format!("{}{}forever begin\n", TAB, TAB));
        result.push_str(&format!(
            "{}{}{}#{};\n",
            TAB,
            TAB,
            TAB,
            self.config.get_half_period()
        ));
        result.push_str(&format!("{}{}{}{} = ~{};\n", TAB, TAB, TAB, clock, clock));
        result.push_str(&format!("{}{}end\n", TAB, TAB));
        result.push_str(&format!("{}end\n", TAB));
        result
    }

    /// Writes the wave-viewer script showing the testbench and instance signals.
    pub fn into_do_script(&self) -> String {
        let tb = self.get_name();
        let mut result = String::new();
        result.push_str("onerror {resume}\n");
        result.push_str("quietly WaveActivateNextPane {} 0\n\n");
        result.push_str("radix -hexadecimal\n\n");
        result.push_str(&format!("add wave /{}/*\n", tb));
        result.push_str(&format!("add wave /{}/{}/*\n\n", tb, DUT));
        result.push_str("update\n");
        result
    }

    /// Writes the makefile to compile every source and run the simulation.
    pub fn into_makefile(&self) -> String {
        let tb = self.get_name();
        let mut result = String::new();
        result.push_str(".PHONY: all clean compile run\n\n");
        self.sources.iter().for_each(|src| {
            result.push_str(&format!("SRC+=\"{}\"\n", src.display()));
        });
        result.push_str(&format!("SRC+=\"{}\"\n", self.get_tb_file()));
        result.push('\n');
        result.push_str("all: compile run\n\n");
        result.push_str("clean:\n\tvdel -all\n\n");
        result.push_str("compile:\n\tvlib work\n\tvlog -sv $(SRC)\n\n");
        result.push_str(&format!(
            "run:\n\tvsim -gui -suppress 10000 -quiet work.{} -do \"{}\" -do \"run -all\"\n",
            tb,
            self.get_do_file()
        ));
        result
    }
}
