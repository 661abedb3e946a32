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

use super::VerilogParser;
use crate::core::lang::verilog::error::VerilogError;
use crate::core::lang::verilog::extract::{self, Header};
use crate::core::lang::verilog::interface::{self, ParamList, PortList};
use serde_derive::Serialize;

/// The interface of a module: its name plus its ports and parameters in
/// declaration order.
#[derive(Debug, PartialEq, Serialize)]
pub struct Module {
    name: String,
    parameters: ParamList,
    ports: PortList,
}

impl Module {
    /// Parses the first module declared in `text`.
    pub fn from_source(text: &str) -> Result<Self, VerilogError> {
        let header = extract::extract_header(text)?;
        Self::from_header(&header)
    }

    pub fn from_header(header: &Header) -> Result<Self, VerilogError> {
        let ports = VerilogParser::parse_port_list(header)?;
        let parameters = VerilogParser::parse_param_list(header)?;
        Ok(Self {
            name: header.get_name().to_string(),
            parameters: parameters,
            ports: ports,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_ports(&self) -> &PortList {
        &self.ports
    }

    pub fn get_parameters(&self) -> &ParamList {
        &self.parameters
    }

    pub fn has_port(&self, name: &str) -> bool {
        self.ports.iter().any(|p| p.get_name() == name)
    }
}

impl Module {
    /// Writes the instantiation of this module named `inst`, connecting every
    /// parameter and port to a signal of the same name.
    pub fn into_instance(&self, inst: &str, tab: &str) -> String {
        let mut result = String::new();
        let inner = format!("{}{}", tab, tab);
        if self.parameters.is_empty() == false {
            result.push_str(&format!("{}{} #(\n", tab, self.name));
            result.push_str(&interface::display_connections(
                self.parameters.iter().map(|p| p.get_name()),
                &inner,
            ));
            result.push_str(&format!("{}) {} (\n", tab, inst));
        } else {
            result.push_str(&format!("{}{} {} (\n", tab, self.name, inst));
        }
        result.push_str(&interface::display_connections(
            self.ports.iter().map(|p| p.get_name()),
            &inner,
        ));
        result.push_str(&format!("{});\n", tab));
        result
    }

    /// Writes the local `parameter` declarations mirroring the module's defaults.
    pub fn into_params(&self, tab: &str) -> String {
        self.parameters.iter().fold(String::new(), |mut acc, p| {
            acc.push_str(&format!("{}{};\n", tab, p.into_declaration()));
            acc
        })
    }

    /// Writes one local signal declaration per port, typed for driving the
    /// module from a testbench.
    pub fn into_signals(&self, clock: &str, tab: &str) -> String {
        self.ports.iter().fold(String::new(), |mut acc, p| {
            acc.push_str(&format!("{}{};\n", tab, p.into_declaration(clock)));
            acc
        })
    }
}
