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

use thiserror::Error;

/// Failures raised while locating and interpreting a module header.
#[derive(Error, Debug, PartialEq)]
pub enum VerilogError {
    #[error("module declaration has not been found")]
    ModuleNotFound,
    #[error("port list has not been found: expecting \"(\" ... \");\" after the module name")]
    PortsNotFound,
    #[error("{construct} #{index} is missing its {field}")]
    MissingField {
        field: &'static str,
        construct: &'static str,
        index: usize,
    },
    #[error("invalid port direction {0:?}: expecting \"input\", \"output\", or \"inout\"")]
    InvalidDirection(String),
}

impl VerilogError {
    pub fn missing_port_field(field: &'static str, index: usize) -> Self {
        Self::MissingField {
            field: field,
            construct: "port",
            index: index,
        }
    }

    pub fn missing_param_field(field: &'static str, index: usize) -> Self {
        Self::MissingField {
            field: field,
            construct: "parameter",
            index: index,
        }
    }
}
