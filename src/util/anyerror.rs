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

use std::error::Error;
use std::fmt::Display;

pub type Fault = Box<dyn Error>;

/// Stores the (source code file, error message)
#[derive(Debug)]
pub struct CodeFault(pub Option<String>, pub Fault);

impl Error for CodeFault {}

impl From<Fault> for CodeFault {
    fn from(value: Fault) -> Self {
        Self(None, value)
    }
}

impl CodeFault {
    /// Checks if there is a source code parsing error.
    pub fn is_source_err(&self) -> bool {
        self.0.is_some()
    }

    /// References the source code file that produced an error, it exists.
    pub fn as_source_file(&self) -> Option<&String> {
        self.0.as_ref()
    }

    /// References the underlying error.
    pub fn as_fault(&self) -> &Fault {
        &self.1
    }
}

impl Display for CodeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(src) => write!(f, "failed to parse file {:?}: {}", src, self.1),
            None => write!(f, "{}", self.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lang::verilog::error::VerilogError;

    #[test]
    fn code_fault_names_file() {
        let fault = CodeFault(
            Some(String::from("rtl/alu.v")),
            Box::new(VerilogError::PortsNotFound),
        );
        assert_eq!(fault.is_source_err(), true);
        assert_eq!(
            fault.to_string(),
            "failed to parse file \"rtl/alu.v\": port list has not been found: expecting \"(\" ... \");\" after the module name"
        );

        let fault = CodeFault::from(Box::new(VerilogError::ModuleNotFound) as Fault);
        assert_eq!(fault.as_source_file(), None);
        assert_eq!(fault.to_string(), "module declaration has not been found");
    }
}
