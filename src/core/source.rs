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

use crate::core::lang::verilog::extract;
use crate::error::{Error, Hint, LastError};
use crate::util::anyerror::Fault;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A source file that declares the requested module.
#[derive(Debug, PartialEq)]
pub struct SourceMatch {
    path: PathBuf,
    text: String,
    /// byte offset of the module's declaration keyword
    offset: usize,
}

impl SourceMatch {
    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }

    /// References the source text starting at the module's declaration.
    pub fn as_declaration(&self) -> &str {
        &self.text[self.offset..]
    }
}

/// Reads the `files` in order and returns the first one that declares a module
/// called `name`.
///
/// Files after the first match are not read.
pub fn find_module<P: AsRef<Path>>(files: &[P], name: &str) -> Result<SourceMatch, Fault> {
    for file in files {
        let path = file.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                return Err(Error::SourceNotRead(
                    path.to_path_buf(),
                    LastError(e.to_string()),
                ))?
            }
        };
        let offset = extract::find_modules(&text)
            .into_iter()
            .find(|(_, n)| *n == name)
            .map(|(i, _)| i);
        if let Some(offset) = offset {
            debug!("module {} has been found in {:?}", name, path);
            return Ok(SourceMatch {
                path: path.to_path_buf(),
                text: text,
                offset: offset,
            });
        }
        debug!("module {} is not declared in {:?}", name, path);
    }
    Err(Error::NotFound(name.to_string(), Hint::ModuleSources))?
}
