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

//! Structural matching of a module header within raw Verilog text.
//!
//! Comments are not stripped before matching, so declaration-like text inside
//! a comment in the header or body can be picked up as a declaration.

use super::error::VerilogError;
use regex::Regex;
use std::sync::OnceLock;

fn module_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:macro)?module\s+(\w+)").expect("static pattern"))
}

fn end_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bendmodule\b").expect("static pattern"))
}

/// Lists the byte offset of every `module` keyword along with the declared name.
pub fn find_modules(text: &str) -> Vec<(usize, &str)> {
    module_keyword()
        .captures_iter(text)
        .filter_map(|caps| {
            let kw = caps.get(0)?;
            let name = caps.get(1)?;
            Some((kw.start(), name.as_str()))
        })
        .collect()
}

/// The regions of a single module declaration.
#[derive(Debug, PartialEq)]
pub struct Header<'a> {
    name: &'a str,
    params: Option<&'a str>,
    ports: &'a str,
    body: &'a str,
}

impl<'a> Header<'a> {
    pub fn get_name(&self) -> &'a str {
        self.name
    }

    /// Text between the parentheses of the `#( ... )` block, if one exists.
    pub fn get_params(&self) -> Option<&'a str> {
        self.params
    }

    /// Text between the parentheses of the port list.
    pub fn get_ports(&self) -> &'a str {
        self.ports
    }

    /// Text from the `module` keyword up to its `endmodule` (or the end of the text).
    pub fn get_body(&self) -> &'a str {
        self.body
    }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() == true {
        i += 1;
    }
    i
}

/// Takes the balanced parentheses starting at `start`, which must point to a `(`.
///
/// Returns the enclosed text and the index immediately after the closing `)`.
fn take_balanced(text: &str, start: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'(') {
        return None;
    }
    let mut depth = 0;
    for (i, b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[start + 1..i], i + 1));
                }
            }
            _ => (),
        }
    }
    None
}

/// Locates the first module declaration in `text`.
///
/// The header spans from the `module` keyword through the port list's closing
/// parenthesis and the terminating `;`, and may cover multiple lines.
pub fn extract_header(text: &str) -> Result<Header, VerilogError> {
    let caps = module_keyword()
        .captures(text)
        .ok_or(VerilogError::ModuleNotFound)?;
    let (keyword, name) = match (caps.get(0), caps.get(1)) {
        (Some(k), Some(n)) => (k, n),
        _ => return Err(VerilogError::ModuleNotFound),
    };
    let bytes = text.as_bytes();

    // parameter list (optional)
    let mut i = skip_whitespace(bytes, name.end());
    let params = if bytes.get(i) == Some(&b'#') {
        i = skip_whitespace(bytes, i + 1);
        let (inner, next) = take_balanced(text, i).ok_or(VerilogError::PortsNotFound)?;
        i = skip_whitespace(bytes, next);
        Some(inner)
    } else {
        None
    };

    // port list
    let (ports, next) = take_balanced(text, i).ok_or(VerilogError::PortsNotFound)?;
    i = skip_whitespace(bytes, next);
    if bytes.get(i) != Some(&b';') {
        return Err(VerilogError::PortsNotFound);
    }

    let body_end = end_keyword()
        .find_at(text, i)
        .map(|m| m.start())
        .unwrap_or(text.len());

    Ok(Header {
        name: name.as_str(),
        params: params,
        ports: ports,
        body: &text[keyword.start()..body_end],
    })
}
