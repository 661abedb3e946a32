use super::error::VerilogError;
use super::extract::Header;
use super::interface::{normalize_range, ParamList, Parameter, Port, PortList};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

pub mod module;

/// `[direction] [wire|reg] [range] name` as written in a port list entry.
fn port_entry() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:\b(input|inout|output)\b\s*)?(?:\b(wire|reg)\b\s*)?(\[[^\]]*\]\s*)?\b(\w+)\s*$",
        )
        .expect("static pattern")
    })
}

/// Direction keyword (and net type) opening a port list entry.
fn leading_direction() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(input|inout|output)\b(?:\s*\b(wire|reg)\b)?").expect("static pattern")
    })
}

/// `[parameter] [type]* [range] [name] [= value]` as written in a parameter list entry.
fn param_entry() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:(parameter|localparam)\b\s*)?",
            r"(?:(?:integer|real|realtime|time|signed|unsigned|logic|bit|int|reg|wire)\b\s*)*",
            r"(\[[^\]]*\]\s*)?",
            r"(\w+)?\s*",
            r"(?:=\s*([\s\S]*?))?\s*$",
        ))
        .expect("static pattern")
    })
}

/// Splits `text` at every comma that is not enclosed by `()`, `[]`, or `{}`.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&text[start..i]);
                start = i + 1;
            }
            _ => (),
        }
    }
    items.push(&text[start..]);
    items
}

pub struct VerilogParser;

impl VerilogParser {
    /// Interprets every entry of the module's port list in declaration order.
    ///
    /// An entry without an inline direction is resolved from a standalone
    /// declaration in the module body. When the body has none, the entry
    /// continues the closest previous entry that had an inline direction.
    pub fn parse_port_list(header: &Header) -> Result<PortList, VerilogError> {
        let text = header.get_ports();
        if text.trim().is_empty() == true {
            return Err(VerilogError::PortsNotFound);
        }

        let mut ports = PortList::new();
        let mut last_inline: Option<Port> = None;

        for (i, entry) in split_top_level(text).into_iter().enumerate() {
            let index = i + 1;
            let entry = entry.trim();
            let caps = port_entry()
                .captures(entry)
                .ok_or(VerilogError::missing_port_field("name", index))?;

            let name = caps
                .get(4)
                .map(|m| m.as_str())
                .ok_or(VerilogError::missing_port_field("name", index))?;
            let width = caps.get(3).map(|m| m.as_str());

            let inline = match caps.get(1) {
                Some(dir) => Some((dir.as_str(), caps.get(2).map(|m| m.as_str()))),
                // keywords outside the grammar (`signed`, `logic`) hide the direction from the entry pattern
                None => leading_direction().captures(entry).and_then(|lead| {
                    lead.get(1)
                        .map(|dir| (dir.as_str(), lead.get(2).map(|m| m.as_str())))
                }),
            };
            let net_type = caps.get(2).map(|m| m.as_str());

            let port = match inline {
                // ansi-style entry
                Some((dir, net_type)) => {
                    let port = Port::from_parts(name, dir, net_type, width)?;
                    last_inline = Some(port.clone());
                    port
                }
                // non-ansi-style entry
                None => {
                    debug!("direction of port {:?} not found inline, searching module body", name);
                    match Self::find_body_declaration(header.get_body(), name)? {
                        Some(port) => port,
                        None => match &last_inline {
                            Some(prev) => prev.inherit(name, net_type, width),
                            None => return Err(VerilogError::missing_port_field("direction", index)),
                        },
                    }
                }
            };
            debug!("port: {}", port);
            ports.push(port);
        }
        Ok(ports)
    }

    /// Searches the module body for the first standalone declaration of `name`.
    ///
    /// Declarations that list several names (`input a, b;`) are also detected.
    pub fn find_body_declaration(body: &str, name: &str) -> Result<Option<Port>, VerilogError> {
        let pattern = format!(
            r"\b(input|inout|output)\b\s*(?:\b(wire|reg)\b\s*)?(\[[^\]]*\]\s*)?(?:\w+\s*,\s*)*\b{}\s*[,;]",
            regex::escape(name)
        );
        let re = Regex::new(&pattern).expect("port names are escaped");
        match re.captures(body) {
            Some(caps) => {
                let dir = match caps.get(1) {
                    Some(d) => d.as_str(),
                    None => return Ok(None),
                };
                let port = Port::from_parts(
                    name,
                    dir,
                    caps.get(2).map(|m| m.as_str()),
                    caps.get(3).map(|m| m.as_str()),
                )?;
                Ok(Some(port))
            }
            None => Ok(None),
        }
    }

    /// Interprets the module's `#( ... )` block.
    ///
    /// A module without the block has no parameters. An entry without the
    /// `parameter` keyword continues the previous declaration and shares its
    /// range unless it declares its own.
    pub fn parse_param_list(header: &Header) -> Result<ParamList, VerilogError> {
        let text = match header.get_params() {
            Some(t) => t,
            None => {
                debug!("parameters have not been found");
                return Ok(ParamList::new());
            }
        };
        if text.trim().is_empty() == true {
            return Ok(ParamList::new());
        }

        let mut params = ParamList::new();
        for (i, entry) in split_top_level(text).into_iter().enumerate() {
            let index = i + 1;
            let caps = param_entry()
                .captures(entry.trim())
                .ok_or(VerilogError::missing_param_field("name", index))?;

            let name = caps
                .get(3)
                .map(|m| m.as_str())
                .ok_or(VerilogError::missing_param_field("name", index))?;

            let value = caps
                .get(4)
                .map(|m| m.as_str())
                .filter(|v| v.trim().is_empty() == false)
                .ok_or(VerilogError::missing_param_field("default value", index))?;

            let width = match (caps.get(1), normalize_range(caps.get(2).map(|m| m.as_str()))) {
                (_, Some(w)) => Some(w),
                // continuation of the previous declaration
                (None, None) => params.last().and_then(|p: &Parameter| p.get_width().cloned()),
                (Some(_), None) => None,
            };

            let param = Parameter::new(name, width.as_deref(), value);
            debug!("{}", param);
            params.push(param);
        }
        Ok(params)
    }
}
