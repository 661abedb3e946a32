use super::error::VerilogError;
use serde_derive::Serialize;
use std::fmt::Display;
use std::str::FromStr;

pub type PortList = Vec<Port>;
pub type ParamList = Vec<Parameter>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
    Inout,
}

impl FromStr for Direction {
    type Err = VerilogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "input" => Self::Input,
            "output" => Self::Output,
            "inout" => Self::Inout,
            _ => return Err(VerilogError::InvalidDirection(s.to_string())),
        })
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Input => "input",
                Self::Output => "output",
                Self::Inout => "inout",
            }
        )
    }
}

/// Storage type of a signal.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetType {
    Wire,
    Reg,
}

impl Default for NetType {
    fn default() -> Self {
        Self::Wire
    }
}

impl FromStr for NetType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wire" => Ok(Self::Wire),
            "reg" => Ok(Self::Reg),
            _ => Err(()),
        }
    }
}

impl Display for NetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Wire => "wire",
                Self::Reg => "reg",
            }
        )
    }
}

/// Normalizes a `[hi:lo]` range by removing all whitespace.
///
/// An empty or missing range is a scalar signal and is reported as `None`.
pub fn normalize_range(range: Option<&str>) -> Option<String> {
    let range: String = range?.chars().filter(|c| c.is_whitespace() == false).collect();
    match range.is_empty() {
        true => None,
        false => Some(range),
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Port {
    name: String,
    direction: Direction,
    #[serde(rename = "type")]
    net_type: NetType,
    width: Option<String>,
}

impl Port {
    pub fn new(name: &str, direction: Direction, net_type: NetType, width: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            direction: direction,
            net_type: net_type,
            width: normalize_range(width),
        }
    }

    /// Creates a port from the raw text pieces of a declaration.
    ///
    /// Errors if `direction` is not one of `input`, `output`, or `inout`. A
    /// missing storage type defaults to `wire`.
    pub fn from_parts(
        name: &str,
        direction: &str,
        net_type: Option<&str>,
        width: Option<&str>,
    ) -> Result<Self, VerilogError> {
        let direction = Direction::from_str(direction)?;
        let net_type = net_type
            .and_then(|t| NetType::from_str(t).ok())
            .unwrap_or_default();
        Ok(Self::new(name, direction, net_type, width))
    }

    /// Creates a new port named `name` that continues the declaration of `self`.
    ///
    /// The direction is always taken from `self`. The storage type and width
    /// are only taken from `self` when the continuing entry does not declare
    /// its own.
    pub fn inherit(&self, name: &str, net_type: Option<&str>, width: Option<&str>) -> Self {
        let (net_type, width) = match (net_type, width) {
            (None, None) => (self.net_type, self.width.clone()),
            (t, w) => (
                t.and_then(|t| NetType::from_str(t).ok()).unwrap_or_default(),
                normalize_range(w),
            ),
        };
        Self {
            name: name.to_string(),
            direction: self.direction,
            net_type: net_type,
            width: width,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_direction(&self) -> &Direction {
        &self.direction
    }

    pub fn get_net_type(&self) -> &NetType {
        &self.net_type
    }

    pub fn get_width(&self) -> Option<&String> {
        self.width.as_ref()
    }

    /// Determines the storage type this port takes when it is declared as a
    /// local signal driving (or driven by) the device under test.
    ///
    /// The clock and every input are driven procedurally, so they become `reg`.
    /// Outputs are driven by the instance and become `wire`. An `inout` keeps
    /// its declared type.
    pub fn display_type(&self, clock: &str) -> NetType {
        if self.name == clock {
            return NetType::Reg;
        }
        match self.direction {
            Direction::Input => NetType::Reg,
            Direction::Output => NetType::Wire,
            Direction::Inout => self.net_type,
        }
    }

    /// Writes the local signal declaration for this port (without the terminator).
    pub fn into_declaration(&self, clock: &str) -> String {
        let mut result = String::new();
        result.push_str(&self.display_type(clock).to_string());
        result.push(' ');
        if let Some(w) = &self.width {
            result.push_str(w);
            result.push(' ');
        }
        result.push_str(&self.name);
        result
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.width {
            Some(w) => write!(f, "{} {} {} {}", self.direction, self.net_type, w, self.name),
            None => write!(f, "{} {} {}", self.direction, self.net_type, self.name),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Parameter {
    name: String,
    width: Option<String>,
    #[serde(rename = "default")]
    default_value: String,
}

impl Parameter {
    pub fn new(name: &str, width: Option<&str>, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            width: normalize_range(width),
            default_value: default_value.trim().to_string(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_width(&self) -> Option<&String> {
        self.width.as_ref()
    }

    /// Writes the `parameter` declaration echoing the default value (without the terminator).
    pub fn into_declaration(&self) -> String {
        let mut result = String::from("parameter ");
        if let Some(w) = &self.width {
            result.push_str(w);
            result.push(' ');
        }
        result.push_str(&format!("{} = {}", self.name, self.default_value));
        result
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_declaration())
    }
}

/// Writes the named connections `.name(name)` for every item, one per line.
pub fn display_connections<'a, I>(names: I, indent: &str) -> String
where
    I: ExactSizeIterator<Item = &'a str>,
{
    let count = names.len();
    names
        .enumerate()
        .fold(String::new(), |mut acc, (i, name)| {
            acc.push_str(&format!("{}.{}({})", indent, name, name));
            if i + 1 != count {
                acc.push(',');
            }
            acc.push('\n');
            acc
        })
}
