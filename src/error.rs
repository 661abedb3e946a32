use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("module {0:?} has not been found in any input source{1}")]
    NotFound(String, Hint),
    #[error("failed to read source file {0:?}: {1}")]
    SourceNotRead(PathBuf, LastError),
    #[error("failed to write {0:?}: {1}")]
    OutputNotWritten(PathBuf, LastError),
    #[error("expecting at least one input source followed by the module name{0}")]
    MissingPositionals(Hint),
    #[error("clock period must be at least 2 time units, but got {0}")]
    ClockPeriodTooSmall(u64),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    Usage,
    ModuleSources,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Usage => "use `vtbgen --help` to see the expected arguments",
            Self::ModuleSources => {
                "verify the module name or add the file that declares it to the list of inputs"
            }
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}
