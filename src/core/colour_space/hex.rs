use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    InvalidLength { text: String },
    InvalidDigit { text: String },
}

impl fmt::Display for ColourParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { text } => {
                write!(f, "expected six hex digits, got {:?}", text)
            }
            Self::InvalidDigit { text } => write!(f, "{:?} is not a hex colour", text),
        }
    }
}

impl Error for ColourParseError {}

/// Parses `#rrggbb` (the `#` is optional).
pub fn parse_hex(text: &str) -> Result<Colour, ColourParseError> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if digits.len() != 6 {
        return Err(ColourParseError::InvalidLength {
            text: text.to_string(),
        });
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColourParseError::InvalidDigit {
            text: text.to_string(),
        });
    }

    u32::from_str_radix(digits, 16)
        .map(Colour::from_hex)
        .map_err(|_| ColourParseError::InvalidDigit {
            text: text.to_string(),
        })
}
