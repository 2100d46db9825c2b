use crate::controllers::session::coordinate_inputs::CoordinateField;
use std::error::Error;
use std::fmt;

/// Rejected coordinate input. Nothing in the session changes when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Missing { field: CoordinateField },
    NotAnInteger { field: CoordinateField, text: String },
    SpanTooLarge { span: i64, limit: i64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is empty", field.label()),
            Self::NotAnInteger { field, text } => {
                write!(f, "{} must be an integer, got {:?}", field.label(), text)
            }
            Self::SpanTooLarge { span, limit } => write!(
                f,
                "span of {} cells exceeds the limit of {}",
                span, limit
            ),
        }
    }
}

impl Error for InputError {}
