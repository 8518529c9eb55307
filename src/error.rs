//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors surfaced by interpolation.
///
/// Coercion never produces an error: malformed numeric/boolean/structural
/// payloads degrade to the uncoerced text instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("expected an object or array as interpolation data, got {got}")]
    InvalidData { got: &'static str },

    #[error("missing a value for the placeholder: {key}")]
    MissingValue { key: String },
}

impl FixSuggestion for Error {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            Error::InvalidData { .. } => {
                Some("Pass the data as a JSON object or array, not a scalar")
            }
            Error::MissingValue { .. } => {
                Some("Add the key to the data, or use MissingKeys::Ignore / MissingKeys::Undefined")
            }
        }
    }
}
