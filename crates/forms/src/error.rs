//! Form data error model.

use thiserror::Error;

/// Result type used by the form data boundary.
pub type FormResult<T> = Result<T, FormDataError>;

/// A recognized form field carried a value that cannot be turned into the
/// expected type.
///
/// Unknown fields never produce an error; they are skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormDataError {
    #[error("invalid value for '{path}': {reason}")]
    InvalidField { path: String, reason: String },
}

impl FormDataError {
    pub fn invalid_field(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the offending field (e.g. `options.visibility.show_price`).
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidField { path, .. } => path,
        }
    }
}
