use crate::navigator::AccessError;
use thiserror::Error;

/// Top-level error type for the value-accessor library.
///
/// [`Error::Access`] means the input data did not have the expected shape.
/// Every other variant means the embedding application wired the library up
/// wrongly, and retrying with different input will not help.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("no converter registered for type `{type_name}`")]
    UnknownConverter { type_name: &'static str },
}

impl Error {
    /// Returns `true` if this error was caused by malformed or missing input.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Error::Access(_))
    }

    /// Returns the underlying data error, if any.
    pub fn as_access(&self) -> Option<&AccessError> {
        match self {
            Error::Access(e) => Some(e),
            _ => None,
        }
    }
}
