use thiserror::Error;

use super::Path;

/// The input did not have the expected shape at `path`.
///
/// Displays as `<message>: [<path>]`, e.g.
/// `Value expected to be an integer: [#.server.port]`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}: [{path}]")]
pub struct AccessError {
    message: String,
    path: Path,
}

impl AccessError {
    pub fn new(message: impl Into<String>, path: Path) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Path of the field that failed, including its own key.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
