use thiserror::Error;

use crate::extension::BoxError;

/// Failure to load one extension during startup.
///
/// Identifies which extension stopped the startup sequence and why. Loading is
/// fail-fast, so at most one of these is produced per startup.
#[derive(Error, Debug)]
#[error("Failed to load extension `{id}`: {kind}")]
pub struct ExtensionLoadError {
    /// Identifier of the extension that failed
    pub id: String,
    /// Reason the extension failed
    #[source]
    pub kind: ExtensionLoadErrorKind,
}

impl ExtensionLoadError {
    pub fn new(id: impl Into<String>, kind: ExtensionLoadErrorKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExtensionLoadErrorKind {
    /// No extension is registered under the identifier.
    #[error("no extension is registered under this identifier")]
    NotFound,

    /// The extension was already loaded earlier in this startup.
    #[error("extension is already loaded")]
    AlreadyLoaded,

    /// The extension's own setup returned an error.
    #[error(transparent)]
    Failed(BoxError),
}
