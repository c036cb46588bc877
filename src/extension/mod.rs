//! Extension loading.
//!
//! An extension is a bundle of commands added to a bot after bootstrap. Rust
//! cannot import arbitrary modules by path at runtime, so extensions are
//! registered at compile time in an [`ExtensionRegistry`] under a dotted
//! identifier (for example `bots.chatbot.chatbot`), and the launch command
//! selects which identifiers to load.
//!
//! Loading is sequential and fail-fast: the first extension that is missing or
//! fails stops the whole startup, and the error names that extension.

pub mod builtin;

use std::collections::HashMap;
use std::sync::Arc;

use crate::command::CommandRegistry;
use crate::error::extension::{ExtensionLoadError, ExtensionLoadErrorKind};

/// Error type extensions may return from [`Extension::load`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub trait Extension: Send + Sync {
    /// Registers this extension's commands.
    fn load(&self, commands: &mut CommandRegistry) -> Result<(), BoxError>;
}

/// Extensions available to the launcher, keyed by identifier.
#[derive(Default, Clone)]
pub struct ExtensionRegistry {
    extensions: HashMap<String, Arc<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes an extension available under `id`, replacing any previous one.
    pub fn register(&mut self, id: impl Into<String>, extension: impl Extension + 'static) {
        self.extensions.insert(id.into(), Arc::new(extension));
    }

    pub fn with(mut self, id: impl Into<String>, extension: impl Extension + 'static) -> Self {
        self.register(id, extension);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Extension>> {
        self.extensions.get(id)
    }
}

/// Loads extensions in order, stopping at the first failure.
///
/// # Arguments
/// - `registry` - Extensions available to load
/// - `ids` - Identifiers to load, in load order
/// - `commands` - Registry the extensions add their commands to
///
/// # Returns
/// - `Ok(Vec<String>)` - Identifiers loaded, in order
/// - `Err(ExtensionLoadError)` - The first extension that was not registered, was
///   listed twice, or failed to load. Later extensions are not attempted.
pub fn load_extensions<S: AsRef<str>>(
    registry: &ExtensionRegistry,
    ids: &[S],
    commands: &mut CommandRegistry,
) -> Result<Vec<String>, ExtensionLoadError> {
    let mut loaded: Vec<String> = Vec::with_capacity(ids.len());

    for id in ids {
        let id = id.as_ref();

        if loaded.iter().any(|done| done == id) {
            return Err(ExtensionLoadError::new(
                id,
                ExtensionLoadErrorKind::AlreadyLoaded,
            ));
        }

        let extension = registry
            .get(id)
            .ok_or_else(|| ExtensionLoadError::new(id, ExtensionLoadErrorKind::NotFound))?;

        extension
            .load(commands)
            .map_err(|source| ExtensionLoadError::new(id, ExtensionLoadErrorKind::Failed(source)))?;

        tracing::info!("Loaded extension {}", id);
        loaded.push(id.to_string());
    }

    Ok(loaded)
}
