//! Error types for bot startup and shutdown.
//!
//! `AppError` is the top-level error returned from the bootstrap sequence. Every
//! variant is fatal: it propagates to the process boundary and terminates the
//! process with a non-zero exit status. Nothing here is retried, restarting a
//! crashed bot is left to the external process manager.
//!
//! `NotificationError` is deliberately not part of `AppError`. Shutdown
//! notification failures are logged and swallowed by the notifier itself.

pub mod auth;
pub mod command;
pub mod config;
pub mod extension;
pub mod notification;


use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, extension::ExtensionLoadError};

/// Top-level application error type.
///
/// Aggregates all fatal error categories that can occur between reading the
/// metadata file and the end of the client run loop.
#[derive(Error, Debug)]
pub enum AppError {
    /// Metadata, environment, or logging configuration error.
    ///
    /// Raised before any network connection is attempted.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing or rejected platform token.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// An extension failed to load; no partial extension set is run.
    #[error(transparent)]
    ExtensionErr(#[from] ExtensionLoadError),

    /// Discord client error from Serenity not related to authentication.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Authentication failures are routed to `AuthError::Rejected` so the caller sees
/// the same category whether the token was missing or refused by Discord. All
/// other client errors are boxed to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        if auth::is_authentication_failure(&err) {
            AppError::AuthErr(AuthError::Rejected(Box::new(err)))
        } else {
            AppError::DiscordErr(Box::new(err))
        }
    }
}
