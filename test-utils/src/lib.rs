//! Marsbots Test Utils
//!
//! Shared testing utilities for the marsbots crate. Nothing here touches the
//! network or Discord; every helper works against temp directories, locally
//! constructed serenity objects, or a local mock server.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for a temp bot directory with metadata and `.env`
//! - **TestContext**: The built directory, cleaned up on drop
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for serenity `User` and `Message` objects
//! - **webhook**: `wiremock` server standing in for a Discord webhook
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[test]
//! fn loads_metadata() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_metadata(serde_json::json!({ "name": "bot", "token_env": "TOKEN" }))
//!         .build()?;
//!
//!     let metadata = BotMetadata::load(test.metadata_path())?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
pub mod webhook;
