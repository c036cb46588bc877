//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return, so event handling code can be
//! tested without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! let author = create_test_user(42, "someone", false);
//! let message = create_test_message(1, 10, author, "!ping");
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;
pub mod user;

pub use message::create_test_message;
pub use user::create_test_user;
