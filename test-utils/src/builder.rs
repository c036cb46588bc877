use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Metadata written into the test bot directory.
enum MetadataFixture {
    Json(Value),
    Raw(String),
}

/// Builder for creating test contexts with a bot directory on disk.
///
/// Provides a fluent interface for writing a metadata file and `.env` file into a
/// fresh temp directory, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_metadata(serde_json::json!({ "name": "bot", "token_env": "BOT_TOKEN" }))
///     .with_env("BOT_TOKEN", "abc")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Contents of `metadata.json`, if one should be written.
    metadata: Option<MetadataFixture>,
    /// `KEY=value` lines for `.env`, written only when non-empty.
    env: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    pub fn new() -> Self {
        Self {
            metadata: None,
            env: Vec::new(),
        }
    }

    /// Writes the given JSON value as the bot's metadata file.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(MetadataFixture::Json(metadata));
        self
    }

    /// Writes the given text verbatim as the bot's metadata file.
    ///
    /// Use this for malformed documents that cannot be expressed as a `Value`.
    pub fn with_raw_metadata(mut self, contents: &str) -> Self {
        self.metadata = Some(MetadataFixture::Raw(contents.to_string()));
        self
    }

    /// Adds a variable to the bot's `.env` file.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Creates the temp directory and writes all configured files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Directory ready with metadata and `.env` written
    /// - `Err(TestError)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.metadata {
            Some(MetadataFixture::Json(value)) => std::fs::write(
                context.metadata_path(),
                serde_json::to_string_pretty(&value)?,
            )?,
            Some(MetadataFixture::Raw(contents)) => {
                std::fs::write(context.metadata_path(), contents)?
            }
            None => {}
        }

        if !self.env.is_empty() {
            let contents: String = self
                .env
                .iter()
                .map(|(key, value)| format!("{key}={value}\n"))
                .collect();
            std::fs::write(context.dotenv_path(), contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
