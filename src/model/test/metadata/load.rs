use super::*;

/// Tests loading a complete metadata file.
///
/// Verifies every declared field is carried through unchanged.
///
/// Expected: Ok(BotMetadata) with all fields set
#[test]
fn loads_complete_metadata() {
    let test = TestBuilder::new()
        .with_metadata(serde_json::json!({
            "name": "chatbot",
            "command_prefix": "!",
            "token_env": "CHATBOT_TOKEN",
            "intents": ["presence", "members"]
        }))
        .build()
        .unwrap();

    let metadata = BotMetadata::load(test.metadata_path()).unwrap();

    assert_eq!(metadata.name, "chatbot");
    assert_eq!(metadata.command_prefix, "!");
    assert_eq!(metadata.token_env, "CHATBOT_TOKEN");
    assert_eq!(metadata.intents.len(), 2);
    assert!(metadata.intents.contains("presence"));
    assert!(metadata.intents.contains("members"));
}

/// Tests defaults applied for optional fields.
///
/// Verifies an omitted prefix becomes the sentinel and omitted intents become
/// an empty set.
///
/// Expected: Ok(BotMetadata) with sentinel prefix and no intents
#[test]
fn applies_defaults_for_optional_fields() {
    let test = TestBuilder::new()
        .with_metadata(serde_json::json!({
            "name": "quietbot",
            "token_env": "QUIET_TOKEN"
        }))
        .build()
        .unwrap();

    let metadata = BotMetadata::load(test.metadata_path()).unwrap();

    assert_eq!(metadata.command_prefix, UNLIKELY_PREFIX);
    assert!(metadata.intents.is_empty());
}

/// Tests loading from a path that does not exist.
///
/// Expected: Err(ConfigError::ReadMetadata)
#[test]
fn fails_when_file_missing() {
    let test = TestBuilder::new().build().unwrap();

    let result = BotMetadata::load(&test.path().join("missing.json"));

    assert!(matches!(result, Err(ConfigError::ReadMetadata { .. })));
}

/// Tests loading a file that is not valid JSON.
///
/// Expected: Err(ConfigError::ParseMetadata) naming the file
#[test]
fn fails_when_file_malformed() {
    let test = TestBuilder::new()
        .with_raw_metadata("{ \"name\": \"broken\", ")
        .build()
        .unwrap();

    let result = BotMetadata::load(test.metadata_path());

    match result {
        Err(ConfigError::ParseMetadata { path, .. }) => assert_eq!(path, test.metadata_path()),
        other => panic!("expected ParseMetadata, got {:?}", other),
    }
}
