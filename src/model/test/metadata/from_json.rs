use super::*;

/// Tests that a missing `name` is rejected.
///
/// Expected: Err(ConfigError::MissingField("name"))
#[test]
fn rejects_missing_name() {
    let result = BotMetadata::from_json(r#"{ "token_env": "TOKEN" }"#);

    assert!(matches!(result, Err(ConfigError::MissingField("name"))));
}

/// Tests that a missing `token_env` is rejected.
///
/// Expected: Err(ConfigError::MissingField("token_env"))
#[test]
fn rejects_missing_token_env() {
    let result = BotMetadata::from_json(r#"{ "name": "bot" }"#);

    assert!(matches!(result, Err(ConfigError::MissingField("token_env"))));
}

/// Tests that empty or whitespace-only required fields are rejected.
///
/// Expected: Err(ConfigError::MissingField) for each case
#[test]
fn rejects_blank_required_fields() {
    let blank_name = BotMetadata::from_json(r#"{ "name": "", "token_env": "TOKEN" }"#);
    let blank_token = BotMetadata::from_json(r#"{ "name": "bot", "token_env": "   " }"#);

    assert!(matches!(blank_name, Err(ConfigError::MissingField("name"))));
    assert!(matches!(blank_token, Err(ConfigError::MissingField("token_env"))));
}

/// Tests that fields of the wrong type are a parse error.
///
/// Expected: Err(ConfigError::ParseMetadata)
#[test]
fn rejects_wrong_field_types() {
    let result = BotMetadata::from_json(r#"{ "name": 5, "token_env": "TOKEN" }"#);

    assert!(matches!(result, Err(ConfigError::ParseMetadata { .. })));
}

/// Tests that a non-object document is a parse error.
///
/// Expected: Err(ConfigError::ParseMetadata)
#[test]
fn rejects_non_object_document() {
    let result = BotMetadata::from_json(r#"["name", "token_env"]"#);

    assert!(matches!(result, Err(ConfigError::ParseMetadata { .. })));
}

/// Tests that an array with one entry per field is not read positionally.
///
/// Expected: Err(ConfigError::ParseMetadata)
#[test]
fn rejects_array_matching_field_count() {
    let result = BotMetadata::from_json(r#"["bot", "!", "TOKEN", ["presence"]]"#);

    assert!(matches!(result, Err(ConfigError::ParseMetadata { .. })));
}

/// Tests that scalar documents are a parse error.
///
/// Expected: Err(ConfigError::ParseMetadata) for each case
#[test]
fn rejects_scalar_document() {
    for contents in [r#""bot""#, "42", "null"] {
        let result = BotMetadata::from_json(contents);

        assert!(
            matches!(result, Err(ConfigError::ParseMetadata { .. })),
            "accepted {contents}"
        );
    }
}

/// Tests that unrecognized intents are kept without error.
///
/// Expected: Ok(BotMetadata) with the intent preserved
#[test]
fn accepts_unrecognized_intents() {
    let metadata =
        BotMetadata::from_json(r#"{ "name": "bot", "token_env": "TOKEN", "intents": ["flying"] }"#)
            .unwrap();

    assert!(metadata.intents.contains("flying"));
}

/// Tests that a null intents field is treated as absent.
///
/// Expected: Ok(BotMetadata) with no intents
#[test]
fn treats_null_intents_as_empty() {
    let metadata =
        BotMetadata::from_json(r#"{ "name": "bot", "token_env": "TOKEN", "intents": null }"#)
            .unwrap();

    assert!(metadata.intents.is_empty());
}

/// Tests that extra fields are ignored.
///
/// Expected: Ok(BotMetadata)
#[test]
fn ignores_unknown_fields() {
    let result = BotMetadata::from_json(
        r#"{ "name": "bot", "token_env": "TOKEN", "description": "does things" }"#,
    );

    assert!(result.is_ok());
}
