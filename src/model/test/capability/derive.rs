use super::*;

/// Tests derivation when metadata omits intents.
///
/// Expected: exactly MessageContent and Messages
#[test]
fn always_on_only_when_intents_omitted() {
    let metadata = BotMetadata::from_json(r#"{ "name": "bot", "token_env": "TOKEN" }"#).unwrap();

    let capabilities = CapabilitySet::derive(&metadata.intents);

    assert_eq!(capabilities.len(), 2);
    assert!(capabilities.contains(Capability::MessageContent));
    assert!(capabilities.contains(Capability::Messages));
    assert!(!capabilities.contains(Capability::Presence));
    assert!(!capabilities.contains(Capability::Members));
}

/// Tests derivation with both recognized intents.
///
/// Expected: four capabilities including Presence and Members
#[test]
fn includes_presence_and_members() {
    let capabilities = CapabilitySet::derive(&intents(&["presence", "members"]));

    assert_eq!(capabilities.len(), 4);
    assert!(capabilities.contains(Capability::Presence));
    assert!(capabilities.contains(Capability::Members));
    assert!(capabilities.contains(Capability::MessageContent));
    assert!(capabilities.contains(Capability::Messages));
}

/// Tests that intent order does not affect the result.
///
/// Expected: equal capability sets
#[test]
fn order_independent() {
    let forward = CapabilitySet::derive(&vec!["presence".to_string(), "members".to_string()]);
    let reverse = CapabilitySet::derive(&vec!["members".to_string(), "presence".to_string()]);

    assert_eq!(forward, reverse);
}

/// Tests that unrecognized intents are ignored.
///
/// Expected: same set as when no intents are given
#[test]
fn ignores_unrecognized_intents() {
    let capabilities = CapabilitySet::derive(&intents(&["flying"]));

    assert_eq!(capabilities, CapabilitySet::derive(&intents(&[])));
}

/// Tests listing intents that map to no capability.
///
/// Expected: only the unknown names are returned
#[test]
fn reports_unrecognized_intents() {
    let requested = intents(&["members", "flying", "Presence"]);

    let unknown = CapabilitySet::unrecognized(&requested);

    assert_eq!(unknown, vec!["Presence", "flying"]);
}
