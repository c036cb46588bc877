//! Gateway capability derivation.
//!
//! Discord requires privileged intents to be declared before connecting. A bot's
//! metadata lists the optional ones it wants by name; message content and message
//! delivery are always requested on top of those.
//!
//! Unrecognized intent names are ignored rather than rejected so metadata written
//! for newer capability names still starts on older builds.

use std::collections::BTreeSet;

use serenity::all::GatewayIntents;

/// A capability this bot asks the gateway for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Read the text of messages. Always requested.
    MessageContent,
    /// Receive guild and direct message events. Always requested.
    Messages,
    /// Receive presence updates, requested by the `"presence"` intent.
    Presence,
    /// Receive guild member events, requested by the `"members"` intent.
    Members,
}

impl Capability {
    /// Capabilities requested regardless of metadata.
    pub const ALWAYS_ON: [Capability; 2] = [Capability::MessageContent, Capability::Messages];

    /// Maps a metadata intent name to its capability, if recognized.
    pub fn from_intent(intent: &str) -> Option<Self> {
        match intent {
            "presence" => Some(Capability::Presence),
            "members" => Some(Capability::Members),
            _ => None,
        }
    }

    /// Serenity gateway intents backing this capability.
    pub fn gateway_intents(self) -> GatewayIntents {
        match self {
            Capability::MessageContent => GatewayIntents::MESSAGE_CONTENT,
            Capability::Messages => GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES,
            Capability::Presence => GatewayIntents::GUILD_PRESENCES,
            Capability::Members => GatewayIntents::GUILD_MEMBERS,
        }
    }
}

/// The set of capabilities a bot requests when connecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    /// Derives the capability request from metadata intent names.
    ///
    /// Always contains [`Capability::ALWAYS_ON`]; adds `Presence` and `Members`
    /// when their intent names are present. Never fails.
    pub fn derive<'a, I>(intents: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut set: BTreeSet<Capability> = Capability::ALWAYS_ON.into_iter().collect();
        set.extend(
            intents
                .into_iter()
                .filter_map(|intent| Capability::from_intent(intent)),
        );

        Self(set)
    }

    /// Intent names that do not map to any capability.
    pub fn unrecognized<'a, I>(intents: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        intents
            .into_iter()
            .map(String::as_str)
            .filter(|intent| Capability::from_intent(intent).is_none())
            .collect()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    /// Full serenity intent set: the non-privileged defaults plus every
    /// capability in this set.
    pub fn gateway_intents(&self) -> GatewayIntents {
        self.iter()
            .fold(GatewayIntents::non_privileged(), |intents, capability| {
                intents | capability.gateway_intents()
            })
    }
}
