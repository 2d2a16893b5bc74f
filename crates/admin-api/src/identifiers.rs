//! Newtype names for remote administrative objects.
//!
//! A trigger name and an event id are both strings on the wire, but they are
//! never interchangeable: deleting a trigger by an event id is a caller bug the
//! type system can catch. The client does not validate the contents; the remote
//! service is the authority on what a legal name is.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new(), as_str(), Display, From<&str>, From<String>.
// ---------------------------------------------------------------------------
macro_rules! string_name {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw string. No local validation is performed.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_name! {
    /// Name of a cron trigger or an event trigger.
    ///
    /// Trigger names are unique per kind on the remote service.
    TriggerName
}

string_name! {
    /// Identifier of a delivered (or failed) event, as reported by the remote
    /// service's event log. Used to request redelivery.
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_name_serializes_as_a_bare_string() {
        let name = TriggerName::from("test_cron");
        assert_eq!(serde_json::to_value(&name).unwrap(), serde_json::json!("test_cron"));
        assert_eq!(name.to_string(), "test_cron");
    }

    #[test]
    fn empty_names_are_accepted() {
        assert_eq!(EventId::new("").as_str(), "");
    }
}
