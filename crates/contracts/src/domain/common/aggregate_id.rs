use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
///
/// The REST backend hands out integer primary keys, so every id is a thin
/// newtype over `i64` that serializes transparently.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its string form (used in URLs and DOM keys)
    fn as_string(&self) -> String;

    /// Parse the id back from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }
}

/// Declares an `i64` newtype id implementing [`AggregateId`].
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid id '{}': {}", s, e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    aggregate_id!(SampleId);

    #[test]
    fn test_id_string_round_trip() {
        let id = SampleId::from_string(" 42 ").unwrap();
        assert_eq!(id, SampleId::new(42));
        assert_eq!(id.as_string(), "42");
        assert!(SampleId::from_string("abc").is_err());
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&SampleId(7)).unwrap(), "7");
        let back: SampleId = serde_json::from_str("7").unwrap();
        assert_eq!(back.value(), 7);
    }
}
