//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are string-backed so that records imported from other systems
//! (or pinned in tests) keep their original ids, while freshly created records
//! get a generated, time-ordered id carrying a readable prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier value as-is
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generates a fresh time-ordered identifier (UUID v7 with prefix)
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::now_v7()))
            }

            /// Returns the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the prefix used for generated identifiers
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "CLM");
define_id!(PolicyId, "POL");
define_id!(SubmissionId, "SUB");
define_id!(AttachmentId, "ATT");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_claim_id_has_prefix() {
        let id = ClaimId::generate();
        assert!(id.as_str().starts_with("CLM-"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SubmissionId::generate();
        let b = SubmissionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_imported_id_is_kept_verbatim() {
        let id = PolicyId::new("POL-123");
        assert_eq!(id.to_string(), "POL-123");
        assert_eq!(String::from(id), "POL-123");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = AttachmentId::from("att-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"att-1\"");

        let back: AttachmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
