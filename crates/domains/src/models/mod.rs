//! # Domain Models
//!
//! These structs represent the core entities of Solace.
//! Ids are opaque strings; the default generator hands out UUID v7 values,
//! curated seed data uses short fixed ids.

/// Declares an opaque string identifier newtype.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use string_id;

pub mod chat;
pub mod community;
pub mod expression;
pub mod journal;
pub mod mood;
pub mod resource;

pub use chat::*;
pub use community::*;
pub use expression::*;
pub use journal::*;
pub use mood::*;
pub use resource::*;
