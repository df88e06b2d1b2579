//! Boilerplate macros for string-backed identifiers.
//!
//! Catalog content names its dimensions, options, plan services, tiers and
//! add-ons with plain strings. Each gets its own newtype so an option id can
//! never be passed where a dimension id is expected.
//!
//! # Usage
//!
//! ```ignore
//! string_id!(
//!     /// Identifier of a dimension within a service schema.
//!     DimensionId
//! );
//!
//! let id = DimensionId::new("duration");
//! assert_eq!(id.as_str(), "duration");
//! ```

/// Declares a `String` newtype with conversions, `Display` and transparent serde.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use string_id;
