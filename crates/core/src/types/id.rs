//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_slug_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Brandazon identifiers
//! are human-readable slugs (e.g. `labubu-blind-box-series-8`) or generated
//! strings, so the wrappers hold a `String` rather than a numeric key.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use brandazon_core::define_slug_id;
/// define_slug_id!(ProductId);
/// define_slug_id!(OrderId);
///
/// let product_id = ProductId::new("uno-card-game");
/// let order_id = OrderId::new("order_42");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = order_id;
/// ```
#[macro_export]
macro_rules! define_slug_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
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
    };
}

define_slug_id!(ProductId);
define_slug_id!(CartId);
define_slug_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new("uno-card-game");
        assert_eq!(id.as_str(), "uno-card-game");
        assert_eq!(id.to_string(), "uno-card-game");
        assert_eq!(id, ProductId::from("uno-card-game"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("monopoly-3rd-edition");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"monopoly-3rd-edition\"");
    }
}
