use std::{borrow::Borrow, fmt};

use serde::Deserialize;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from anything convertible to a `String`.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Identifies a payment instrument.
    InstrumentId
}

string_id! {
    /// Identifies a spending category.
    CategoryId
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    #[test]
    fn lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(InstrumentId::new("instrument_1"), 3);

        assert_eq!(map.get("instrument_1"), Some(&3));
        assert_eq!(map.get("instrument_2"), None);
    }

    #[test]
    fn displays_inner_string() {
        let id = CategoryId::from("Groceries");
        assert_eq!(id.to_string(), "Groceries");
        assert_eq!(id.as_str(), "Groceries");
    }
}
