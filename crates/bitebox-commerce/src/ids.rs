//! Newtype IDs for type-safe identifiers.
//!
//! A `RestaurantId` can never be handed to a cart operation that expects a
//! `MenuItemId`, even though both are strings underneath.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(RestaurantId);
define_id!(MenuItemId);
define_id!(OrderId);

impl MenuItemId {
    /// Compose an id for a menu item that has none of its own.
    ///
    /// The result is `"{restaurant_id}-{item_name}"`, which is unique as long
    /// as item names are unique within one restaurant's menu.
    pub fn composed(restaurant_id: &RestaurantId, item_name: &str) -> Self {
        Self(format!("{}-{}", restaurant_id, item_name))
    }
}

impl OrderId {
    /// Generate a display order number of the form `ORD-dddddd`.
    pub fn generate() -> Self {
        Self(format!("ORD-{}", order_number()))
    }
}

/// Produce a six digit number in `100000..=999999`.
///
/// Mixes the clock with a process-wide counter so two orders placed within
/// the same nanosecond still differ.
fn order_number() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    // splitmix64 finalizer
    let mut z = timestamp ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;

    100_000 + z % 900_000
}
