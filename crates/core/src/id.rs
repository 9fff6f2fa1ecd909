//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings. The store allocates them as a per-kind
//! prefix followed by a sequence number (`t1`, `c7`, ...), but any string is
//! accepted as a reference so that transactions can point at tiles the store
//! has never seen.

use serde::{Deserialize, Serialize};

/// Identifier of a tile (stocked product).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

/// Identifier of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

/// Identifier of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(String);

/// Identifier of a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(String);

macro_rules! impl_string_id {
    ($t:ty, $prefix:literal) => {
        impl $t {
            /// Build the identifier for sequence number `n` (e.g. `t42`).
            pub fn from_sequence(n: u64) -> Self {
                Self(format!("{}{}", $prefix, n))
            }

            /// Sequence number if this id has the allocated `<prefix><n>` shape.
            pub fn sequence(&self) -> Option<u64> {
                self.0.strip_prefix($prefix)?.parse().ok()
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_id!(TileId, 't');
impl_string_id!(CustomerId, 'c');
impl_string_id!(SaleId, 's');
impl_string_id!(PurchaseId, 'p');
