//! Strongly-typed identifiers used across the domain.
//!
//! Back-office entities are keyed by positive integers. Zero is never a valid
//! identifier and is rejected at construction.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProductId(u32);

/// Identifier of a product combination (a product variant).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CombinationId(u32);

/// Identifier of a shop in a multi-shop installation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ShopId(u32);

/// Identifier of a group of shops.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ShopGroupId(u32);

/// Identifier of a language (key of localized fields).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LanguageId(u32);

/// Identifier of a manufacturer (brand).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ManufacturerId(u32);

macro_rules! impl_positive_id_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting zero.
            pub fn new(value: u32) -> Result<Self, DomainError> {
                if value == 0 {
                    return Err(DomainError::invalid_id(format!(
                        "{}: must be a positive integer",
                        $name
                    )));
                }
                Ok(Self(value))
            }

            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<u32> for $t {
            type Error = DomainError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<i64> for $t {
            type Error = DomainError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                let value = u32::try_from(value)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(value)
            }
        }
    };
}

impl_positive_id_newtype!(ProductId, "ProductId");
impl_positive_id_newtype!(CombinationId, "CombinationId");
impl_positive_id_newtype!(ShopId, "ShopId");
impl_positive_id_newtype!(ShopGroupId, "ShopGroupId");
impl_positive_id_newtype!(LanguageId, "LanguageId");
impl_positive_id_newtype!(ManufacturerId, "ManufacturerId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        let err = ProductId::new(0).unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.contains("ProductId")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[test]
    fn parses_from_string() {
        let id: LanguageId = " 2 ".parse().unwrap();
        assert_eq!(id.value(), 2);
        assert!("abc".parse::<ShopId>().is_err());
        assert!("-1".parse::<ShopId>().is_err());
    }

    #[test]
    fn negative_i64_is_rejected() {
        assert!(ManufacturerId::try_from(-4_i64).is_err());
        assert_eq!(ManufacturerId::try_from(4_i64).unwrap().value(), 4);
    }

    #[test]
    fn serializes_transparently() {
        let id = CombinationId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: CombinationId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<CombinationId>("0").is_err());
    }
}
