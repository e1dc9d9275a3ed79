//! Shop scoping for multi-shop installations.

use serde::{Deserialize, Serialize};

use crate::id::{ShopGroupId, ShopId};
use crate::value_object::ValueObject;

/// Which shops a command applies to.
///
/// Product updates are either applied to the shop the back-office user is
/// currently working in, to every shop of a group, or to every shop of the
/// installation at once.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "snake_case")]
pub enum ShopConstraint {
    Shop(ShopId),
    ShopGroup(ShopGroupId),
    AllShops,
}

impl ShopConstraint {
    pub fn shop(shop_id: ShopId) -> Self {
        Self::Shop(shop_id)
    }

    pub fn shop_group(shop_group_id: ShopGroupId) -> Self {
        Self::ShopGroup(shop_group_id)
    }

    pub fn all_shops() -> Self {
        Self::AllShops
    }

    pub fn for_all_shops(&self) -> bool {
        matches!(self, Self::AllShops)
    }

    pub fn shop_id(&self) -> Option<ShopId> {
        match self {
            Self::Shop(id) => Some(*id),
            _ => None,
        }
    }

    pub fn shop_group_id(&self) -> Option<ShopGroupId> {
        match self {
            Self::ShopGroup(id) => Some(*id),
            _ => None,
        }
    }
}

impl ValueObject for ShopConstraint {}

impl core::fmt::Display for ShopConstraint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Shop(id) => write!(f, "shop:{id}"),
            Self::ShopGroup(id) => write!(f, "shop_group:{id}"),
            Self::AllShops => f.write_str("all_shops"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let shop = ShopConstraint::shop(ShopId::new(3).unwrap());
        assert_eq!(shop.shop_id().map(|id| id.value()), Some(3));
        assert!(shop.shop_group_id().is_none());
        assert!(!shop.for_all_shops());

        let group = ShopConstraint::shop_group(ShopGroupId::new(2).unwrap());
        assert!(group.shop_id().is_none());
        assert_eq!(group.shop_group_id().map(|id| id.value()), Some(2));

        assert!(ShopConstraint::all_shops().for_all_shops());
    }

    #[test]
    fn serializes_with_scope_tag() {
        let shop = ShopConstraint::shop(ShopId::new(1).unwrap());
        assert_eq!(
            serde_json::to_value(shop).unwrap(),
            serde_json::json!({ "scope": "shop", "id": 1 })
        );
        assert_eq!(
            serde_json::to_value(ShopConstraint::AllShops).unwrap(),
            serde_json::json!({ "scope": "all_shops" })
        );
    }

    #[test]
    fn displays_scope() {
        assert_eq!(ShopConstraint::shop(ShopId::new(5).unwrap()).to_string(), "shop:5");
        assert_eq!(ShopConstraint::AllShops.to_string(), "all_shops");
    }
}
