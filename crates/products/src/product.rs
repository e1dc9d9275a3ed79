use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use backoffice_core::{DomainError, LanguageId, ManufacturerId, ProductId, ShopConstraint, ValueObject};

/// Translated texts keyed by language.
pub type LocalizedStrings = BTreeMap<LanguageId, String>;

/// Physical condition of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl ProductCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCondition::New => "new",
            ProductCondition::Used => "used",
            ProductCondition::Refurbished => "refurbished",
        }
    }
}

impl core::str::FromStr for ProductCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(ProductCondition::New),
            "used" => Ok(ProductCondition::Used),
            "refurbished" => Ok(ProductCondition::Refurbished),
            _ => Err(DomainError::validation(format!(
                "unknown product condition '{s}' (expected one of: new, used, refurbished)"
            ))),
        }
    }
}

impl ValueObject for ProductCondition {}

/// Manufacturer association of a product.
///
/// The back office offers "no manufacturer" as an explicit choice, distinct
/// from leaving the association unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ProductManufacturer {
    NoManufacturer,
    Manufacturer(ManufacturerId),
}

impl ProductManufacturer {
    /// Map a raw form value: `0` means "no manufacturer".
    pub fn from_raw(value: i64) -> Result<Self, DomainError> {
        if value == 0 {
            return Ok(ProductManufacturer::NoManufacturer);
        }
        Ok(ProductManufacturer::Manufacturer(ManufacturerId::try_from(value)?))
    }

    pub fn manufacturer_id(&self) -> Option<ManufacturerId> {
        match self {
            ProductManufacturer::NoManufacturer => None,
            ProductManufacturer::Manufacturer(id) => Some(*id),
        }
    }
}

impl ValueObject for ProductManufacturer {}

/// Where a product is listed on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductVisibility {
    #[serde(rename = "both", alias = "everywhere")]
    VisibleEverywhere,
    #[serde(rename = "catalog")]
    VisibleInCatalog,
    #[serde(rename = "search")]
    VisibleInSearch,
    #[serde(rename = "none", alias = "invisible")]
    Invisible,
}

impl ProductVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductVisibility::VisibleEverywhere => "both",
            ProductVisibility::VisibleInCatalog => "catalog",
            ProductVisibility::VisibleInSearch => "search",
            ProductVisibility::Invisible => "none",
        }
    }
}

impl core::str::FromStr for ProductVisibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" | "everywhere" => Ok(ProductVisibility::VisibleEverywhere),
            "catalog" => Ok(ProductVisibility::VisibleInCatalog),
            "search" => Ok(ProductVisibility::VisibleInSearch),
            "none" | "invisible" => Ok(ProductVisibility::Invisible),
            _ => Err(DomainError::validation(format!(
                "unknown product visibility '{s}' (expected one of: both, catalog, search, none)"
            ))),
        }
    }
}

impl ValueObject for ProductVisibility {}

/// Command: UpdateProduct.
///
/// Every optional field left at `None` means "do not change". The command is
/// scoped by its shop constraint; the same product can receive one command for
/// the current shop and another for all shops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductCommand {
    product_id: ProductId,
    shop_constraint: ShopConstraint,
    localized_names: Option<LocalizedStrings>,
    localized_descriptions: Option<LocalizedStrings>,
    localized_short_descriptions: Option<LocalizedStrings>,
    manufacturer: Option<ProductManufacturer>,
    condition: Option<ProductCondition>,
    show_condition: Option<bool>,
    online_only: Option<bool>,
    show_price: Option<bool>,
    available_for_order: Option<bool>,
    visibility: Option<ProductVisibility>,
}

impl UpdateProductCommand {
    pub fn new(product_id: ProductId, shop_constraint: ShopConstraint) -> Self {
        Self {
            product_id,
            shop_constraint,
            localized_names: None,
            localized_descriptions: None,
            localized_short_descriptions: None,
            manufacturer: None,
            condition: None,
            show_condition: None,
            online_only: None,
            show_price: None,
            available_for_order: None,
            visibility: None,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn shop_constraint(&self) -> ShopConstraint {
        self.shop_constraint
    }

    /// Whether no field has been set, i.e. the command would change nothing.
    pub fn is_empty(&self) -> bool {
        self.localized_names.is_none()
            && self.localized_descriptions.is_none()
            && self.localized_short_descriptions.is_none()
            && self.manufacturer.is_none()
            && self.condition.is_none()
            && self.show_condition.is_none()
            && self.online_only.is_none()
            && self.show_price.is_none()
            && self.available_for_order.is_none()
            && self.visibility.is_none()
    }

    pub fn localized_names(&self) -> Option<&LocalizedStrings> {
        self.localized_names.as_ref()
    }

    pub fn set_localized_names(&mut self, localized_names: LocalizedStrings) -> &mut Self {
        self.localized_names = Some(localized_names);
        self
    }

    pub fn localized_descriptions(&self) -> Option<&LocalizedStrings> {
        self.localized_descriptions.as_ref()
    }

    pub fn set_localized_descriptions(&mut self, localized_descriptions: LocalizedStrings) -> &mut Self {
        self.localized_descriptions = Some(localized_descriptions);
        self
    }

    pub fn localized_short_descriptions(&self) -> Option<&LocalizedStrings> {
        self.localized_short_descriptions.as_ref()
    }

    pub fn set_localized_short_descriptions(
        &mut self,
        localized_short_descriptions: LocalizedStrings,
    ) -> &mut Self {
        self.localized_short_descriptions = Some(localized_short_descriptions);
        self
    }

    pub fn manufacturer(&self) -> Option<ProductManufacturer> {
        self.manufacturer
    }

    /// Shortcut for the associated manufacturer id, if one is being set.
    pub fn manufacturer_id(&self) -> Option<ManufacturerId> {
        self.manufacturer.and_then(|m| m.manufacturer_id())
    }

    pub fn set_manufacturer(&mut self, manufacturer: ProductManufacturer) -> &mut Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    pub fn set_manufacturer_id(&mut self, manufacturer_id: ManufacturerId) -> &mut Self {
        self.set_manufacturer(ProductManufacturer::Manufacturer(manufacturer_id))
    }

    pub fn remove_manufacturer(&mut self) -> &mut Self {
        self.set_manufacturer(ProductManufacturer::NoManufacturer)
    }

    pub fn condition(&self) -> Option<ProductCondition> {
        self.condition
    }

    pub fn set_condition(&mut self, condition: ProductCondition) -> &mut Self {
        self.condition = Some(condition);
        self
    }

    pub fn show_condition(&self) -> Option<bool> {
        self.show_condition
    }

    pub fn set_show_condition(&mut self, show_condition: bool) -> &mut Self {
        self.show_condition = Some(show_condition);
        self
    }

    pub fn online_only(&self) -> Option<bool> {
        self.online_only
    }

    pub fn set_online_only(&mut self, online_only: bool) -> &mut Self {
        self.online_only = Some(online_only);
        self
    }

    pub fn show_price(&self) -> Option<bool> {
        self.show_price
    }

    pub fn set_show_price(&mut self, show_price: bool) -> &mut Self {
        self.show_price = Some(show_price);
        self
    }

    pub fn available_for_order(&self) -> Option<bool> {
        self.available_for_order
    }

    pub fn set_available_for_order(&mut self, available_for_order: bool) -> &mut Self {
        self.available_for_order = Some(available_for_order);
        self
    }

    pub fn visibility(&self) -> Option<ProductVisibility> {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: ProductVisibility) -> &mut Self {
        self.visibility = Some(visibility);
        self
    }
}
