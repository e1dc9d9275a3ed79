use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::CombinationId;

/// Command: UpdateCombinationStock.
///
/// Updates stock information of one combination. Combinations are not shop
/// scoped here, so the command only carries the combination id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCombinationStockCommand {
    combination_id: CombinationId,
    quantity: Option<i64>,
    minimal_quantity: Option<i64>,
    location: Option<String>,
    low_stock_threshold: Option<i64>,
    low_stock_alert_on: Option<bool>,
    available_date: Option<NaiveDate>,
    movement_on: bool,
}

impl UpdateCombinationStockCommand {
    pub fn new(combination_id: CombinationId) -> Self {
        Self {
            combination_id,
            quantity: None,
            minimal_quantity: None,
            location: None,
            low_stock_threshold: None,
            low_stock_alert_on: None,
            available_date: None,
            movement_on: true,
        }
    }

    pub fn combination_id(&self) -> CombinationId {
        self.combination_id
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.minimal_quantity.is_none()
            && self.location.is_none()
            && self.low_stock_threshold.is_none()
            && self.low_stock_alert_on.is_none()
            && self.available_date.is_none()
    }

    pub fn quantity(&self) -> Option<i64> {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i64) -> &mut Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn minimal_quantity(&self) -> Option<i64> {
        self.minimal_quantity
    }

    pub fn set_minimal_quantity(&mut self, minimal_quantity: i64) -> &mut Self {
        self.minimal_quantity = Some(minimal_quantity);
        self
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> &mut Self {
        // TODO: validate the location against the storage location pattern once it is shared with the stock module.
        self.location = Some(location.into());
        self
    }

    pub fn low_stock_threshold(&self) -> Option<i64> {
        self.low_stock_threshold
    }

    pub fn set_low_stock_threshold(&mut self, low_stock_threshold: i64) -> &mut Self {
        self.low_stock_threshold = Some(low_stock_threshold);
        self
    }

    pub fn low_stock_alert_on(&self) -> Option<bool> {
        self.low_stock_alert_on
    }

    pub fn set_low_stock_alert_on(&mut self, low_stock_alert_on: bool) -> &mut Self {
        self.low_stock_alert_on = Some(low_stock_alert_on);
        self
    }

    pub fn available_date(&self) -> Option<NaiveDate> {
        self.available_date
    }

    pub fn set_available_date(&mut self, available_date: NaiveDate) -> &mut Self {
        self.available_date = Some(available_date);
        self
    }

    /// Whether the quantity change is recorded as a stock movement. Always on.
    pub fn movement_on(&self) -> bool {
        self.movement_on
    }
}
