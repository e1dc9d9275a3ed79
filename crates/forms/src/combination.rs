//! Combination form to `UpdateCombinationStockCommand`.
//!
//! ```text
//! stock
//!   quantities      quantity, minimal_quantity
//!   options         stock_location, low_stock_threshold, low_stock_alert
//!   available_date
//! ```

use chrono::NaiveDate;
use serde_json::Value;

use backoffice_core::CombinationId;
use backoffice_products::{ProductCommand, UpdateCombinationStockCommand};

use crate::builder::CombinationCommandsBuilder;
use crate::error::FormResult;
use crate::form_data::FormData;

const STOCK: &str = "stock";
const QUANTITIES: &str = "quantities";
const OPTIONS: &str = "options";

/// Typed view of the stock fields of a combination form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationStockForm {
    pub quantity: Option<i64>,
    pub minimal_quantity: Option<i64>,
    pub location: Option<String>,
    pub low_stock_threshold: Option<i64>,
    pub low_stock_alert: Option<bool>,
    pub available_date: Option<NaiveDate>,
}

impl CombinationStockForm {
    pub fn parse(form: &FormData<'_>) -> FormResult<Self> {
        let mut parsed = CombinationStockForm::default();
        let Some(stock) = form.section(STOCK) else {
            return Ok(parsed);
        };

        if let Some(quantities) = stock.section(QUANTITIES) {
            parsed.quantity = quantities.integer("quantity")?;
            parsed.minimal_quantity = quantities.integer("minimal_quantity")?;
        }
        if let Some(options) = stock.section(OPTIONS) {
            parsed.location = options.string("stock_location")?;
            parsed.low_stock_threshold = options.integer("low_stock_threshold")?;
            parsed.low_stock_alert = options.bool("low_stock_alert")?;
        }
        parsed.available_date = stock.date("available_date")?;

        Ok(parsed)
    }
}

/// Builds the stock update command of a combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationStockCommandsBuilder;

impl CombinationStockCommandsBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build zero or one command.
    pub fn build(
        &self,
        combination_id: CombinationId,
        form_data: &Value,
    ) -> FormResult<Option<UpdateCombinationStockCommand>> {
        let form = CombinationStockForm::parse(&FormData::new(form_data))?;

        let mut command = UpdateCombinationStockCommand::new(combination_id);
        if let Some(quantity) = form.quantity {
            command.set_quantity(quantity);
        }
        if let Some(minimal_quantity) = form.minimal_quantity {
            command.set_minimal_quantity(minimal_quantity);
        }
        if let Some(location) = form.location {
            command.set_location(location);
        }
        if let Some(threshold) = form.low_stock_threshold {
            command.set_low_stock_threshold(threshold);
        }
        if let Some(alert) = form.low_stock_alert {
            command.set_low_stock_alert_on(alert);
        }
        if let Some(date) = form.available_date {
            command.set_available_date(date);
        }

        if command.is_empty() {
            tracing::debug!(combination_id = %combination_id, "no combination stock field submitted");
            return Ok(None);
        }
        tracing::debug!(combination_id = %combination_id, "built combination stock command");
        Ok(Some(command))
    }
}

impl CombinationCommandsBuilder for CombinationStockCommandsBuilder {
    fn build_commands(
        &self,
        combination_id: CombinationId,
        form_data: &Value,
    ) -> FormResult<Vec<ProductCommand>> {
        Ok(self
            .build(combination_id, form_data)?
            .into_iter()
            .map(ProductCommand::from)
            .collect())
    }
}
