//! Builder seams: submitted form data in, commands out.

use serde_json::Value;

use backoffice_core::{CombinationId, ProductId, ShopConstraint};
use backoffice_products::ProductCommand;

use crate::error::FormResult;

/// Builds product commands from a product form.
///
/// `shop_constraint` is the shop the form was submitted for. Builders may
/// additionally emit commands for every shop when the form asks for it.
pub trait ProductCommandsBuilder: Send + Sync {
    fn build_commands(
        &self,
        product_id: ProductId,
        form_data: &Value,
        shop_constraint: ShopConstraint,
    ) -> FormResult<Vec<ProductCommand>>;
}

/// Builds combination commands from a combination form.
pub trait CombinationCommandsBuilder: Send + Sync {
    fn build_commands(
        &self,
        combination_id: CombinationId,
        form_data: &Value,
    ) -> FormResult<Vec<ProductCommand>>;
}
