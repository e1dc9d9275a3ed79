use serde::{Deserialize, Serialize};

use backoffice_core::{CombinationId, Command, ProductId};

use crate::combination::UpdateCombinationStockCommand;
use crate::product::UpdateProductCommand;

/// Entity targeted by a catalog command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "entity", content = "id", rename_all = "snake_case")]
pub enum CommandTarget {
    Product(ProductId),
    Combination(CombinationId),
}

/// Every catalog command, as handed to a command bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCommand {
    UpdateProduct(UpdateProductCommand),
    UpdateCombinationStock(UpdateCombinationStockCommand),
}

impl Command for UpdateProductCommand {
    type Target = CommandTarget;

    fn command_type(&self) -> &'static str {
        "products.product.update"
    }

    fn target(&self) -> Self::Target {
        CommandTarget::Product(self.product_id())
    }
}

impl Command for UpdateCombinationStockCommand {
    type Target = CommandTarget;

    fn command_type(&self) -> &'static str {
        "products.combination.update_stock"
    }

    fn target(&self) -> Self::Target {
        CommandTarget::Combination(self.combination_id())
    }
}

impl Command for ProductCommand {
    type Target = CommandTarget;

    fn command_type(&self) -> &'static str {
        match self {
            ProductCommand::UpdateProduct(cmd) => cmd.command_type(),
            ProductCommand::UpdateCombinationStock(cmd) => cmd.command_type(),
        }
    }

    fn target(&self) -> Self::Target {
        match self {
            ProductCommand::UpdateProduct(cmd) => cmd.target(),
            ProductCommand::UpdateCombinationStock(cmd) => cmd.target(),
        }
    }
}

impl From<UpdateProductCommand> for ProductCommand {
    fn from(value: UpdateProductCommand) -> Self {
        ProductCommand::UpdateProduct(value)
    }
}

impl From<UpdateCombinationStockCommand> for ProductCommand {
    fn from(value: UpdateCombinationStockCommand) -> Self {
        ProductCommand::UpdateCombinationStock(value)
    }
}
