//! Form submission handling: build commands, hand them to the command bus.

use serde_json::Value;
use thiserror::Error;

use backoffice_core::{CombinationId, Command, ProductId, ShopConstraint};
use backoffice_products::ProductCommand;

use crate::builder::{CombinationCommandsBuilder, ProductCommandsBuilder};
use crate::combination::CombinationStockCommandsBuilder;
use crate::config::BuilderConfig;
use crate::error::FormDataError;
use crate::product::UpdateProductCommandsBuilder;

/// Applies catalog commands (the dispatcher side of the back office).
///
/// Implementations own persistence and transactions; this crate only hands
/// commands over, in order.
pub trait CommandBus: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn handle(&self, command: ProductCommand) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum HandlerError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Form(#[from] FormDataError),

    /// The bus rejected a command. Commands before it were already handled.
    #[error("command bus rejected {command_type} (after {handled} handled command(s)): {source}")]
    Bus {
        command_type: &'static str,
        handled: usize,
        #[source]
        source: E,
    },
}

/// Turns submitted catalog forms into commands and dispatches them.
pub struct CatalogFormDataHandler<B> {
    product_builder: Box<dyn ProductCommandsBuilder>,
    combination_builder: Box<dyn CombinationCommandsBuilder>,
    bus: B,
}

impl<B: CommandBus> CatalogFormDataHandler<B> {
    /// Handler using the default builders configured by `config`.
    pub fn new(config: &BuilderConfig, bus: B) -> Self {
        Self::with_builders(
            Box::new(UpdateProductCommandsBuilder::from_config(config)),
            Box::new(CombinationStockCommandsBuilder::new()),
            bus,
        )
    }

    pub fn with_builders(
        product_builder: Box<dyn ProductCommandsBuilder>,
        combination_builder: Box<dyn CombinationCommandsBuilder>,
        bus: B,
    ) -> Self {
        Self {
            product_builder,
            combination_builder,
            bus,
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Update a product from its submitted form. Returns the number of
    /// dispatched commands.
    pub fn update_product(
        &self,
        product_id: ProductId,
        form_data: &Value,
        shop_constraint: ShopConstraint,
    ) -> Result<usize, HandlerError<B::Error>> {
        let commands = self
            .product_builder
            .build_commands(product_id, form_data, shop_constraint)?;
        self.dispatch_all(commands)
    }

    /// Update a combination from its submitted form.
    pub fn update_combination(
        &self,
        combination_id: CombinationId,
        form_data: &Value,
    ) -> Result<usize, HandlerError<B::Error>> {
        let commands = self
            .combination_builder
            .build_commands(combination_id, form_data)?;
        self.dispatch_all(commands)
    }

    fn dispatch_all(&self, commands: Vec<ProductCommand>) -> Result<usize, HandlerError<B::Error>> {
        let mut handled = 0;
        for command in commands {
            let command_type = command.command_type();
            tracing::debug!(command_type, target = ?command.target(), "dispatching command");
            self.bus
                .handle(command)
                .map_err(|source| HandlerError::Bus {
                    command_type,
                    handled,
                    source,
                })?;
            handled += 1;
        }
        Ok(handled)
    }
}
