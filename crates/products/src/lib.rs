//! Catalog commands.
//!
//! Plain data carriers describing intended changes to products and their
//! combinations. They contain no behavior beyond field tracking; applying them
//! is the job of a command bus.

pub mod combination;
pub mod command;
pub mod product;

pub use combination::UpdateCombinationStockCommand;
pub use command::{CommandTarget, ProductCommand};
pub use product::{
    LocalizedStrings, ProductCondition, ProductManufacturer, ProductVisibility, UpdateProductCommand,
};
