//! `backoffice-forms`: submitted back-office forms to catalog commands.
//!
//! The presentation layer hands over raw form data (nested JSON). Builders
//! read the fields they recognize, decide for each one whether it applies to
//! the current shop or to every shop, and produce the commands to dispatch.
//! Unrecognized fields are ignored.

pub mod builder;
pub mod combination;
pub mod config;
pub mod error;
pub mod form_data;
pub mod handler;
pub mod product;

pub use builder::{CombinationCommandsBuilder, ProductCommandsBuilder};
pub use combination::{CombinationStockCommandsBuilder, CombinationStockForm};
pub use config::{BuilderConfig, DEFAULT_MODIFY_ALL_SHOPS_PREFIX, MODIFY_ALL_SHOPS_PREFIX_ENV};
pub use error::{FormDataError, FormResult};
pub use form_data::{FieldScope, FormData, ScopedValue};
pub use handler::{CatalogFormDataHandler, CommandBus, HandlerError};
pub use product::{ProductForm, UpdateProductCommandsBuilder};
