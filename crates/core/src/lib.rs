//! `backoffice-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod command;
pub mod error;
pub mod id;
pub mod shop;
pub mod value_object;

pub use command::Command;
pub use error::{DomainError, DomainResult};
pub use id::{CombinationId, LanguageId, ManufacturerId, ProductId, ShopGroupId, ShopId};
pub use shop::ShopConstraint;
pub use value_object::ValueObject;
