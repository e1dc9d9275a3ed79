//! Product form to `UpdateProductCommand`s.
//!
//! A product form is split in sections:
//!
//! ```text
//! header          name
//! description     description, description_short, manufacturer
//! specifications  condition, show_condition
//! options
//!   visibility    online_only, show_price, available_for_order, visibility
//! ```
//!
//! Every field may be paired with a `<prefix><field>` flag asking for the
//! value to be applied to all shops. Values without the flag go to a command
//! scoped to the shop the form was submitted for; flagged values go to a
//! second command scoped to all shops.

use serde_json::Value;

use backoffice_core::{ProductId, ShopConstraint};
use backoffice_products::{
    LocalizedStrings, ProductCommand, ProductCondition, ProductManufacturer, ProductVisibility,
    UpdateProductCommand,
};

use crate::builder::ProductCommandsBuilder;
use crate::config::BuilderConfig;
use crate::error::{FormDataError, FormResult};
use crate::form_data::{FieldScope, FormData, ScopedValue};

const HEADER: &str = "header";
const DESCRIPTION: &str = "description";
const SPECIFICATIONS: &str = "specifications";
const OPTIONS: &str = "options";
const VISIBILITY: &str = "visibility";

const SECTIONS: &[&str] = &[HEADER, DESCRIPTION, SPECIFICATIONS, OPTIONS];
const HEADER_FIELDS: &[&str] = &["name"];
const DESCRIPTION_FIELDS: &[&str] = &["description", "description_short", "manufacturer"];
const SPECIFICATIONS_FIELDS: &[&str] = &["condition", "show_condition"];
const OPTIONS_FIELDS: &[&str] = &[VISIBILITY];
const VISIBILITY_FIELDS: &[&str] = &["online_only", "show_price", "available_for_order", "visibility"];

/// Typed view of the product fields this builder handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: Option<ScopedValue<LocalizedStrings>>,
    pub description: Option<ScopedValue<LocalizedStrings>>,
    pub description_short: Option<ScopedValue<LocalizedStrings>>,
    pub manufacturer: Option<ScopedValue<ProductManufacturer>>,
    pub condition: Option<ScopedValue<ProductCondition>>,
    pub show_condition: Option<ScopedValue<bool>>,
    pub online_only: Option<ScopedValue<bool>>,
    pub show_price: Option<ScopedValue<bool>>,
    pub available_for_order: Option<ScopedValue<bool>>,
    pub visibility: Option<ScopedValue<ProductVisibility>>,
}

impl ProductForm {
    /// Read the recognized fields. Unrecognized sections and fields are skipped.
    pub fn parse(form: &FormData<'_>, prefix: &str) -> FormResult<Self> {
        let mut parsed = ProductForm::default();
        log_unknown_keys(form, SECTIONS, "");

        if let Some(header) = form.section(HEADER) {
            log_unknown_keys(&header, HEADER_FIELDS, prefix);
            parsed.name = header.scoped(prefix, "name", FormData::localized)?;
        }

        if let Some(description) = form.section(DESCRIPTION) {
            log_unknown_keys(&description, DESCRIPTION_FIELDS, prefix);
            parsed.description = description.scoped(prefix, "description", FormData::localized)?;
            parsed.description_short = description.scoped(prefix, "description_short", FormData::localized)?;
            parsed.manufacturer = description.scoped(prefix, "manufacturer", read_manufacturer)?;
        }

        if let Some(specifications) = form.section(SPECIFICATIONS) {
            log_unknown_keys(&specifications, SPECIFICATIONS_FIELDS, prefix);
            parsed.condition = specifications.scoped(prefix, "condition", FormData::parse::<ProductCondition>)?;
            parsed.show_condition = specifications.scoped(prefix, "show_condition", FormData::bool)?;
        }

        if let Some(options) = form.section(OPTIONS) {
            log_unknown_keys(&options, OPTIONS_FIELDS, prefix);
            if let Some(visibility) = options.section(VISIBILITY) {
                log_unknown_keys(&visibility, VISIBILITY_FIELDS, prefix);
                parsed.online_only = visibility.scoped(prefix, "online_only", FormData::bool)?;
                parsed.show_price = visibility.scoped(prefix, "show_price", FormData::bool)?;
                parsed.available_for_order = visibility.scoped(prefix, "available_for_order", FormData::bool)?;
                parsed.visibility = visibility.scoped(prefix, "visibility", FormData::parse::<ProductVisibility>)?;
            }
        }

        Ok(parsed)
    }
}

fn read_manufacturer(form: &FormData<'_>, key: &str) -> FormResult<Option<ProductManufacturer>> {
    form.integer(key)?
        .map(|raw| {
            ProductManufacturer::from_raw(raw)
                .map_err(|e| FormDataError::invalid_field(form.field_path(key), e.to_string()))
        })
        .transpose()
}

fn log_unknown_keys(form: &FormData<'_>, fields: &[&str], prefix: &str) {
    let known: Vec<String> = fields
        .iter()
        .flat_map(|field| [field.to_string(), format!("{prefix}{field}")])
        .collect();
    for key in form.unknown_keys(&known) {
        tracing::trace!(field = %form.field_path(key), "ignoring unrecognized form field");
    }
}

/// Lazily created commands, one per scope.
struct ScopedCommands {
    product_id: ProductId,
    shop_constraint: ShopConstraint,
    single_shop: Option<UpdateProductCommand>,
    all_shops: Option<UpdateProductCommand>,
}

impl ScopedCommands {
    fn new(product_id: ProductId, shop_constraint: ShopConstraint) -> Self {
        Self {
            product_id,
            shop_constraint,
            single_shop: None,
            all_shops: None,
        }
    }

    fn command_for(&mut self, scope: FieldScope) -> &mut UpdateProductCommand {
        let product_id = self.product_id;
        match scope {
            // A form submitted for all shops has a single target.
            FieldScope::SingleShop if !self.shop_constraint.for_all_shops() => {
                let shop_constraint = self.shop_constraint;
                self.single_shop
                    .get_or_insert_with(|| UpdateProductCommand::new(product_id, shop_constraint))
            }
            _ => self
                .all_shops
                .get_or_insert_with(|| UpdateProductCommand::new(product_id, ShopConstraint::all_shops())),
        }
    }

    fn route<T>(
        &mut self,
        field: Option<ScopedValue<T>>,
        set: impl FnOnce(&mut UpdateProductCommand, T) -> &mut UpdateProductCommand,
    ) {
        if let Some(ScopedValue { value, scope }) = field {
            set(self.command_for(scope), value);
        }
    }

    /// Single-shop command first, then the all-shops one.
    fn into_commands(self) -> Vec<UpdateProductCommand> {
        self.single_shop.into_iter().chain(self.all_shops).collect()
    }
}

/// Builds `UpdateProductCommand`s from a product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductCommandsBuilder {
    modify_all_shops_prefix: String,
}

impl Default for UpdateProductCommandsBuilder {
    fn default() -> Self {
        Self::from_config(&BuilderConfig::default())
    }
}

impl UpdateProductCommandsBuilder {
    pub fn new(modify_all_shops_prefix: impl Into<String>) -> Self {
        Self {
            modify_all_shops_prefix: modify_all_shops_prefix.into(),
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(config.modify_all_shops_prefix.clone())
    }

    pub fn modify_all_shops_prefix(&self) -> &str {
        &self.modify_all_shops_prefix
    }

    /// Build zero, one or two commands: single-shop first, then all shops.
    ///
    /// Fails without building anything if a recognized field holds a value of
    /// the wrong shape.
    pub fn build(
        &self,
        product_id: ProductId,
        form_data: &Value,
        shop_constraint: ShopConstraint,
    ) -> FormResult<Vec<UpdateProductCommand>> {
        let form = ProductForm::parse(&FormData::new(form_data), &self.modify_all_shops_prefix)?;

        let mut commands = ScopedCommands::new(product_id, shop_constraint);
        commands.route(form.name, UpdateProductCommand::set_localized_names);
        commands.route(form.description, UpdateProductCommand::set_localized_descriptions);
        commands.route(form.description_short, UpdateProductCommand::set_localized_short_descriptions);
        commands.route(form.manufacturer, UpdateProductCommand::set_manufacturer);
        commands.route(form.condition, UpdateProductCommand::set_condition);
        commands.route(form.show_condition, UpdateProductCommand::set_show_condition);
        commands.route(form.online_only, UpdateProductCommand::set_online_only);
        commands.route(form.show_price, UpdateProductCommand::set_show_price);
        commands.route(form.available_for_order, UpdateProductCommand::set_available_for_order);
        commands.route(form.visibility, UpdateProductCommand::set_visibility);

        let commands = commands.into_commands();
        tracing::debug!(
            product_id = %product_id,
            shop_constraint = %shop_constraint,
            commands = commands.len(),
            "built product update commands"
        );
        Ok(commands)
    }
}

impl ProductCommandsBuilder for UpdateProductCommandsBuilder {
    fn build_commands(
        &self,
        product_id: ProductId,
        form_data: &Value,
        shop_constraint: ShopConstraint,
    ) -> FormResult<Vec<ProductCommand>> {
        Ok(self
            .build(product_id, form_data, shop_constraint)?
            .into_iter()
            .map(ProductCommand::from)
            .collect())
    }
}
