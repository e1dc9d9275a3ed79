//! Preview the commands a back-office form submission would dispatch.
//!
//! Reads the submitted form data as JSON (from a file or stdin) and prints
//! the built commands as JSON on stdout.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use backoffice_core::{CombinationId, ProductId, ShopConstraint, ShopGroupId, ShopId};
use backoffice_forms::{
    BuilderConfig, CombinationCommandsBuilder, CombinationStockCommandsBuilder, ProductCommandsBuilder,
    UpdateProductCommandsBuilder,
};
use backoffice_products::ProductCommand;

#[derive(Debug, Parser)]
#[command(name = "backoffice-cli", version, about = "Preview commands built from back-office forms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build product update commands from a product form.
    Product(ProductArgs),
    /// Build the stock update command from a combination form.
    CombinationStock(CombinationStockArgs),
}

#[derive(Debug, Args)]
struct ProductArgs {
    #[arg(long)]
    product_id: ProductId,

    #[command(flatten)]
    scope: ScopeArgs,

    /// Prefix of the "apply to all shops" flags.
    #[arg(long, env = "BACKOFFICE_MODIFY_ALL_SHOPS_PREFIX")]
    prefix: Option<String>,

    /// Form data JSON file. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,
}

/// Shop the form was submitted for.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct ScopeArgs {
    #[arg(long)]
    shop_id: Option<ShopId>,

    #[arg(long)]
    shop_group_id: Option<ShopGroupId>,

    #[arg(long)]
    all_shops: bool,
}

impl ScopeArgs {
    fn shop_constraint(&self) -> ShopConstraint {
        match (self.shop_id, self.shop_group_id) {
            (Some(shop_id), _) => ShopConstraint::shop(shop_id),
            (None, Some(group_id)) => ShopConstraint::shop_group(group_id),
            (None, None) => ShopConstraint::all_shops(),
        }
    }
}

#[derive(Debug, Args)]
struct CombinationStockArgs {
    #[arg(long)]
    combination_id: CombinationId,

    /// Form data JSON file. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,
}

fn read_form_data(file: Option<&PathBuf>) -> anyhow::Result<serde_json::Value> {
    let raw = match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read form data from {}", path.display()))?,
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read form data from stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("form data is not valid JSON")
}

fn run(cli: Cli) -> anyhow::Result<Vec<ProductCommand>> {
    match cli.command {
        Commands::Product(args) => {
            let config = match args.prefix {
                Some(prefix) => BuilderConfig {
                    modify_all_shops_prefix: prefix,
                },
                None => BuilderConfig::default(),
            };
            let form_data = read_form_data(args.file.as_ref())?;
            let builder = UpdateProductCommandsBuilder::from_config(&config);
            builder
                .build_commands(args.product_id, &form_data, args.scope.shop_constraint())
                .context("failed to build product commands")
        }
        Commands::CombinationStock(args) => {
            let form_data = read_form_data(args.file.as_ref())?;
            CombinationStockCommandsBuilder::new()
                .build_commands(args.combination_id, &form_data)
                .context("failed to build combination stock commands")
        }
    }
}

fn main() -> anyhow::Result<()> {
    backoffice_observability::init();

    let cli = Cli::parse();
    let commands = run(cli)?;
    tracing::info!(commands = commands.len(), "built commands");

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &commands).context("failed to write commands")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_flags_map_to_shop_constraints() {
        let cli = Cli::try_parse_from(["backoffice-cli", "product", "--product-id", "4", "--shop-id", "2"]).unwrap();
        let Commands::Product(args) = cli.command else {
            panic!("Expected product subcommand");
        };
        assert_eq!(args.product_id.value(), 4);
        assert_eq!(args.scope.shop_constraint(), ShopConstraint::shop(ShopId::new(2).unwrap()));

        let cli = Cli::try_parse_from(["backoffice-cli", "product", "--product-id", "4", "--all-shops"]).unwrap();
        let Commands::Product(args) = cli.command else {
            panic!("Expected product subcommand");
        };
        assert!(args.scope.shop_constraint().for_all_shops());
    }

    #[test]
    fn a_single_scope_is_required() {
        assert!(Cli::try_parse_from(["backoffice-cli", "product", "--product-id", "4"]).is_err());
        assert!(
            Cli::try_parse_from([
                "backoffice-cli",
                "product",
                "--product-id",
                "4",
                "--shop-id",
                "1",
                "--all-shops"
            ])
            .is_err()
        );
    }

    #[test]
    fn zero_ids_are_rejected() {
        assert!(Cli::try_parse_from(["backoffice-cli", "combination-stock", "--combination-id", "0"]).is_err());
    }
}
