//! Command-line interface for cook
//! This binary is used to inspect serialized recipe trees and aggregate their ingredients.
//!
//! Usage:
//!   cook tree `<path>` [--format `<format>`] [--config `<file>`]    - Print the recipe in a registered format
//!   cook ingredients `<path>` [--json] [--config `<file>`]          - Print aggregated ingredient totals
//!   cook list-formats                                           - List all available formats
//!
//! Set `RUST_LOG=debug` to see aggregation details.

use clap::{Arg, ArgAction, ArgMatches, Command};
use cook::cook::aggregation::IngredientTable;
use cook::cook::config::{CookConfig, Loader};
use cook::cook::error::CookError;
use cook::cook::formats::{shopping_list, FormatRegistry};
use cook::cook::inflection::Inflector;
use cook::cook::loader::load_recipe;

fn main() {
    env_logger::init();

    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML file layered over the built-in defaults");

    let matches = Command::new("cook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting recipe trees and their ingredients")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tree")
                .about("Print a recipe in one of the registered formats")
                .arg(
                    Arg::new("path")
                        .help("Path to a .json or .yaml recipe tree")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'tag', 'json', 'shopping-list')"),
                )
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("ingredients")
                .about("Print aggregated ingredient totals")
                .arg(
                    Arg::new("path")
                        .help("Path to a .json or .yaml recipe tree")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the ingredient table as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(config_arg),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        Some(("ingredients", ingredient_matches)) => handle_ingredients_command(ingredient_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<CookConfig, CookError> {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    Ok(loader.build()?)
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) -> Result<(), CookError> {
    let config = load_config(matches)?;
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.default_format);

    let recipe = load_recipe(path)?;
    let registry = FormatRegistry::with_config(&config);
    println!("{}", registry.serialize(&recipe, format)?);
    Ok(())
}

/// Handle the ingredients command
fn handle_ingredients_command(matches: &ArgMatches) -> Result<(), CookError> {
    let config = load_config(matches)?;
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    let recipe = load_recipe(path)?;
    let mut table = IngredientTable::with_normalizer(Inflector::from_config(&config.units));
    table.accumulate(&recipe);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(table.ingredients())?);
    } else {
        println!("{}", shopping_list(&table, config.display.significant_digits));
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() -> Result<(), CookError> {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}\n    {}", name, description);
    }
    Ok(())
}
