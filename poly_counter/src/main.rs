//! Poly Counter
//!
//! Reports triangle counts for a set of OBJ models: the total over every
//! object, and the total over objects that are not marked inactive.
//!
//! Usage: poly_counter [--config FILE] [--inactive NAME]... MODEL.obj...

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use scene_kit::config::{Config, SceneKitConfig};
use scene_kit::foundation::logging;
use scene_kit::mesh::count_polys;

mod selection;

fn main() -> Result<()> {
    let matches = Command::new("poly_counter")
        .about("Counts mesh triangles across OBJ models")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML or RON settings file"),
        )
        .arg(
            Arg::new("inactive")
                .short('i')
                .long("inactive")
                .value_name("NAME")
                .help("Treat the file or group with this name as disabled")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("models")
                .value_name("MODEL")
                .help("OBJ files to count")
                .required(true)
                .num_args(1..),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => SceneKitConfig::load_from_file(path).with_context(|| format!("Failed to load config {path}"))?,
        None => SceneKitConfig::default(),
    };
    logging::init_with_filter(&config.logging.filter);

    let models: Vec<&String> = matches.get_many::<String>("models").unwrap_or_default().collect();
    let inactive: Vec<String> = matches
        .get_many::<String>("inactive")
        .unwrap_or_default()
        .cloned()
        .collect();

    log::info!("Counting triangles in {} model(s)", models.len());
    let selection = selection::build_selection(&models, &inactive)?;
    let report = count_polys(&selection);

    println!("Total active poly count: {}", report.active);
    println!("Total poly count: {}", report.total);
    Ok(())
}
