//! Riverstone CLI - Catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Export the built-in seed catalog as a static JSON file
//! riverstone-cli catalog export -o catalog.json
//!
//! # Validate a static catalog file before deploying it
//! riverstone-cli catalog validate catalog.json
//! ```
//!
//! The exported file is what `CATALOG_FILE` points the storefront at in
//! static-catalog deployments.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "riverstone-cli")]
#[command(author, version, about = "Riverstone Cashews CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Write the built-in seed catalog as a static JSON export
    Export {
        /// Output file path
        #[arg(short, long, default_value = "catalog.json")]
        out: PathBuf,
    },
    /// Check that a static catalog file parses and is consistent
    Validate {
        /// Catalog file to check
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Export { out } => commands::catalog::export(&out),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}
