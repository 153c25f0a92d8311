//! Brandazon CLI - scripted drivers for the attribution demo.
//!
//! # Usage
//!
//! ```bash
//! # Run the Moogle attribution walkthrough (search, ad click, add, checkout)
//! brandazon demo --query labubu
//!
//! # Run the organic browsing flow (home, products, detail, cart)
//! brandazon browse
//!
//! # Print the demo catalog
//! brandazon catalog
//! brandazon catalog --featured
//! ```
//!
//! Every analytics emission is printed to stdout as one JSON line.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod sink;

#[derive(Parser)]
#[command(name = "brandazon")]
#[command(author, version, about = "Brandazon attribution demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted Moogle attribution walkthrough
    Demo {
        /// Search term typed into Moogle
        #[arg(short, long, default_value = "labubu")]
        query: String,
    },
    /// Run the scripted organic browsing flow
    Browse,
    /// Print the demo catalog
    Catalog {
        /// Only the featured (home page) products
        #[arg(long)]
        featured: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Demo { query } => commands::demo::run(&query)?,
        Commands::Browse => commands::browse::run()?,
        Commands::Catalog { featured } => commands::catalog::run(featured),
    }
    Ok(())
}
