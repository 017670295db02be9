//! Tienda CLI - terminal storefront demo.
//!
//! Commands:
//! - `tienda search` - run one catalog query
//! - `tienda categorias` - list categories
//! - `tienda browse` - interactive shopping session

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CategoriasArgs, SearchArgs};

/// Tienda CLI - browse the catalog, fill a cart, and check out
#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one catalog query and print the matching products
    Search(SearchArgs),

    /// List the catalog's categories
    Categorias(CategoriasArgs),

    /// Interactive shopping session
    Browse(BrowseArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Categorias(args) => commands::categorias::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
