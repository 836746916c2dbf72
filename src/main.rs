//! Command-line interface for dbaker
//!
//! # Usage Examples
//!
//! ## Introspect
//! ```bash
//! # Describe public.users and sales.orders in ./shop.recipe.json
//! dbaker introspect \
//!   --host localhost --database shop \
//!   --username baker --password secret \
//!   --tables public.users --tables sales.orders
//! ```
//!
//! ## Generate
//! ```bash
//! # Insert 1000 rows per table, continuing a previous run that stopped at 5000
//! dbaker g -H localhost -d shop -u baker -p secret -s 1000 -i 5000
//!
//! # Reproducible random values
//! dbaker generate -H localhost -d shop -u baker -p secret -s 10 --seed 42
//! ```

use clap::{Parser, Subcommand};
use dbaker::{GenerateArgs, IntrospectArgs};

#[derive(Parser)]
#[command(name = "dbaker")]
#[command(about = "Introspect database tables and fill them with fake data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Introspect tables and write their recipe
    #[command(visible_alias = "i")]
    Introspect(IntrospectArgs),

    /// Generate rows for every table in the recipe
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Introspect(args) => dbaker::run_introspect(args).await,
        Commands::Generate(args) => dbaker::run_generate(args).await,
    }
}
