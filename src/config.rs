//! Command arguments for the `introspect` and `generate` actions.

use clap::Args;
use dbaker_postgresql::ConnectionArgs;
use std::path::{Path, PathBuf};

/// Recipe file name suffix; the default recipe lives at `./<database>.recipe.json`.
pub const RECIPE_SUFFIX: &str = ".recipe.json";

/// Arguments for `dbaker introspect`.
#[derive(Args, Clone, Debug)]
pub struct IntrospectArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Table to introspect as `schema.table` (repeatable)
    #[arg(long, short = 't', required = true)]
    pub tables: Vec<String>,

    /// Recipe file to write (defaults to ./<database>.recipe.json)
    #[arg(long)]
    pub recipe: Option<PathBuf>,
}

impl IntrospectArgs {
    pub fn recipe_path(&self) -> PathBuf {
        recipe_path(&self.connection.database, self.recipe.as_deref())
    }
}

/// Arguments for `dbaker generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Number of rows to insert into each table
    #[arg(long, short = 's')]
    pub size: u64,

    /// First iteration number
    #[arg(long = "iter-from", short = 'i', default_value = "0")]
    pub iter_from: u64,

    /// Seed for reproducible random values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Recipe file to read (defaults to ./<database>.recipe.json)
    #[arg(long)]
    pub recipe: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn recipe_path(&self) -> PathBuf {
        recipe_path(&self.connection.database, self.recipe.as_deref())
    }
}

/// Resolve the recipe file location, preferring an explicit path.
pub fn recipe_path(database: &str, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => Path::new(".").join(format!("{database}{RECIPE_SUFFIX}")),
    }
}
