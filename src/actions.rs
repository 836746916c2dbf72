//! The `introspect` and `generate` actions.
//!
//! Each action has a `run_*` entry point that connects to PostgreSQL, and a
//! collaborator-generic core that tests drive with in-memory catalogs and
//! executors.

use crate::config::{GenerateArgs, IntrospectArgs};
use anyhow::Context;
use dbaker_core::{Recipe, TableIdent};
use dbaker_generator::ValueGenerator;
use dbaker_postgresql::{CatalogSource, InsertExecutor, Introspector, RowWriter};
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Parse `schema.table` identifiers, failing on the first malformed one.
pub fn parse_table_idents(tables: &[String]) -> anyhow::Result<Vec<TableIdent>> {
    tables
        .iter()
        .map(|table| TableIdent::parse(table).context("Invalid --tables argument"))
        .collect()
}

/// Introspect `tables` from `catalog` and write the recipe to `path`.
///
/// Nothing is written unless every table introspects cleanly.
pub async fn introspect<C: CatalogSource + Sync>(
    catalog: C,
    tables: &[TableIdent],
    path: &Path,
) -> anyhow::Result<Recipe> {
    let recipe = Introspector::new(catalog)
        .introspect_tables(tables)
        .await
        .context("Schema introspection failed")?;

    recipe
        .to_file(path)
        .with_context(|| format!("Failed to write recipe to {}", path.display()))?;

    info!(
        "Recipe with {} tables written to {}",
        recipe.tables.len(),
        path.display()
    );
    Ok(recipe)
}

/// Insert `size` rows into every recipe table, iterations `iter_from..iter_from + size`.
///
/// Tables are processed in recipe order; the first failure aborts the run.
/// Returns the total number of rows inserted.
pub async fn generate<E, R>(
    writer: &mut RowWriter<E, R>,
    recipe: &Recipe,
    size: u64,
    iter_from: u64,
) -> anyhow::Result<u64>
where
    E: InsertExecutor + Sync,
    R: Rng,
{
    let iter_to = iter_from
        .checked_add(size)
        .with_context(|| format!("Iteration range {iter_from} + {size} overflows"))?;

    let mut total = 0;
    for table in &recipe.tables {
        total += writer.write_rows(table, iter_from..iter_to).await?;
    }

    info!(
        "Generation complete: {} rows inserted into {} tables",
        total,
        recipe.tables.len()
    );
    Ok(total)
}

/// Run `dbaker introspect` against a live database.
pub async fn run_introspect(args: IntrospectArgs) -> anyhow::Result<()> {
    let tables = parse_table_idents(&args.tables)?;
    let path = args.recipe_path();

    let client = dbaker_postgresql::connect(&args.connection).await?;
    introspect(client, &tables, &path).await?;

    Ok(())
}

/// Run `dbaker generate` against a live database.
pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let path = args.recipe_path();
    let recipe = Recipe::from_file(&path)
        .with_context(|| format!("Failed to load recipe from {}", path.display()))?;

    if recipe.is_empty() {
        info!("Recipe {} has no tables, nothing to generate", path.display());
        return Ok(());
    }

    let generator = match args.seed {
        Some(seed) => {
            info!("Using random seed {}", seed);
            ValueGenerator::seeded(seed)
        }
        None => ValueGenerator::from_os_rng(),
    };

    let client = dbaker_postgresql::connect(&args.connection).await?;
    let mut writer = RowWriter::new(client, generator);

    generate(&mut writer, &recipe, args.size, args.iter_from).await?;
    Ok(())
}
