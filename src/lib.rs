//! dbaker
//!
//! Introspects tables of a live PostgreSQL database into a JSON recipe, then
//! bakes fake rows back into those tables from the recipe.
//!
//! # Workspace Crates
//!
//! - `dbaker_core` - Column types, tables, the recipe codec and generated values
//! - `dbaker_generator` - The value synthesis engine
//! - `dbaker_postgresql` - Catalog queries, introspection, inserts and the row writer
//!
//! # CLI Usage
//!
//! ```bash
//! # Write ./shop.recipe.json describing two tables
//! dbaker introspect -H localhost -d shop -u baker -p secret \
//!   -t public.users -t sales.orders
//!
//! # Insert rows for iterations 1000..2000 into every recipe table
//! dbaker generate -H localhost -d shop -u baker -p secret -s 1000 -i 1000
//! ```

pub mod actions;
pub mod config;

pub use actions::{generate, introspect, parse_table_idents, run_generate, run_introspect};
pub use config::{recipe_path, GenerateArgs, IntrospectArgs};
