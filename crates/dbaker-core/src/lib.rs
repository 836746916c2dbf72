//! Core types for dbaker.
//!
//! This crate provides the foundational types shared by the generator and
//! the database adapters:
//!
//! - [`ColumnType`] - Closed set of column types a recipe can describe
//! - [`Column`] / [`Table`] - Introspected table metadata
//! - [`Recipe`] - Persisted list of tables, with its JSON codec
//! - [`TableIdent`] - `schema.table` identifiers
//! - [`GeneratedValue`] - Values produced by the synthesis engine
//!
//! # Architecture
//!
//! ```text
//! dbaker-core (this crate)
//!    │
//!    ├─── dbaker-generator   (column + iteration -> GeneratedValue)
//!    │
//!    └─── dbaker-postgresql  (catalog -> Table, GeneratedValue -> INSERT)
//! ```
//!
//! # Example
//!
//! ```rust
//! use dbaker_core::{Column, ColumnType, Recipe, Table};
//!
//! let recipe = Recipe::new(vec![Table::new(
//!     "public",
//!     "users",
//!     vec![
//!         Column::new("id", ColumnType::Int).unique().generated(),
//!         Column::new("email", ColumnType::VarChar).with_max_length(64).unique(),
//!     ],
//! )]);
//!
//! let bytes = recipe.encode().unwrap();
//! assert_eq!(Recipe::decode(&bytes).unwrap(), recipe);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{Column, IdentError, Recipe, RecipeError, Table, TableIdent};
pub use types::{ColumnType, UnknownColumnType};
pub use values::GeneratedValue;
