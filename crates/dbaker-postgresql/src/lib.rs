//! PostgreSQL adapter for dbaker.
//!
//! This crate connects the database-agnostic core to a live PostgreSQL
//! instance:
//!
//! - [`catalog`] - `information_schema` queries behind the [`CatalogSource`] trait
//! - [`introspect`] - Merging catalog rows into recipe [`Table`](dbaker_core::Table)s
//! - [`insert`] - Parameterized single-row inserts behind the [`InsertExecutor`] trait
//! - [`writer`] - [`RowWriter`], which pairs the value generator with an executor
//!
//! Both traits are implemented for `tokio_postgres::Client`; tests use
//! in-memory implementations.

pub mod args;
pub mod catalog;
pub mod connect;
pub mod error;
pub mod insert;
pub mod introspect;
pub mod writer;

pub use args::ConnectionArgs;
pub use catalog::{CatalogColumn, CatalogConstraint, CatalogSource, CatalogTable};
pub use connect::connect;
pub use error::{BoxError, PostgreSQLError};
pub use insert::InsertExecutor;
pub use introspect::Introspector;
pub use writer::RowWriter;
