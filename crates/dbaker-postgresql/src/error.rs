//! Error types for the PostgreSQL adapter.

use dbaker_core::TableIdent;
use dbaker_generator::GeneratorError;
use thiserror::Error;

/// Opaque error reported by a catalog or insert collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while introspecting or writing to PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLError {
    /// Connection could not be established.
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connection(#[from] tokio_postgres::Error),

    /// The catalog has no such table.
    #[error("Table '{0}' not found")]
    TableNotFound(TableIdent),

    /// The catalog reported a column type dbaker has no model for.
    #[error("Column '{column}' of table '{table}' has unsupported type '{type_name}'")]
    UnsupportedColumnType {
        table: String,
        column: String,
        type_name: String,
    },

    /// A catalog query failed.
    #[error("Failed to query catalog for table '{table}': {source}")]
    Catalog {
        table: String,
        #[source]
        source: BoxError,
    },

    /// Value generation failed for a row.
    #[error("Failed to generate row values for table '{table}' on iteration {iteration}: {source}")]
    Generate {
        table: String,
        iteration: u64,
        #[source]
        source: GeneratorError,
    },

    /// The insert was rejected.
    #[error("Failed to insert data to table '{table}' on iteration {iteration}: {source}")]
    Insert {
        table: String,
        iteration: u64,
        #[source]
        source: BoxError,
    },
}
