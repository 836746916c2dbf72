//! Catalog queries against `information_schema`.
//!
//! `CatalogSource` is the seam between the introspector and the live
//! database: three lookups per table, each returning raw catalog rows.
//! The PostgreSQL implementation lives on `tokio_postgres::Client`.

use crate::error::BoxError;
use async_trait::async_trait;
use tokio_postgres::Client;

/// Canonical identity of a table as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTable {
    pub schema: String,
    pub name: String,
}

/// One row of `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumn {
    pub column_name: String,
    /// Underlying type name (`udt_name`), e.g. `int4`, `varchar`
    pub udt_name: String,
    pub character_maximum_length: Option<i32>,
    /// `YES` / `NO`
    pub is_nullable: String,
    /// `YES` / `NO`
    pub is_identity: String,
}

/// One row of `information_schema.key_column_usage` joined with its
/// constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConstraint {
    pub constraint_name: String,
    /// `PRIMARY KEY`, `UNIQUE`, `FOREIGN KEY`, ...
    pub constraint_type: Option<String>,
    pub column_name: String,
    pub ordinal_position: i32,
}

/// Source of schema catalog rows.
#[async_trait]
pub trait CatalogSource {
    /// Look up a table by schema and name. `None` when it does not exist.
    async fn find_table(&self, schema: &str, name: &str)
        -> Result<Option<CatalogTable>, BoxError>;

    /// List the table's columns in ordinal order.
    async fn list_columns(&self, schema: &str, name: &str) -> Result<Vec<CatalogColumn>, BoxError>;

    /// List every constraint participation of the table's columns.
    async fn list_constraints(
        &self,
        schema: &str,
        name: &str,
    ) -> Result<Vec<CatalogConstraint>, BoxError>;
}

const FIND_TABLE_QUERY: &str = "
    SELECT table_schema::text, table_name::text
    FROM information_schema.tables
    WHERE table_schema = $1 AND table_name = $2";

const LIST_COLUMNS_QUERY: &str = "
    SELECT column_name::text,
           udt_name::text,
           character_maximum_length::int4,
           is_nullable::text,
           is_identity::text
    FROM information_schema.columns
    WHERE table_schema = $1 AND table_name = $2
    ORDER BY ordinal_position";

const LIST_CONSTRAINTS_QUERY: &str = "
    SELECT ku.constraint_name::text,
           tc.constraint_type::text,
           ku.column_name::text,
           ku.ordinal_position::int4
    FROM information_schema.key_column_usage AS ku
    LEFT JOIN information_schema.table_constraints AS tc
      ON ku.constraint_name = tc.constraint_name
     AND ku.table_schema = tc.table_schema
     AND ku.table_name = tc.table_name
    WHERE ku.table_schema = $1 AND ku.table_name = $2";

#[async_trait]
impl CatalogSource for Client {
    async fn find_table(
        &self,
        schema: &str,
        name: &str,
    ) -> Result<Option<CatalogTable>, BoxError> {
        let row = self.query_opt(FIND_TABLE_QUERY, &[&schema, &name]).await?;

        Ok(row.map(|row| CatalogTable {
            schema: row.get(0),
            name: row.get(1),
        }))
    }

    async fn list_columns(&self, schema: &str, name: &str) -> Result<Vec<CatalogColumn>, BoxError> {
        let rows = self.query(LIST_COLUMNS_QUERY, &[&schema, &name]).await?;

        Ok(rows
            .into_iter()
            .map(|row| CatalogColumn {
                column_name: row.get(0),
                udt_name: row.get(1),
                character_maximum_length: row.get(2),
                is_nullable: row.get(3),
                is_identity: row.get(4),
            })
            .collect())
    }

    async fn list_constraints(
        &self,
        schema: &str,
        name: &str,
    ) -> Result<Vec<CatalogConstraint>, BoxError> {
        let rows = self.query(LIST_CONSTRAINTS_QUERY, &[&schema, &name]).await?;

        Ok(rows
            .into_iter()
            .map(|row| CatalogConstraint {
                constraint_name: row.get(0),
                constraint_type: row.get(1),
                column_name: row.get(2),
                ordinal_position: row.get(3),
            })
            .collect())
    }
}
