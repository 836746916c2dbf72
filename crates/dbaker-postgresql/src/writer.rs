//! Row writer: one generated row, one insert.

use crate::error::PostgreSQLError;
use crate::insert::InsertExecutor;
use dbaker_core::{Column, Table};
use dbaker_generator::ValueGenerator;
use rand::rngs::StdRng;
use rand::Rng;
use std::ops::Range;
use tracing::{debug, info};

/// Generates rows for recipe tables and hands them to an insert executor.
///
/// Columns the database generates itself are left out of the insert; every
/// other column gets one value from the [`ValueGenerator`].
pub struct RowWriter<E, R = StdRng> {
    executor: E,
    generator: ValueGenerator<R>,
}

impl<E: InsertExecutor + Sync, R: Rng> RowWriter<E, R> {
    pub fn new(executor: E, generator: ValueGenerator<R>) -> Self {
        Self {
            executor,
            generator,
        }
    }

    /// Generate and insert the row for `iteration`.
    pub async fn write_row(&mut self, table: &Table, iteration: u64) -> Result<(), PostgreSQLError> {
        let columns = table.insertable_columns();
        let names = column_names(&columns);
        self.insert_row(table, &columns, &names, iteration).await
    }

    /// Write one row per iteration in `iterations`, in order, stopping at
    /// the first failure. Returns the number of rows written.
    pub async fn write_rows(
        &mut self,
        table: &Table,
        iterations: Range<u64>,
    ) -> Result<u64, PostgreSQLError> {
        info!(
            "Populating table '{}' with {} rows (iterations {}..{})",
            table.ident(),
            iterations.end.saturating_sub(iterations.start),
            iterations.start,
            iterations.end
        );

        let columns = table.insertable_columns();
        let names = column_names(&columns);

        let mut written = 0;
        for iteration in iterations {
            self.insert_row(table, &columns, &names, iteration).await?;
            written += 1;
        }

        info!("Table '{}' done: {} rows inserted", table.ident(), written);
        Ok(written)
    }

    async fn insert_row(
        &mut self,
        table: &Table,
        columns: &[Column],
        names: &[String],
        iteration: u64,
    ) -> Result<(), PostgreSQLError> {
        let values = self
            .generator
            .generate_row(columns, iteration)
            .map_err(|source| PostgreSQLError::Generate {
                table: table.ident().to_string(),
                iteration,
                source,
            })?;

        debug!(
            "Inserting into {}.{} ({}) values {:?}",
            table.schema,
            table.name,
            names.join(", "),
            values
        );

        self.executor
            .insert(&table.schema, &table.name, names, &values)
            .await
            .map_err(|source| PostgreSQLError::Insert {
                table: table.ident().to_string(),
                iteration,
                source,
            })?;

        Ok(())
    }

    /// Get a reference to the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }
}

fn column_names(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.name.clone()).collect()
}
