//! Single-row INSERT logic for PostgreSQL.

use crate::error::BoxError;
use async_trait::async_trait;
use dbaker_core::GeneratedValue;
use tokio_postgres::types::ToSql;
use tokio_postgres::Client;

/// Executes one parameterized insert per call.
#[async_trait]
pub trait InsertExecutor {
    /// Insert one row into `schema.table`. `columns` and `values` are
    /// positional and of equal length. Returns the number of rows inserted.
    async fn insert(
        &self,
        schema: &str,
        table: &str,
        columns: &[String],
        values: &[GeneratedValue],
    ) -> Result<u64, BoxError>;
}

#[async_trait]
impl InsertExecutor for Client {
    async fn insert(
        &self,
        schema: &str,
        table: &str,
        columns: &[String],
        values: &[GeneratedValue],
    ) -> Result<u64, BoxError> {
        let sql = insert_statement(schema, table, columns);

        let params: Vec<Box<dyn ToSql + Sync + Send>> =
            values.iter().map(generated_value_to_boxed).collect();

        // Convert to references for execution
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        Ok(self.execute(&sql, &param_refs).await?)
    }
}

/// Quote an identifier, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Comma-separated, quoted column list: `"id", "name"`.
pub fn column_list(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Positional placeholders for `count` parameters: `$1, $2, $3`.
pub fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the INSERT statement for one row.
///
/// A row with no columns (every column generated by the database) becomes
/// `DEFAULT VALUES`.
pub fn insert_statement(schema: &str, table: &str, columns: &[String]) -> String {
    let target = format!("{}.{}", quote_ident(schema), quote_ident(table));

    if columns.is_empty() {
        return format!("INSERT INTO {target} DEFAULT VALUES");
    }

    format!(
        "INSERT INTO {target} ({}) VALUES ({})",
        column_list(columns),
        placeholders(columns.len())
    )
}

/// Convert a generated value to a boxed ToSql trait object.
fn generated_value_to_boxed(value: &GeneratedValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        GeneratedValue::Int16(i) => Box::new(*i),
        GeneratedValue::Int32(i) => Box::new(*i),
        GeneratedValue::Int64(i) => Box::new(*i),
        GeneratedValue::Float32(f) => Box::new(*f),
        GeneratedValue::Float64(f) => Box::new(*f),
        GeneratedValue::Text(s) => Box::new(s.clone()),
        GeneratedValue::Uuid(u) => Box::new(*u),
        GeneratedValue::Bool(b) => Box::new(*b),
        GeneratedValue::Date(d) => Box::new(*d),
        GeneratedValue::Time(t) => Box::new(*t),
        GeneratedValue::Timestamp(ts) => Box::new(*ts),
        GeneratedValue::TimestampTz(ts) => Box::new(*ts),
    }
}
