//! Schema introspection: catalog rows to recipe tables.

use crate::catalog::{CatalogColumn, CatalogConstraint, CatalogSource, CatalogTable};
use crate::error::PostgreSQLError;
use dbaker_core::{Column, ColumnType, Recipe, Table, TableIdent};
use tracing::{debug, info, warn};

/// Constraint types that make a column unique.
const UNIQUE_CONSTRAINT_TYPES: [&str; 2] = ["UNIQUE", "PRIMARY KEY"];

/// Builds recipe tables from a catalog source.
pub struct Introspector<C> {
    catalog: C,
}

impl<C: CatalogSource + Sync> Introspector<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Introspect a single table.
    pub async fn introspect_table(&self, ident: &TableIdent) -> Result<Table, PostgreSQLError> {
        let catalog_error = |source| PostgreSQLError::Catalog {
            table: ident.to_string(),
            source,
        };

        let table = self
            .catalog
            .find_table(&ident.schema, &ident.name)
            .await
            .map_err(catalog_error)?
            .ok_or_else(|| PostgreSQLError::TableNotFound(ident.clone()))?;

        let columns = self
            .catalog
            .list_columns(&ident.schema, &ident.name)
            .await
            .map_err(catalog_error)?;

        let constraints = self
            .catalog
            .list_constraints(&ident.schema, &ident.name)
            .await
            .map_err(catalog_error)?;

        debug!(
            "Table {} has {} columns and {} constraint rows",
            ident,
            columns.len(),
            constraints.len()
        );

        build_table(table, columns, &constraints)
    }

    /// Introspect tables in order, stopping at the first failure.
    pub async fn introspect_tables(
        &self,
        idents: &[TableIdent],
    ) -> Result<Recipe, PostgreSQLError> {
        let mut tables = Vec::with_capacity(idents.len());

        for ident in idents {
            info!("Introspecting table: {}", ident);
            tables.push(self.introspect_table(ident).await?);
        }

        Ok(Recipe::new(tables))
    }
}

/// Merge catalog rows into a recipe table.
///
/// Column order follows `columns`. A column is unique when any constraint
/// row names it with a `UNIQUE` or `PRIMARY KEY` constraint type.
pub fn build_table(
    table: CatalogTable,
    columns: Vec<CatalogColumn>,
    constraints: &[CatalogConstraint],
) -> Result<Table, PostgreSQLError> {
    let columns = columns
        .into_iter()
        .map(|catalog_column| {
            let mut column = map_column(&table, catalog_column)?;
            column.is_unique = constraints.iter().any(|c| is_unique(&column, c));
            Ok(column)
        })
        .collect::<Result<Vec<_>, PostgreSQLError>>()?;

    Ok(Table::new(table.schema, table.name, columns))
}

fn map_column(table: &CatalogTable, row: CatalogColumn) -> Result<Column, PostgreSQLError> {
    let column_type = ColumnType::from_catalog_name(&row.udt_name).map_err(|_| {
        PostgreSQLError::UnsupportedColumnType {
            table: format!("{}.{}", table.schema, table.name),
            column: row.column_name.clone(),
            type_name: row.udt_name.clone(),
        }
    })?;

    let max_length = row
        .character_maximum_length
        .and_then(|len| u32::try_from(len).ok())
        .unwrap_or(0);

    // varchar without a length limit behaves like text
    let column_type = if column_type.is_bounded_text() && max_length == 0 {
        warn!(
            "Column '{}' of table '{}.{}' has no length limit, generating it as text",
            row.column_name, table.schema, table.name
        );
        ColumnType::Text
    } else {
        column_type
    };

    let mut column = Column::new(row.column_name, column_type);
    column.max_length = max_length;
    column.is_generated = row.is_identity == "YES";
    column.is_nullable = row.is_nullable == "YES";

    Ok(column)
}

fn is_unique(column: &Column, constraint: &CatalogConstraint) -> bool {
    column.name == constraint.column_name
        && constraint
            .constraint_type
            .as_deref()
            .is_some_and(|ty| UNIQUE_CONSTRAINT_TYPES.contains(&ty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    fn column(name: &str, udt: &str, len: Option<i32>, nullable: &str, identity: &str) -> CatalogColumn {
        CatalogColumn {
            column_name: name.to_string(),
            udt_name: udt.to_string(),
            character_maximum_length: len,
            is_nullable: nullable.to_string(),
            is_identity: identity.to_string(),
        }
    }

    fn constraint(name: &str, ty: Option<&str>, column: &str) -> CatalogConstraint {
        CatalogConstraint {
            constraint_name: name.to_string(),
            constraint_type: ty.map(str::to_string),
            column_name: column.to_string(),
            ordinal_position: 1,
        }
    }

    /// In-memory catalog keyed by `schema.name`.
    #[derive(Default)]
    struct MemoryCatalog {
        tables: HashMap<String, (Vec<CatalogColumn>, Vec<CatalogConstraint>)>,
        fail_columns: bool,
    }

    impl MemoryCatalog {
        fn with_table(
            mut self,
            ident: &str,
            columns: Vec<CatalogColumn>,
            constraints: Vec<CatalogConstraint>,
        ) -> Self {
            self.tables.insert(ident.to_string(), (columns, constraints));
            self
        }

        fn entry(&self, schema: &str, name: &str) -> Option<&(Vec<CatalogColumn>, Vec<CatalogConstraint>)> {
            self.tables.get(&format!("{schema}.{name}"))
        }
    }

    #[async_trait]
    impl CatalogSource for MemoryCatalog {
        async fn find_table(
            &self,
            schema: &str,
            name: &str,
        ) -> Result<Option<CatalogTable>, BoxError> {
            Ok(self.entry(schema, name).map(|_| CatalogTable {
                schema: schema.to_string(),
                name: name.to_string(),
            }))
        }

        async fn list_columns(
            &self,
            schema: &str,
            name: &str,
        ) -> Result<Vec<CatalogColumn>, BoxError> {
            if self.fail_columns {
                return Err("connection reset".into());
            }
            Ok(self.entry(schema, name).map(|e| e.0.clone()).unwrap_or_default())
        }

        async fn list_constraints(
            &self,
            schema: &str,
            name: &str,
        ) -> Result<Vec<CatalogConstraint>, BoxError> {
            Ok(self.entry(schema, name).map(|e| e.1.clone()).unwrap_or_default())
        }
    }

    fn users_catalog() -> MemoryCatalog {
        MemoryCatalog::default().with_table(
            "public.users",
            vec![
                column("id", "int4", None, "NO", "YES"),
                column("email", "varchar", Some(255), "NO", "NO"),
                column("nickname", "varchar", Some(32), "YES", "NO"),
                column("created_at", "timestamptz", None, "NO", "NO"),
                column("team_id", "int8", None, "YES", "NO"),
            ],
            vec![
                constraint("users_pkey", Some("PRIMARY KEY"), "id"),
                constraint("users_email_key", Some("UNIQUE"), "email"),
                constraint("users_team_fkey", Some("FOREIGN KEY"), "team_id"),
                constraint("orphan", None, "nickname"),
            ],
        )
    }

    #[tokio::test]
    async fn test_introspect_table_merges_constraints() {
        let introspector = Introspector::new(users_catalog());
        let ident = TableIdent::parse("public.users").unwrap();

        let table = introspector.introspect_table(&ident).await.unwrap();

        assert_eq!(table.schema, "public");
        assert_eq!(table.name, "users");
        assert_eq!(
            table.column_names(),
            vec!["id", "email", "nickname", "created_at", "team_id"]
        );

        let id = table.get_column("id").unwrap();
        assert_eq!(id.column_type, ColumnType::Int);
        assert!(id.is_unique && id.is_generated && !id.is_nullable);

        let email = table.get_column("email").unwrap();
        assert_eq!(email.column_type, ColumnType::VarChar);
        assert_eq!(email.max_length, 255);
        assert!(email.is_unique && !email.is_generated);

        let nickname = table.get_column("nickname").unwrap();
        assert!(!nickname.is_unique && nickname.is_nullable);

        let team = table.get_column("team_id").unwrap();
        assert_eq!(team.column_type, ColumnType::BigInt);
        assert!(!team.is_unique);
        assert_eq!(team.max_length, 0);
    }

    #[tokio::test]
    async fn test_introspect_missing_table() {
        let introspector = Introspector::new(users_catalog());
        let ident = TableIdent::parse("public.orders").unwrap();

        let err = introspector.introspect_table(&ident).await.unwrap_err();
        assert!(matches!(err, PostgreSQLError::TableNotFound(ref i) if *i == ident));
        assert_eq!(err.to_string(), "Table 'public.orders' not found");
    }

    #[tokio::test]
    async fn test_introspect_catalog_failure_has_context() {
        let mut catalog = users_catalog();
        catalog.fail_columns = true;
        let introspector = Introspector::new(catalog);
        let ident = TableIdent::parse("public.users").unwrap();

        let err = introspector.introspect_table(&ident).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to query catalog for table 'public.users': connection reset"
        );
    }

    #[tokio::test]
    async fn test_introspect_tables_stops_on_first_error() {
        let introspector = Introspector::new(users_catalog());
        let idents = vec![
            TableIdent::parse("public.users").unwrap(),
            TableIdent::parse("public.missing").unwrap(),
            TableIdent::parse("public.users").unwrap(),
        ];

        assert!(introspector.introspect_tables(&idents).await.is_err());

        let recipe = introspector.introspect_tables(&idents[..1]).await.unwrap();
        assert_eq!(recipe.tables.len(), 1);
    }

    #[test]
    fn test_unbounded_varchar_becomes_text() {
        let table = CatalogTable {
            schema: "public".to_string(),
            name: "notes".to_string(),
        };
        let built = build_table(
            table,
            vec![
                column("title", "varchar", Some(80), "NO", "NO"),
                column("body", "varchar", None, "NO", "NO"),
            ],
            &[constraint("notes_body_key", Some("UNIQUE"), "body")],
        )
        .unwrap();

        let title = built.get_column("title").unwrap();
        assert_eq!(title.column_type, ColumnType::VarChar);
        assert_eq!(title.max_length, 80);

        let body = built.get_column("body").unwrap();
        assert_eq!(body.column_type, ColumnType::Text);
        assert_eq!(body.max_length, 0);
        assert!(body.is_unique);

        let mut generator = dbaker_generator::ValueGenerator::seeded(3);
        let value = generator.generate_value(body, 0).unwrap();
        assert!(value.as_str().unwrap().starts_with('0'));
    }

    #[test]
    fn test_unsupported_udt() {
        let table = CatalogTable {
            schema: "public".to_string(),
            name: "docs".to_string(),
        };
        let err = build_table(table, vec![column("body", "jsonb", None, "NO", "NO")], &[])
            .unwrap_err();

        assert!(matches!(
            err,
            PostgreSQLError::UnsupportedColumnType { ref column, ref type_name, .. }
                if column == "body" && type_name == "jsonb"
        ));
    }

    #[test]
    fn test_composite_key_marks_each_column() {
        let table = CatalogTable {
            schema: "public".to_string(),
            name: "memberships".to_string(),
        };
        let built = build_table(
            table,
            vec![
                column("user_id", "int4", None, "NO", "NO"),
                column("team_id", "int4", None, "NO", "NO"),
                column("role", "text", None, "YES", "NO"),
            ],
            &[
                constraint("memberships_pkey", Some("PRIMARY KEY"), "user_id"),
                constraint("memberships_pkey", Some("PRIMARY KEY"), "team_id"),
            ],
        )
        .unwrap();

        let unique: Vec<bool> = built.columns.iter().map(|c| c.is_unique).collect();
        assert_eq!(unique, vec![true, true, false]);
    }
}
