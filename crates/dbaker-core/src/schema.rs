//! Table and recipe definitions.
//!
//! ## Type Hierarchy
//!
//! - `Column` - Single column metadata (type, size, constraint flags)
//! - `Table` - Schema-qualified table with ordered columns
//! - `Recipe` - Ordered collection of tables, persisted between runs
//!
//! A recipe is written once by introspection and read back by generation.
//! Column order inside a table is the catalog order and doubles as the bind
//! order of the insert statement, so it is preserved verbatim.

use crate::types::ColumnType;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Error Types
// ============================================================================

/// Error type for recipe operations.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// Recipe content does not match the expected shape
    #[error("Malformed recipe: {0}")]
    MalformedRecipe(#[from] serde_json::Error),

    /// Error reading or writing a recipe file
    #[error("Failed to access recipe file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for table identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    /// Identifier is not exactly `schema.name`
    #[error("Invalid table identifier '{0}', expected <schema>.<table>")]
    InvalidIdentifier(String),
}

// ============================================================================
// Column / Table
// ============================================================================

/// Column definition as captured by introspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Column {
    /// Column name
    #[serde(rename = "columnName", deserialize_with = "non_empty")]
    pub name: String,

    /// Column type
    #[serde(rename = "columnType")]
    pub column_type: ColumnType,

    /// Maximum length for `char`/`varchar` columns, zero otherwise
    #[serde(rename = "maxLength", default, skip_serializing_if = "is_zero")]
    pub max_length: u32,

    /// Whether a primary key or unique constraint covers this column
    #[serde(rename = "isUnique")]
    pub is_unique: bool,

    /// Whether the database supplies the value (identity columns)
    #[serde(rename = "isGenerated")]
    pub is_generated: bool,

    /// Whether this column is nullable
    #[serde(rename = "isNullable")]
    pub is_nullable: bool,

    /// Referenced table, if any. Not used for generation.
    #[serde(
        rename = "foreignKey",
        alias = "foreginKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub foreign_key: Option<String>,

    /// Free-form hint for semantic-aware generation. Not used yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    if name.is_empty() {
        return Err(serde::de::Error::custom("name must not be empty"));
    }
    Ok(name)
}

impl Column {
    /// Create a new non-nullable column with no constraints.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            max_length: 0,
            is_unique: false,
            is_generated: false,
            is_nullable: false,
            foreign_key: None,
            annotation: None,
        }
    }

    /// Set the maximum length (for `char`/`varchar` columns).
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Mark the column as unique.
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Mark the column as database-generated.
    pub fn generated(mut self) -> Self {
        self.is_generated = true;
        self
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }
}

/// Table definition: schema-qualified name plus ordered columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Table {
    /// Table name
    #[serde(rename = "tableName", deserialize_with = "non_empty")]
    pub name: String,

    /// Schema the table lives in
    #[serde(rename = "tableSchema", default, skip_serializing_if = "String::is_empty")]
    pub schema: String,

    /// Column definitions, in catalog order
    #[serde(rename = "tableColumns")]
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a new table definition.
    pub fn new(schema: impl Into<String>, name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            columns,
        }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns the insert has to supply, i.e. everything not generated by
    /// the database. Order is preserved.
    pub fn insertable_columns(&self) -> Vec<Column> {
        self.columns
            .iter()
            .filter(|c| !c.is_generated)
            .cloned()
            .collect()
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// `schema.name` form of this table's identity.
    pub fn ident(&self) -> TableIdent {
        TableIdent {
            schema: self.schema.clone(),
            name: self.name.clone(),
        }
    }
}

// ============================================================================
// Table Identifiers
// ============================================================================

/// A schema-qualified table identifier (`schema.name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableIdent {
    pub schema: String,
    pub name: String,
}

impl TableIdent {
    /// Split `schema.name` into its parts.
    ///
    /// Anything other than exactly one dot yields two empty parts; either
    /// side of the dot may itself be empty. Use [`TableIdent::parse`] for
    /// the validating form.
    ///
    /// ```
    /// use dbaker_core::TableIdent;
    ///
    /// let ident = TableIdent::split("public.users");
    /// assert_eq!((ident.schema.as_str(), ident.name.as_str()), ("public", "users"));
    ///
    /// let ident = TableIdent::split("db.public.users");
    /// assert!(ident.schema.is_empty() && ident.name.is_empty());
    /// ```
    pub fn split(ident: &str) -> Self {
        let parts: Vec<&str> = ident.split('.').collect();
        match parts.as_slice() {
            [schema, name] => Self {
                schema: schema.to_string(),
                name: name.to_string(),
            },
            _ => Self {
                schema: String::new(),
                name: String::new(),
            },
        }
    }

    /// Parse `schema.name`, rejecting identifiers with an empty part.
    pub fn parse(ident: &str) -> Result<Self, IdentError> {
        let split = Self::split(ident);
        if split.schema.is_empty() || split.name.is_empty() {
            return Err(IdentError::InvalidIdentifier(ident.to_string()));
        }
        Ok(split)
    }
}

impl fmt::Display for TableIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

// ============================================================================
// Recipe
// ============================================================================

/// The persisted intermediate representation: an ordered list of tables.
///
/// Encoded as a JSON array of tables:
///
/// ```json
/// [
///   {
///     "tableName": "users",
///     "tableSchema": "public",
///     "tableColumns": [
///       { "columnName": "id", "columnType": "int4", "isUnique": true,
///         "isGenerated": true, "isNullable": false }
///     ]
///   }
/// ]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Recipe {
    pub tables: Vec<Table>,
}

impl Recipe {
    /// Create a recipe from tables, keeping their order.
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Serialize to pretty-printed JSON. Field order is fixed by the struct
    /// definitions, so the output is deterministic.
    pub fn encode(&self) -> Result<Vec<u8>, RecipeError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parse a recipe, failing on any shape mismatch or unknown column type.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecipeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a recipe from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RecipeError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&content)
    }

    /// Write the recipe to a JSON file, replacing any existing file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RecipeError> {
        let path = path.as_ref();
        let content = self.encode()?;
        fs::write(path, content).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get a table by schema and name.
    pub fn get_table(&self, schema: &str, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.schema == schema && t.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_table() -> Table {
        Table::new(
            "public",
            "users",
            vec![
                Column::new("id", ColumnType::Int).unique().generated(),
                Column::new("name", ColumnType::VarChar).with_max_length(255),
                Column::new("bio", ColumnType::Text).nullable(),
            ],
        )
    }

    fn products_table() -> Table {
        let mut owner = Column::new("owner_id", ColumnType::Int);
        owner.foreign_key = Some("public.users".to_string());
        let mut sku = Column::new("sku", ColumnType::Char).with_max_length(12).unique();
        sku.annotation = Some("product code".to_string());

        Table::new(
            "shop",
            "products",
            vec![
                Column::new("product_id", ColumnType::Uuid).unique(),
                Column::new("price", ColumnType::Decimal),
                owner,
                sku,
                Column::new("created_at", ColumnType::TimestampTz),
            ],
        )
    }

    #[test]
    fn test_split_identifiers() {
        let cases = [
            ("public.users", "public", "users"),
            ("users", "", ""),
            ("db.public.users", "", ""),
            ("", "", ""),
            (".users", "", "users"),
            ("public.", "public", ""),
        ];

        for (input, schema, name) in cases {
            let ident = TableIdent::split(input);
            assert_eq!(ident.schema, schema, "schema of {input:?}");
            assert_eq!(ident.name, name, "name of {input:?}");
        }
    }

    #[test]
    fn test_parse_identifiers() {
        let ident = TableIdent::parse("public.users").unwrap();
        assert_eq!(ident.to_string(), "public.users");

        for input in ["users", "db.public.users", ".users", "public.", ""] {
            assert_eq!(
                TableIdent::parse(input),
                Err(IdentError::InvalidIdentifier(input.to_string()))
            );
        }
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let recipes = [
            Recipe::default(),
            Recipe::new(vec![Table::new("public", "empty", vec![])]),
            Recipe::new(vec![users_table()]),
            Recipe::new(vec![products_table(), users_table()]),
        ];

        for recipe in recipes {
            let bytes = recipe.encode().unwrap();
            assert_eq!(Recipe::decode(&bytes).unwrap(), recipe);
        }
    }

    #[test]
    fn test_encoded_shape() {
        let recipe = Recipe::new(vec![users_table()]);
        let value: serde_json::Value = serde_json::from_slice(&recipe.encode().unwrap()).unwrap();

        let table = &value[0];
        assert_eq!(table["tableName"], "users");
        assert_eq!(table["tableSchema"], "public");

        let id = &table["tableColumns"][0];
        assert_eq!(id["columnName"], "id");
        assert_eq!(id["columnType"], "int4");
        assert_eq!(id["isUnique"], true);
        assert_eq!(id["isGenerated"], true);
        assert!(id.get("maxLength").is_none());
        assert!(id.get("foreignKey").is_none());
        assert!(id.get("annotation").is_none());

        assert_eq!(table["tableColumns"][1]["maxLength"], 255);
    }

    #[test]
    fn test_decode_legacy_foreign_key_spelling() {
        let json = r#"[{
            "tableName": "orders",
            "tableSchema": "public",
            "tableColumns": [{
                "columnName": "user_id",
                "columnType": "bigint",
                "isUnique": false,
                "isGenerated": false,
                "isNullable": true,
                "foreginKey": "public.users"
            }]
        }]"#;

        let recipe = Recipe::decode(json.as_bytes()).unwrap();
        let column = &recipe.tables[0].columns[0];
        assert_eq!(column.foreign_key.as_deref(), Some("public.users"));
        assert_eq!(column.column_type, ColumnType::BigInt);
        assert!(column.is_nullable);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let cases = [
            // not an array
            r#"{"tableName": "users"}"#,
            // missing tableColumns
            r#"[{"tableName": "users"}]"#,
            // missing isUnique
            r#"[{"tableName": "t", "tableColumns": [
                {"columnName": "a", "columnType": "int4", "isGenerated": false, "isNullable": false}
            ]}]"#,
            // unknown column type
            r#"[{"tableName": "t", "tableColumns": [
                {"columnName": "a", "columnType": "jsonb", "isUnique": false,
                 "isGenerated": false, "isNullable": false}
            ]}]"#,
            // wrong field type
            r#"[{"tableName": "t", "tableColumns": [
                {"columnName": "a", "columnType": "int4", "isUnique": "yes",
                 "isGenerated": false, "isNullable": false}
            ]}]"#,
            // unknown field
            r#"[{"tableName": "t", "tableColumns": [], "rowCount": 3}]"#,
            // empty table name
            r#"[{"tableName": "", "tableColumns": []}]"#,
            // empty column name
            r#"[{"tableName": "t", "tableColumns": [
                {"columnName": "", "columnType": "int4", "isUnique": false,
                 "isGenerated": false, "isNullable": false}
            ]}]"#,
            "not json",
        ];

        for json in cases {
            assert!(
                matches!(
                    Recipe::decode(json.as_bytes()),
                    Err(RecipeError::MalformedRecipe(_))
                ),
                "expected MalformedRecipe for {json}"
            );
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.recipe.json");

        let recipe = Recipe::new(vec![users_table(), products_table()]);
        recipe.to_file(&path).unwrap();

        assert_eq!(Recipe::from_file(&path).unwrap(), recipe);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Recipe::from_file(dir.path().join("missing.recipe.json"));
        assert!(matches!(result, Err(RecipeError::Io { .. })));
    }

    #[test]
    fn test_insertable_columns() {
        let table = users_table();
        let names: Vec<String> = table
            .insertable_columns()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["name", "bio"]);
        assert_eq!(table.column_names(), vec!["id", "name", "bio"]);
        assert_eq!(table.ident().to_string(), "public.users");
    }
}
