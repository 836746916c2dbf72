//! Column type model.
//!
//! `ColumnType` is the closed set of column types dbaker knows how to
//! describe in a recipe. Every consumer matches on it exhaustively, so adding
//! a variant is a breaking change that forces the synthesis paths and the
//! codec to be revisited.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Column type recorded in a recipe.
///
/// # Recipe Format
///
/// Each type is stored as its canonical lowercase tag:
/// ```json
/// "columnType": "varchar"
/// "columnType": "timestamptz"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    // Integer types
    /// 16-bit signed integer
    SmallInt,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    BigInt,

    // Floating point
    /// 32-bit IEEE 754 floating point
    Real,

    /// 64-bit IEEE 754 floating point
    Double,

    // Exact numeric
    /// Exact decimal. Reserved: no synthesis rule exists for it yet.
    Decimal,

    // String types
    /// Fixed-length character string, bounded by the column's max length
    Char,

    /// Variable-length character string, bounded by the column's max length
    VarChar,

    /// Unlimited text
    Text,

    // Special types
    /// UUID (128-bit)
    Uuid,

    /// Boolean value
    Bool,

    // Temporal types
    /// Date only (YYYY-MM-DD)
    Date,

    /// Time only (HH:MM:SS)
    Time,

    /// Timestamp without timezone
    Timestamp,

    /// Timestamp with timezone
    TimestampTz,
}

/// Error returned when a type tag is not one of the recognized column types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column type: {0}")]
pub struct UnknownColumnType(pub String);

impl ColumnType {
    /// All column types, in declaration order.
    pub const ALL: [ColumnType; 15] = [
        Self::SmallInt,
        Self::Int,
        Self::BigInt,
        Self::Real,
        Self::Double,
        Self::Decimal,
        Self::Char,
        Self::VarChar,
        Self::Text,
        Self::Uuid,
        Self::Bool,
        Self::Date,
        Self::Time,
        Self::Timestamp,
        Self::TimestampTz,
    ];

    /// Canonical lowercase tag used in recipes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallInt => "smallint",
            Self::Int => "int4",
            Self::BigInt => "bigint",
            Self::Real => "real",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::VarChar => "varchar",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamptz",
        }
    }

    /// Resolve a type name reported by the PostgreSQL catalog.
    ///
    /// Accepts the canonical tags as well as the `udt_name` spellings
    /// PostgreSQL uses for the same types (`int2`, `int8`, `float4`,
    /// `float8`, `bpchar`, `numeric`).
    ///
    /// # Example
    ///
    /// ```
    /// use dbaker_core::ColumnType;
    ///
    /// assert_eq!(ColumnType::from_catalog_name("int8").unwrap(), ColumnType::BigInt);
    /// assert_eq!(ColumnType::from_catalog_name("varchar").unwrap(), ColumnType::VarChar);
    /// assert!(ColumnType::from_catalog_name("jsonb").is_err());
    /// ```
    pub fn from_catalog_name(name: &str) -> Result<Self, UnknownColumnType> {
        match name {
            "int2" => Ok(Self::SmallInt),
            "int8" => Ok(Self::BigInt),
            "float4" => Ok(Self::Real),
            "float8" => Ok(Self::Double),
            "bpchar" => Ok(Self::Char),
            "numeric" => Ok(Self::Decimal),
            other => other.parse(),
        }
    }

    /// Check if this type is bounded by the column's max length.
    pub fn is_bounded_text(&self) -> bool {
        matches!(self, Self::Char | Self::VarChar)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownColumnType(s.to_string()))
    }
}

impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct ColumnTypeVisitor;

        impl Visitor<'_> for ColumnTypeVisitor {
            type Value = ColumnType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a lowercase column type tag")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColumnTypeVisitor)
    }
}
