//! Individual value generators for different column types.
//!
//! Each module exposes two families of functions: `random_*` for columns
//! without a uniqueness constraint, and `unique_*` for values derived from
//! the row iteration. Dispatch on `ColumnType` lives in
//! [`crate::generator::ValueGenerator`].

pub mod numeric;
pub mod temporal;
pub mod text;
pub mod uuid;

pub use temporal::TemporalKind;
