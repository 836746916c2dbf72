//! Value synthesis engine.
//!
//! `ValueGenerator` maps a column and a row iteration to one value. Columns
//! with a uniqueness constraint get a value derived from the iteration, so
//! distinct iterations give distinct values without keeping any record of
//! what was already produced. Everything else is drawn from the injected RNG.

use crate::generators::{numeric, temporal, text, uuid, TemporalKind};
use dbaker_core::{Column, ColumnType, GeneratedValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// No synthesis rule exists for the column's type
    #[error("Column type not supported for column '{column}({column_type})'")]
    UnsupportedColumnType {
        column: String,
        column_type: ColumnType,
    },

    /// The iteration's digits do not fit into the column's max length
    #[error("Iteration {iteration} does not fit into column '{column}' of max length {max_length}")]
    ValueTooLarge {
        column: String,
        iteration: u64,
        max_length: u32,
    },

    /// The iteration cannot be represented in the column's type
    #[error("Iteration {iteration} is out of range for column '{column}({column_type})'")]
    IterationOutOfRange {
        column: String,
        column_type: ColumnType,
        iteration: u64,
    },
}

impl GeneratorError {
    fn unsupported(column: &Column) -> Self {
        Self::UnsupportedColumnType {
            column: column.name.clone(),
            column_type: column.column_type,
        }
    }

    fn out_of_range(column: &Column, iteration: u64) -> Self {
        Self::IterationOutOfRange {
            column: column.name.clone(),
            column_type: column.column_type,
            iteration,
        }
    }
}

/// Synthesizes column values from an injected random source.
///
/// The caller drives the iteration counter: each row of a run must receive
/// a distinct, increasing `iteration` for unique columns to stay unique.
/// Integer columns additionally require the run to stay within the
/// column's range; iterations beyond it are reported as
/// [`GeneratorError::IterationOutOfRange`].
pub struct ValueGenerator<R = StdRng> {
    rng: R,
}

impl ValueGenerator<StdRng> {
    /// Create a generator whose random values are reproducible for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ValueGenerator<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one value per column, in column order.
    ///
    /// Stops at the first column that fails; no partial row is returned.
    pub fn generate_row(
        &mut self,
        columns: &[Column],
        iteration: u64,
    ) -> Result<Vec<GeneratedValue>, GeneratorError> {
        columns
            .iter()
            .map(|column| self.generate_value(column, iteration))
            .collect()
    }

    /// Generate a value for a single column.
    pub fn generate_value(
        &mut self,
        column: &Column,
        iteration: u64,
    ) -> Result<GeneratedValue, GeneratorError> {
        if column.is_unique {
            self.generate_unique_value(column, iteration)
        } else {
            self.generate_random_value(column)
        }
    }

    /// Generate a value with no uniqueness guarantee.
    pub fn generate_random_value(
        &mut self,
        column: &Column,
    ) -> Result<GeneratedValue, GeneratorError> {
        let rng = &mut self.rng;

        let value = match column.column_type {
            ColumnType::SmallInt => numeric::random_int16(rng),
            ColumnType::Int => numeric::random_int32(rng),
            ColumnType::BigInt => numeric::random_int64(rng),
            ColumnType::Real => numeric::random_float32(rng),
            ColumnType::Double => numeric::random_float64(rng),
            ColumnType::Decimal => return Err(GeneratorError::unsupported(column)),

            ColumnType::Char | ColumnType::VarChar => {
                GeneratedValue::Text(text::random_letters(rng, column.max_length as usize))
            }
            ColumnType::Text => {
                GeneratedValue::Text(text::random_sentence_between(rng, text::SENTENCE_WORDS))
            }

            ColumnType::Uuid => uuid::generate_uuid_v4(rng),
            ColumnType::Bool => GeneratedValue::Bool(rng.random_bool(0.5)),

            ColumnType::Date => temporal::random_temporal(rng, TemporalKind::Date),
            ColumnType::Time => temporal::random_temporal(rng, TemporalKind::Time),
            ColumnType::Timestamp => temporal::random_temporal(rng, TemporalKind::Timestamp),
            ColumnType::TimestampTz => temporal::random_temporal(rng, TemporalKind::TimestampTz),
        };

        Ok(value)
    }

    /// Generate a value derived from `iteration`.
    ///
    /// Distinct iterations give distinct values for every type except
    /// `uuid` (fresh random UUID, unique only with overwhelming probability)
    /// and `bool` (`true` for even iterations, `false` for odd ones).
    pub fn generate_unique_value(
        &mut self,
        column: &Column,
        iteration: u64,
    ) -> Result<GeneratedValue, GeneratorError> {
        let rng = &mut self.rng;

        let value = match column.column_type {
            ColumnType::SmallInt => numeric::unique_int16(iteration),
            ColumnType::Int => numeric::unique_int32(iteration),
            ColumnType::BigInt => numeric::unique_int64(iteration),
            ColumnType::Real => numeric::unique_float32(iteration),
            ColumnType::Double => numeric::unique_float64(iteration),
            ColumnType::Decimal => return Err(GeneratorError::unsupported(column)),

            ColumnType::Char | ColumnType::VarChar => {
                let digits = iteration.to_string();
                let max_length = column.max_length as usize;
                if digits.len() > max_length {
                    return Err(GeneratorError::ValueTooLarge {
                        column: column.name.clone(),
                        iteration,
                        max_length: column.max_length,
                    });
                }
                let suffix = text::random_letters(rng, max_length - digits.len());
                Some(GeneratedValue::Text(digits + &suffix))
            }
            ColumnType::Text => {
                let sentence = text::random_sentence_between(rng, text::UNIQUE_SENTENCE_WORDS);
                Some(GeneratedValue::Text(format!("{iteration}{sentence}")))
            }

            ColumnType::Uuid => Some(uuid::generate_uuid_v4(rng)),
            ColumnType::Bool => Some(GeneratedValue::Bool(iteration % 2 == 0)),

            ColumnType::Date => temporal::unique_temporal(iteration, TemporalKind::Date),
            ColumnType::Time => temporal::unique_temporal(iteration, TemporalKind::Time),
            ColumnType::Timestamp => temporal::unique_temporal(iteration, TemporalKind::Timestamp),
            ColumnType::TimestampTz => {
                temporal::unique_temporal(iteration, TemporalKind::TimestampTz)
            }
        };

        value.ok_or_else(|| GeneratorError::out_of_range(column, iteration))
    }
}
