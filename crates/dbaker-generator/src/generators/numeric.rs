//! Numeric value generators.

use dbaker_core::GeneratedValue;
use rand::Rng;

/// Generate a random `smallint` over its full range.
pub fn random_int16<R: Rng>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Int16(rng.random_range(i16::MIN..=i16::MAX))
}

/// Generate a random `int` over its full range.
pub fn random_int32<R: Rng>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Int32(rng.random_range(i32::MIN..=i32::MAX))
}

/// Generate a random `bigint` over its full range.
pub fn random_int64<R: Rng>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Int64(rng.random_range(i64::MIN..=i64::MAX))
}

/// Generate a random `real` from the standard distribution, `[0, 1)`.
pub fn random_float32<R: Rng>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Float32(rng.random::<f32>())
}

/// Generate a random `double` from the standard distribution, `[0, 1)`.
pub fn random_float64<R: Rng>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Float64(rng.random::<f64>())
}

/// The iteration itself as a `smallint`, if it fits.
pub fn unique_int16(iteration: u64) -> Option<GeneratedValue> {
    i16::try_from(iteration).ok().map(GeneratedValue::Int16)
}

/// The iteration itself as an `int`, if it fits.
pub fn unique_int32(iteration: u64) -> Option<GeneratedValue> {
    i32::try_from(iteration).ok().map(GeneratedValue::Int32)
}

/// The iteration itself as a `bigint`, if it fits.
pub fn unique_int64(iteration: u64) -> Option<GeneratedValue> {
    i64::try_from(iteration).ok().map(GeneratedValue::Int64)
}

/// Largest iteration a `real` represents exactly (2^24).
pub const MAX_EXACT_FLOAT32: u64 = 1 << f32::MANTISSA_DIGITS;

/// Largest iteration a `double` represents exactly (2^53).
pub const MAX_EXACT_FLOAT64: u64 = 1 << f64::MANTISSA_DIGITS;

/// The iteration as a `real`, if it is represented exactly.
pub fn unique_float32(iteration: u64) -> Option<GeneratedValue> {
    (iteration <= MAX_EXACT_FLOAT32).then(|| GeneratedValue::Float32(iteration as f32))
}

/// The iteration as a `double`, if it is represented exactly.
pub fn unique_float64(iteration: u64) -> Option<GeneratedValue> {
    (iteration <= MAX_EXACT_FLOAT64).then(|| GeneratedValue::Float64(iteration as f64))
}
