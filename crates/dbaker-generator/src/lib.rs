//! Value synthesis engine for dbaker.
//!
//! This crate provides the `ValueGenerator`, which turns a recipe column and
//! a row iteration into a [`GeneratedValue`](dbaker_core::GeneratedValue).
//! The random source is injected, so a seeded generator reproduces the same
//! rows run after run.
//!
//! # Architecture
//!
//! ```text
//! Column { type, max_length, is_unique, .. } + iteration
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   ValueGenerator     │
//! │                      │
//! │  is_unique?          │
//! │   ├─ yes: derive     │──► value from iteration (+ random suffix)
//! │   └─ no:  sample     │──► value from rng
//! └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use dbaker_core::{Column, ColumnType, GeneratedValue};
//! use dbaker_generator::ValueGenerator;
//!
//! let columns = vec![
//!     Column::new("id", ColumnType::BigInt).unique(),
//!     Column::new("code", ColumnType::VarChar).with_max_length(5).unique(),
//!     Column::new("bio", ColumnType::Text),
//! ];
//!
//! let mut generator = ValueGenerator::seeded(42);
//! let row = generator.generate_row(&columns, 42).unwrap();
//!
//! assert_eq!(row[0], GeneratedValue::Int64(42));
//! assert!(row[1].to_string().starts_with("42"));
//! ```
//!
//! # Type Rules
//!
//! | Type | Random | Unique |
//! |------|--------|--------|
//! | `smallint` / `int4` / `bigint` | full range | the iteration |
//! | `real` / `double` | `[0, 1)` | the iteration, up to 2^24 / 2^53 |
//! | `char` / `varchar` | `max_length` letters | iteration digits + letters |
//! | `text` | sentence of 1-10 words | iteration digits + sentence of 1-9 words |
//! | `uuid` | random v4 | random v4 |
//! | `bool` | coin flip | even iteration |
//! | `date` | 1900..2100 | 2000-01-01 + iteration days |
//! | `time` | 1900..2100 | 00:00:00 + iteration seconds, one day at most |
//! | `timestamp` / `timestamptz` | 1900..2100 | 2000-01-01 + iteration seconds |
//! | `decimal` | unsupported | unsupported |
//!
//! Unique iterations a type cannot represent exactly fail with
//! [`GeneratorError::IterationOutOfRange`].

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, ValueGenerator};
