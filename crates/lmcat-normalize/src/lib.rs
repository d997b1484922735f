//! Field normalization for the language model catalog.
//!
//! Turns the raw text of one spreadsheet cell into a typed value:
//!
//! - **config**: immutable source-language markers, vocabulary and header labels
//! - **cell**: raw cell text plus embedded links
//! - **rules**: the closed per-field rule table and [`normalize`]
//! - **value**: normalized values and their storage form
//!
//! Normalization is total and side-effect free: every cell yields a value,
//! `Null`, or a [`NormalizationError`] for text outside a controlled vocabulary.

pub mod cell;
pub mod config;
pub mod error;
pub mod rules;
pub mod value;

pub use cell::{Link, RawCell};
pub use config::{AvailabilityMarkers, NormalizerConfig};
pub use error::{ConfigError, NormalizationError};
pub use rules::{FieldRule, normalize, rule_for};
pub use value::FieldValue;
