//! Error types for calendar normalization.
//!
//! Normalization is deliberately fail-soft: missing or malformed optional
//! fields never abort a conversion, they only leave the derived fields
//! unset. The one hard precondition is an acting user — without one there is
//! nobody to own the produced task.

use thiserror::Error;

/// An error from the normalization engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// No acting user was available in the request context.
    #[error("unauthenticated context: calendar import requires an acting user")]
    Unauthenticated,
}

/// A specialized Result type for normalization operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
