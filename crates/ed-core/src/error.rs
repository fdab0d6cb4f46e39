//! Configuration and parsing error type.
//!
//! Sub-crates define their own error enums and wrap `EdError` as one variant
//! via `#[from]`, so a refused configuration surfaces unchanged at every
//! layer.

use thiserror::Error;

use crate::Tier;

/// The error type for `ed-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EdError {
    #[error("total room count {total} exceeds the limit of {limit}")]
    TooManyRooms { total: u32, limit: u32 },

    #[error("total staffing cost {cost} exceeds the limit of {limit}")]
    StaffingCostExceeded { cost: i64, limit: i64 },

    #[error("invalid {param:?} for type {tier}: {reason}")]
    InvalidDistributionParameter {
        tier:   Tier,
        param:  String,
        reason: String,
    },

    #[error("unknown patient or room type {0:?}: expected A, B, or C")]
    UnknownTier(String),

    #[error("unknown distribution {0:?}: expected poisson, uniform, or normal")]
    UnknownDistribution(String),

    #[error("unknown assignment policy {0:?}")]
    UnknownPolicy(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ed-*` crates.
pub type EdResult<T> = Result<T, EdError>;
