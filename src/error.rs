//! Error types for maxboltz.
//!
//! All fallible operations return `Result<T, MbError>` instead of
//! panicking; the distribution formulas are undefined for non-positive
//! molar mass or temperature, so those inputs are rejected up front
//! rather than allowed to propagate NaN through the curves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for maxboltz operations.
pub type MbResult<T> = Result<T, MbError>;

/// Which scenario parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterField {
    /// Molar mass of the gas (kg/mol internally, g/mol at the boundary).
    MolarMass,
    /// Absolute temperature (K).
    Temperature,
}

impl std::fmt::Display for ParameterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MolarMass => write!(f, "molar mass"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}

/// Unified error type for all maxboltz operations.
#[derive(Debug, Error)]
pub enum MbError {
    // ===== Domain Errors =====
    /// Non-positive (or non-finite) molar mass or temperature.
    ///
    /// `slot` is the zero-based index of the (mass, temperature) pair
    /// within the scenario being built; direct engine calls report slot 0.
    #[error("invalid {field} ({value}) in scenario slot {slot}: must be strictly positive and finite")]
    InvalidParameter {
        /// Zero-based scenario slot the pair occupied.
        slot: usize,
        /// Which field was rejected.
        field: ParameterField,
        /// The rejected value.
        value: f64,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Export Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MbError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Create an invalid-parameter error for a direct engine call (slot 0).
    #[must_use]
    pub const fn invalid_parameter(field: ParameterField, value: f64) -> Self {
        Self::InvalidParameter {
            slot: 0,
            field,
            value,
        }
    }

    /// Re-attribute an invalid-parameter error to a scenario slot.
    ///
    /// The scenario builder validates pairs in declaration order and uses
    /// this to report which pair failed. Other variants pass through.
    #[must_use]
    pub fn with_slot(self, slot: usize) -> Self {
        match self {
            Self::InvalidParameter { field, value, .. } => {
                Self::InvalidParameter { slot, field, value }
            }
            other => other,
        }
    }

    /// Check if this error is a rejected scenario parameter.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
