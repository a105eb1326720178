//! Error types for simulation requests.
//!
//! Every variant is terminal for the request that raised it: scheduling a
//! well-formed finite process list always terminates, so nothing here is
//! retried or recovered internally.

use std::fmt;

use crate::validation::ValidationError;

/// Errors returned by policy engines and the simulation facade.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimulationError {
    /// Malformed process input. Carries every problem found, not just the first.
    Validation(Vec<ValidationError>),
    /// Policy parameters are missing or invalid (e.g. round-robin quantum).
    Configuration(String),
    /// No processes were supplied.
    EmptyInput,
}

impl SimulationError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "invalid process input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Self::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::EmptyInput => write!(f, "no processes to schedule"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
