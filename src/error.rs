//! Unified error hierarchy for fitplan
//!
//! Missing biometric signals are NOT errors anywhere in this crate; the
//! scorers degrade by weighting. Errors exist only at the edges: snapshot
//! files that fail to parse, configuration problems, and invalid
//! allocation input from callers.

use thiserror::Error;

use crate::allocation::AllocationError;

/// Top-level error type for all fitplan operations
#[derive(Debug, Error)]
pub enum FitplanError {
    /// Allocation input errors
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Snapshot (de)serialization errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fitplan operations
pub type Result<T> = std::result::Result<T, FitplanError>;

impl FitplanError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitplanError::Allocation(err) => {
                format!("Could not apply allocation edit: {}", err)
            }
            FitplanError::Snapshot(_) => {
                "Could not read the score snapshot. Please check the input file.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
