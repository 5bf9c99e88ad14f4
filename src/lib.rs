// Library interface for the fitplan scoring engine
// This allows integration tests to access the core functionality

pub mod activity;
pub mod allocation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod progress;
pub mod provider;
pub mod recovery;
pub mod sleep;

// Re-export commonly used types for convenience
pub use models::*;
pub use activity::{ActivityConfig, ActivityScorer};
pub use allocation::{AllocationEngine, AllocationError};
pub use config::AppConfig;
pub use error::{FitplanError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use progress::ProgressTracker;
pub use provider::{derive_scores, gather, InMemoryProvider, MetricsProvider};
pub use recovery::RecoveryScorer;
pub use sleep::SleepQualityScorer;
