//! Error types for vistrie

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("radius must be positive, got {0}")]
    InvalidRadius(i32),

    #[error("radius {radius} exceeds the supported maximum of {max}")]
    RadiusTooLarge { radius: i32, max: i32 },
}
