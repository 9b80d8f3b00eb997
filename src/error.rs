//! Library error type
//!
//! Only particle construction is fallible from the caller's point of view.
//! Degenerate geometry during a tick (coincident centers, no usable impact
//! time) is recovered locally by skipping the pair and never surfaces here.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Errors reportable to the caller.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Non-physical construction parameter (zero/negative/non-finite
    /// radius or mass, non-positive domain bounds).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
