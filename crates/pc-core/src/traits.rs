//! # Core Traits
//!
//! Every submission shape implements `Validate`, which lets the request layer
//! handle posts, comments and shares through one generic path.

use crate::error::Result;

/// Turns an unchecked input into its accepted payload.
pub trait Validate {
    type Output;

    /// Checks the input without modifying it.
    fn validate(&self) -> Result<Self::Output>;
}
