//! postcheck/crates/pc-core/src/lib.rs
//!
//! Payload models and validation rules for posts, comments and shares.
//! Pure functions only: no I/O, no shared state.

pub mod error;
pub mod models;
pub mod traits;
pub mod validate;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
pub use validate::*;
