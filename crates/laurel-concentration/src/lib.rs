//! Concentration statistics for weighted electorates.
//!
//! Standalone companions to the decision engine: they consume the same
//! voter → weight maps but share no state with any mechanism. Currently
//! the Nakamoto coefficient, a centralization indicator for
//! credential-weighted elections.

pub mod error;
pub mod nakamoto;

pub use error::{ConcentrationError, Result};
pub use nakamoto::nakamoto_coefficient;
