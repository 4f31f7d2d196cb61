//! Umbrella crate for the population-rs workspace.
//!
//! Re-exports [`population_core`] so the demos and downstream users can
//! depend on a single crate.
pub use population_core::*;
