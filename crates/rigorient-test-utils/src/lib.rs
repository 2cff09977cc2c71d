//! Shared test fixtures and utilities for rigorient crates.
//!
//! Provides deterministic RNG setup, random joint-chain generators, and
//! orthonormality assertions for rotation matrices.

pub mod assertions;
pub mod chains;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use assertions::{assert_orthonormal, assert_vec_eq};
pub use chains::{random_chain, random_point};
pub use rng::seeded_rng;
