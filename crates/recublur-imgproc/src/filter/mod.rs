//! Recursive Gaussian filtering
//!
//! This module provides an IIR approximation of Gaussian blur for video
//! planes: per-sample cost is independent of sigma.

/// The recursive filter engine: coefficients and 1D passes
pub mod recursive;

/// Plane-level blur operations
mod ops;
pub use ops::*;
