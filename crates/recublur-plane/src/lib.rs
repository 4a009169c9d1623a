#![deny(missing_docs)]
//! Stride-aware video plane buffers and sample depth conversions

/// plane representation for per-plane video processing.
pub mod plane;

/// Error types for the plane module.
pub mod error;

/// Conversions between host sample depths and the float working representation.
pub mod ops;

pub use crate::error::PlaneError;
pub use crate::plane::{aligned_stride, Plane, PlaneDtype, PlaneSize, PLANE_ALIGNMENT};
