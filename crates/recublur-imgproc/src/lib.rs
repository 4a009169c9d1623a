#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// recursive Gaussian filtering module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;
