#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use recublur_plane as plane;

#[doc(inline)]
pub use recublur_imgproc as imgproc;
