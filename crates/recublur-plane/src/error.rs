/// An error type for plane buffer construction and conversion.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlaneError {
    /// Error when the sample data does not fill the strided storage.
    #[error("Data length ({0}) does not match the plane storage size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the row stride is smaller than the plane width.
    #[error("Row stride ({0}) is smaller than the plane width ({1})")]
    InvalidStride(usize, usize),

    /// Error when two planes that must agree in size do not.
    #[error("Plane sizes do not match ({0}x{1} vs {2}x{3})")]
    InvalidPlaneSize(usize, usize, usize, usize),

    /// Error when a sample value cannot be represented in the target type.
    #[error("Failed to cast sample value to {0}")]
    CastError(String),
}
