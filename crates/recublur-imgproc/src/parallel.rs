/// Controls how multi-plane operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Parallel for large frames, serial otherwise.
    ///
    /// Uses the pixel-count threshold of
    /// [`ExecutionStrategy::AUTO_PARALLEL_THRESHOLD`].
    #[default]
    Auto,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small frames, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool, one plane per task.
    Parallel,
}

impl ExecutionStrategy {
    /// Pixel count at which [`ExecutionStrategy::Auto`] switches to the
    /// parallel path.
    pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

    /// Whether the parallel path should be taken for `num_pixels` samples.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            Self::Serial => false,
            Self::Parallel => true,
            Self::Auto => num_pixels >= Self::AUTO_PARALLEL_THRESHOLD,
        }
    }
}
