use thiserror::Error;

/// Why a `try_resize_table` request was rejected. The map is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResizeError {
    #[error("requested capacity {requested} cannot hold {len} live entries")]
    TooSmall { requested: usize, len: usize },
    #[error("requested capacity must be at least 1")]
    ZeroCapacity,
}
