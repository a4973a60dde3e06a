use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding and raster channel operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TargaError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported TGA image type {0}")]
    UnsupportedImageType(u8),

    #[error("unsupported color depth: {0} bits")]
    UnsupportedColorDepth(u8),

    #[error("data truncated: need {needed} bytes at offset {offset}, {available} available")]
    TruncatedData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("failed to allocate {bytes} bytes for the RGBA raster")]
    AllocationFailure { bytes: usize },

    #[error("invalid channel selector {0} (expected 1-4)")]
    InvalidChannel(u8),

    #[error("no image loaded")]
    NotLoaded,

    #[error("color-map index {index} out of range (table has {entries} entries)")]
    ColorIndexOutOfRange { index: usize, entries: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<core::convert::Infallible> for TargaError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

impl From<StopReason> for TargaError {
    fn from(r: StopReason) -> Self {
        TargaError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for TargaError {
    fn from(e: std::io::Error) -> Self {
        TargaError::Io(alloc::format!("{e}"))
    }
}
