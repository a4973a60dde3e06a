use crate::error::TargaError;

/// Resource limits applied before the RGBA raster is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the RGBA raster in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }

    pub fn with_max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = Some(pixels);
        self
    }

    pub fn with_max_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Check a `width` x `height` RGBA8 raster against every bound.
    pub(crate) fn check_raster(&self, width: u32, height: u32) -> Result<(), TargaError> {
        if let Some(max_w) = self.max_width.filter(|&m| width > m) {
            return Err(TargaError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height.filter(|&m| height > m) {
            return Err(TargaError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels.filter(|&m| pixels > m) {
            return Err(TargaError::LimitExceeded(alloc::format!(
                "pixel count {pixels} exceeds limit {max_px}"
            )));
        }
        // u32 * u32 * 4 cannot overflow u64
        let bytes = pixels * 4;
        if let Some(max_mem) = self.max_memory_bytes.filter(|&m| bytes > m) {
            return Err(TargaError::LimitExceeded(alloc::format!(
                "raster of {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}
