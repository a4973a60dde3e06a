//! Per-depth conversion of stored TGA pixel values to RGBA8.

use super::color_map::ColorMap;
use super::header::{ImageKind, TgaHeader};
use crate::error::TargaError;

/// Layout of one stored pixel in the image-data stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PixelFormat {
    /// 8-bit gray level.
    Gray8,
    /// 8-bit gray level followed by 8-bit alpha.
    ///
    /// Used for 16-bit grayscale images instead of the 1-5-5-5 layout that
    /// other 16-bit images carry.
    GrayAlpha16,
    /// 16-bit little-endian A1R5G5B5.
    Argb1555,
    /// B, G, R.
    Bgr24,
    /// B, G, R, A.
    Bgra32,
    /// 8-bit color-map index.
    Index8,
    /// 16-bit little-endian color-map index.
    Index16,
}

impl PixelFormat {
    /// Pick the stored layout from the header's image type, pixel depth and
    /// color-map presence.
    pub(crate) fn resolve(header: &TgaHeader) -> Result<Self, TargaError> {
        let has_map = header.color_map.is_some_and(|m| m.length > 0);
        let depth = header.pixel_depth;
        let format = match (header.image_type.kind(), depth) {
            (ImageKind::ColorMapped, 8) => Self::Index8,
            (ImageKind::ColorMapped, 16) => Self::Index16,
            (ImageKind::ColorMapped, _) => return Err(TargaError::UnsupportedColorDepth(depth)),
            (_, 8) if has_map => Self::Index8,
            (_, 8) => Self::Gray8,
            (ImageKind::Grayscale, 16) => Self::GrayAlpha16,
            (_, 16) => Self::Argb1555,
            (_, 24) => Self::Bgr24,
            (_, 32) => Self::Bgra32,
            _ => return Err(TargaError::UnsupportedColorDepth(depth)),
        };
        Ok(format)
    }

    pub(crate) fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray8 | Self::Index8 => 1,
            Self::GrayAlpha16 | Self::Argb1555 | Self::Index16 => 2,
            Self::Bgr24 => 3,
            Self::Bgra32 => 4,
        }
    }

    pub(crate) fn is_indexed(self) -> bool {
        matches!(self, Self::Index8 | Self::Index16)
    }
}

/// Scale a 5-bit channel value to 8 bits, replicating the high bits so
/// that 0 maps to 0 and 31 maps to 255.
#[inline]
fn scale5(v: u16) -> u8 {
    let v = (v & 0x1F) as u8;
    (v << 3) | (v >> 2)
}

/// Expand a 1-5-5-5 value. With `alpha_bit` false the top bit is ignored and
/// the pixel is opaque.
#[inline]
pub(crate) fn expand_1555(v: u16, alpha_bit: bool) -> [u8; 4] {
    let a = if !alpha_bit || v & 0x8000 != 0 { 255 } else { 0 };
    [scale5(v >> 10), scale5(v >> 5), scale5(v), a]
}

/// Converts stored pixel values to RGBA8, looking indices up in the color
/// map when the format is indexed.
pub(crate) struct Unpacker<'a> {
    format: PixelFormat,
    color_map: Option<&'a ColorMap>,
}

impl<'a> Unpacker<'a> {
    pub(crate) fn new(
        format: PixelFormat,
        color_map: Option<&'a ColorMap>,
    ) -> Result<Self, TargaError> {
        if format.is_indexed() && color_map.is_none() {
            return Err(TargaError::InvalidHeader(
                "indexed pixels without a color map".into(),
            ));
        }
        Ok(Self { format, color_map })
    }

    pub(crate) fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Convert one stored pixel (`src`, exactly `bytes_per_pixel` long) into
    /// a 4-byte RGBA slot.
    #[inline]
    pub(crate) fn unpack(&self, src: &[u8], dst: &mut [u8]) -> Result<(), TargaError> {
        let rgba = match self.format {
            PixelFormat::Gray8 => [src[0], src[0], src[0], 255],
            PixelFormat::GrayAlpha16 => [src[0], src[0], src[0], src[1]],
            PixelFormat::Argb1555 => expand_1555(u16::from_le_bytes([src[0], src[1]]), true),
            PixelFormat::Bgr24 => [src[2], src[1], src[0], 255],
            PixelFormat::Bgra32 => [src[2], src[1], src[0], src[3]],
            PixelFormat::Index8 => self.lookup(usize::from(src[0]))?,
            PixelFormat::Index16 => self.lookup(usize::from(u16::from_le_bytes([src[0], src[1]])))?,
        };
        dst.copy_from_slice(&rgba);
        Ok(())
    }

    fn lookup(&self, index: usize) -> Result<[u8; 4], TargaError> {
        match self.color_map {
            Some(map) => map.get(index),
            None => Err(TargaError::ColorIndexOutOfRange { index, entries: 0 }),
        }
    }
}
