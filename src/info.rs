use crate::error::TargaError;
use crate::tga::header::{ImageType, Origin, TgaHeader};

/// Header facts about a TGA file, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargaInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    /// Bits per stored pixel (8, 16, 24 or 32).
    pub pixel_depth: u8,
    pub has_color_map: bool,
    /// Attribute (alpha) bits per pixel from the image descriptor.
    pub alpha_bits: u8,
    /// Corner holding the first stored pixel. Decoded rasters are always
    /// normalized to [`Origin::TopLeft`].
    pub origin: Origin,
}

impl TargaInfo {
    /// Parse and validate the header only.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TargaError> {
        let header = TgaHeader::parse(data)?;
        Ok(Self {
            width: u32::from(header.width),
            height: u32::from(header.height),
            image_type: header.image_type,
            pixel_depth: header.pixel_depth,
            has_color_map: header.color_map.is_some(),
            alpha_bits: header.descriptor.alpha_bits(),
            origin: header.descriptor.origin(),
        })
    }
}
