//! TGA file header: the fixed 18-byte block and the image-ID field after it.
//!
//! ```text
//! offset  size  field
//!  0      1     image-ID length
//!  1      1     color-map type (0 = none, 1 = present)
//!  2      1     image type
//!  3      2     first color-map index (LE)
//!  5      2     color-map length in entries (LE)
//!  7      1     color-map entry depth in bits
//!  8      2     x-origin (LE)
//! 10      2     y-origin (LE)
//! 12      2     width (LE)
//! 14      2     height (LE)
//! 16      1     pixel depth in bits
//! 17      1     image descriptor
//! ```

use log::trace;

use crate::error::TargaError;

pub(crate) const HEADER_LEN: usize = 18;

/// What a TGA file's pixel values mean, independent of compression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// Header only, no pixel data.
    NoData,
    /// Pixels are indices into a color map.
    ColorMapped,
    /// Pixels carry B,G,R(,A) directly.
    TrueColor,
    /// Pixels carry a gray level.
    Grayscale,
}

/// TGA image type field (header byte 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    NoData,
    ColorMapped,
    TrueColor,
    Grayscale,
    RleColorMapped,
    RleTrueColor,
    RleGrayscale,
}

impl ImageType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NoData),
            1 => Some(Self::ColorMapped),
            2 => Some(Self::TrueColor),
            3 => Some(Self::Grayscale),
            9 => Some(Self::RleColorMapped),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleGrayscale),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::NoData => 0,
            Self::ColorMapped => 1,
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleColorMapped => 9,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
        }
    }

    /// Whether the pixel stream is a sequence of run-length packets.
    pub fn is_rle(self) -> bool {
        matches!(
            self,
            Self::RleColorMapped | Self::RleTrueColor | Self::RleGrayscale
        )
    }

    pub fn kind(self) -> ImageKind {
        match self {
            Self::NoData => ImageKind::NoData,
            Self::ColorMapped | Self::RleColorMapped => ImageKind::ColorMapped,
            Self::TrueColor | Self::RleTrueColor => ImageKind::TrueColor,
            Self::Grayscale | Self::RleGrayscale => ImageKind::Grayscale,
        }
    }
}

/// Corner of the image where the first stored pixel sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

/// Image descriptor byte (header byte 17).
///
/// Bits 0-3 hold the attribute (alpha) bit count, bit 4 the horizontal
/// origin, bit 5 the vertical origin. Bits 6-7 (interleaving) are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Descriptor(u8);

impl Descriptor {
    const ALPHA_BITS: u8 = 0x0F;
    const RIGHT_ORIGIN: u8 = 1 << 4;
    const TOP_ORIGIN: u8 = 1 << 5;

    pub(crate) fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub(crate) fn alpha_bits(self) -> u8 {
        self.0 & Self::ALPHA_BITS
    }

    /// Columns are stored right to left.
    pub(crate) fn right_to_left(self) -> bool {
        self.0 & Self::RIGHT_ORIGIN != 0
    }

    /// Rows are stored top to bottom.
    pub(crate) fn top_to_bottom(self) -> bool {
        self.0 & Self::TOP_ORIGIN != 0
    }

    pub(crate) fn origin(self) -> Origin {
        match (self.top_to_bottom(), self.right_to_left()) {
            (false, false) => Origin::BottomLeft,
            (false, true) => Origin::BottomRight,
            (true, false) => Origin::TopLeft,
            (true, true) => Origin::TopRight,
        }
    }
}

/// Color-map specification (header bytes 3-7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColorMapSpec {
    pub first_index: u16,
    pub length: u16,
    pub entry_depth: u8,
}

impl ColorMapSpec {
    /// Bytes occupied by one stored entry.
    pub(crate) fn entry_bytes(&self) -> Result<usize, TargaError> {
        match self.entry_depth {
            15 | 16 => Ok(2),
            24 => Ok(3),
            32 => Ok(4),
            other => Err(TargaError::UnsupportedColorDepth(other)),
        }
    }

    /// Bytes occupied by the whole table in the file.
    pub(crate) fn table_bytes(&self) -> Result<usize, TargaError> {
        if self.length == 0 {
            return Ok(0);
        }
        Ok(usize::from(self.length) * self.entry_bytes()?)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TgaHeader {
    pub id_length: u8,
    pub color_map: Option<ColorMapSpec>,
    pub image_type: ImageType,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub pixel_depth: u8,
    pub descriptor: Descriptor,
}

impl TgaHeader {
    /// Parse and validate the header.
    ///
    /// For [`ImageType::NoData`] the geometry and depth fields are returned
    /// as stored but not validated.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, TargaError> {
        let Some(raw) = data.first_chunk::<HEADER_LEN>() else {
            return Err(TargaError::InvalidHeader(alloc::format!(
                "TGA header needs {HEADER_LEN} bytes, got {}",
                data.len()
            )));
        };

        let le16 = |at: usize| u16::from_le_bytes([raw[at], raw[at + 1]]);

        let id_length = raw[0];
        let color_map = match raw[1] {
            0 => None,
            1 => Some(ColorMapSpec {
                first_index: le16(3),
                length: le16(5),
                entry_depth: raw[7],
            }),
            other => {
                return Err(TargaError::InvalidHeader(alloc::format!(
                    "color-map type {other} is not 0 or 1"
                )));
            }
        };
        let image_type =
            ImageType::from_code(raw[2]).ok_or(TargaError::UnsupportedImageType(raw[2]))?;

        let header = Self {
            id_length,
            color_map,
            image_type,
            x_origin: le16(8),
            y_origin: le16(10),
            width: le16(12),
            height: le16(14),
            pixel_depth: raw[16],
            descriptor: Descriptor::new(raw[17]),
        };

        trace!(
            "TGA header: type {:?}, {}x{} @ {} bits, descriptor {:#04x}, color map {:?}",
            header.image_type,
            header.width,
            header.height,
            header.pixel_depth,
            raw[17],
            header.color_map
        );

        if header.id_end() > data.len() {
            return Err(TargaError::InvalidHeader(alloc::format!(
                "image-ID field of {id_length} bytes runs past end of {}-byte input",
                data.len()
            )));
        }

        if image_type == ImageType::NoData {
            return Ok(header);
        }

        if header.width == 0 {
            return Err(TargaError::InvalidHeader("TGA width is zero".into()));
        }
        if header.height == 0 {
            return Err(TargaError::InvalidHeader("TGA height is zero".into()));
        }
        if !matches!(header.pixel_depth, 8 | 16 | 24 | 32) {
            return Err(TargaError::UnsupportedColorDepth(header.pixel_depth));
        }
        if let Some(spec) = &header.color_map {
            spec.table_bytes()?;
        }
        if image_type.kind() == ImageKind::ColorMapped && header.color_map.is_none() {
            return Err(TargaError::InvalidHeader(
                "color-mapped image without a color map".into(),
            ));
        }

        Ok(header)
    }

    /// Offset of the first byte after the image-ID field.
    pub(crate) fn id_end(&self) -> usize {
        HEADER_LEN + usize::from(self.id_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(image_type: u8, width: u16, height: u16, depth: u8) -> [u8; HEADER_LEN] {
        let mut h = [0u8; HEADER_LEN];
        h[2] = image_type;
        h[12..14].copy_from_slice(&width.to_le_bytes());
        h[14..16].copy_from_slice(&height.to_le_bytes());
        h[16] = depth;
        h
    }

    #[test]
    fn parses_geometry_fields() {
        let mut h = header(10, 640, 480, 32);
        h[8..10].copy_from_slice(&5u16.to_le_bytes());
        h[10..12].copy_from_slice(&7u16.to_le_bytes());
        h[17] = 0x28;
        let parsed = TgaHeader::parse(&h).unwrap();
        assert_eq!(parsed.image_type, ImageType::RleTrueColor);
        assert_eq!((parsed.width, parsed.height), (640, 480));
        assert_eq!((parsed.x_origin, parsed.y_origin), (5, 7));
        assert_eq!(parsed.pixel_depth, 32);
        assert_eq!(parsed.descriptor.alpha_bits(), 8);
        assert_eq!(parsed.descriptor.origin(), Origin::TopLeft);
        assert!(parsed.color_map.is_none());
    }

    #[test]
    fn short_input_is_invalid_header() {
        let h = header(2, 1, 1, 24);
        assert!(matches!(
            TgaHeader::parse(&h[..17]),
            Err(TargaError::InvalidHeader(_))
        ));
        assert!(matches!(
            TgaHeader::parse(&[]),
            Err(TargaError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_unknown_image_types() {
        for code in [4u8, 5, 8, 12, 32, 33, 255] {
            let h = header(code, 1, 1, 24);
            assert!(
                matches!(
                    TgaHeader::parse(&h),
                    Err(TargaError::UnsupportedImageType(c)) if c == code
                ),
                "type {code}"
            );
        }
    }

    #[test]
    fn rejects_unsupported_depths() {
        for depth in [0u8, 1, 4, 15, 31, 64] {
            let h = header(2, 1, 1, depth);
            assert!(matches!(
                TgaHeader::parse(&h),
                Err(TargaError::UnsupportedColorDepth(d)) if d == depth
            ));
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            TgaHeader::parse(&header(2, 0, 4, 24)),
            Err(TargaError::InvalidHeader(_))
        ));
        assert!(matches!(
            TgaHeader::parse(&header(2, 4, 0, 24)),
            Err(TargaError::InvalidHeader(_))
        ));
    }

    #[test]
    fn no_data_type_skips_geometry_checks() {
        let parsed = TgaHeader::parse(&header(0, 0, 0, 0)).unwrap();
        assert_eq!(parsed.image_type, ImageType::NoData);
    }

    #[test]
    fn color_mapped_type_requires_color_map() {
        assert!(matches!(
            TgaHeader::parse(&header(1, 2, 2, 8)),
            Err(TargaError::InvalidHeader(_))
        ));
    }

    #[test]
    fn color_map_spec_is_read() {
        let mut h = header(1, 2, 2, 8);
        h[1] = 1;
        h[3..5].copy_from_slice(&4u16.to_le_bytes());
        h[5..7].copy_from_slice(&16u16.to_le_bytes());
        h[7] = 24;
        let parsed = TgaHeader::parse(&h).unwrap();
        let spec = parsed.color_map.unwrap();
        assert_eq!(spec.first_index, 4);
        assert_eq!(spec.length, 16);
        assert_eq!(spec.table_bytes().unwrap(), 48);
    }

    #[test]
    fn bad_color_map_flag_and_entry_depth() {
        let mut h = header(1, 2, 2, 8);
        h[1] = 2;
        assert!(matches!(
            TgaHeader::parse(&h),
            Err(TargaError::InvalidHeader(_))
        ));
        h[1] = 1;
        h[5] = 1;
        h[7] = 8;
        assert!(matches!(
            TgaHeader::parse(&h),
            Err(TargaError::UnsupportedColorDepth(8))
        ));
    }

    #[test]
    fn id_field_past_end_is_invalid() {
        let mut h = header(2, 1, 1, 24);
        h[0] = 4;
        assert!(matches!(
            TgaHeader::parse(&h),
            Err(TargaError::InvalidHeader(_))
        ));
    }

    #[test]
    fn descriptor_bits() {
        assert_eq!(Descriptor::new(0x00).origin(), Origin::BottomLeft);
        assert_eq!(Descriptor::new(0x10).origin(), Origin::BottomRight);
        assert_eq!(Descriptor::new(0x20).origin(), Origin::TopLeft);
        assert_eq!(Descriptor::new(0x30).origin(), Origin::TopRight);
        assert_eq!(Descriptor::new(0xC1).alpha_bits(), 1);
        assert!(!Descriptor::new(0xC1).top_to_bottom());
    }
}
