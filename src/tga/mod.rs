//! TGA (Truevision Targa) decoder (internal).
//!
//! Use [`crate::Targa::load_from_bytes`] or [`crate::DecodeRequest`].

mod color_map;
mod cursor;
pub(crate) mod header;
mod orient;
mod packets;
mod unpack;

use alloc::vec::Vec;

use enough::Stop;
use log::{debug, trace};

use crate::error::TargaError;
use crate::image::Raster;
use crate::limits::Limits;
use color_map::ColorMap;
use cursor::Cursor;
use header::{ImageType, TgaHeader};
use unpack::{PixelFormat, Unpacker};

/// Decode TGA data to a top-left-origin RGBA8 raster.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster, TargaError> {
    let header = TgaHeader::parse(data)?;
    if header.image_type == ImageType::NoData {
        debug!("TGA: image type 0, no pixel data");
        return Ok(Raster::empty());
    }

    let width = u32::from(header.width);
    let height = u32::from(header.height);
    if let Some(limits) = limits {
        limits.check_raster(width, height)?;
    }
    if header.x_origin != 0 || header.y_origin != 0 {
        debug!(
            "TGA: ignoring screen origin ({}, {})",
            header.x_origin, header.y_origin
        );
    }

    let format = PixelFormat::resolve(&header)?;

    let mut bytes = Cursor::new(data);
    bytes.set_position(header.id_end())?;
    let color_map = header
        .color_map
        .as_ref()
        .map(|spec| ColorMap::read(spec, &mut bytes))
        .transpose()?;
    let unpacker = Unpacker::new(format, color_map.as_ref())?;
    trace!("TGA: {:?} pixel data at offset {}", format, bytes.position());

    let pixel_count = usize::from(header.width) * usize::from(header.height);
    bytes.require(min_stream_len(
        pixel_count,
        format.bytes_per_pixel(),
        header.image_type.is_rle(),
    ))?;

    stop.check()?;

    let mut pixels = alloc_raster(width, height)?;
    let w = usize::from(header.width);
    if header.image_type.is_rle() {
        packets::decode_rle(&mut bytes, &unpacker, w, &mut pixels, stop)?;
    } else {
        packets::decode_raw(&mut bytes, &unpacker, w, &mut pixels, stop)?;
    }

    if bytes.remaining() > 0 {
        // TGA 2.0 extension area and footer live here
        trace!("TGA: {} bytes after pixel data ignored", bytes.remaining());
    }

    orient::normalize(&mut pixels, w, header.descriptor);

    debug!(
        "TGA: decoded {}x{} {:?} ({:?}, {} color-map entries)",
        width,
        height,
        header.image_type,
        format,
        color_map.as_ref().map_or(0, ColorMap::len)
    );

    Ok(Raster::new(width, height, pixels))
}

/// Fewest stream bytes that can describe `pixels` pixels: every pixel
/// stored raw, or one full 128-pixel run packet per 128 pixels.
fn min_stream_len(pixels: usize, bpp: usize, rle: bool) -> usize {
    if rle {
        pixels.div_ceil(128).saturating_mul(1 + bpp)
    } else {
        pixels.saturating_mul(bpp)
    }
}

/// Obtain a zeroed `width * height * 4` byte buffer without aborting on
/// allocation failure.
fn alloc_raster(width: u32, height: u32) -> Result<Vec<u8>, TargaError> {
    let bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or(TargaError::DimensionsTooLarge { width, height })?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(bytes)
        .map_err(|_| TargaError::AllocationFailure { bytes })?;
    pixels.resize(bytes, 0);
    Ok(pixels)
}
