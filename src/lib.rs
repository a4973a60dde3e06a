//! # zentga
//!
//! TGA (Truevision Targa) decoder producing RGBA8 rasters ready for texture
//! upload, plus whole-raster channel operators.
//!
//! ## Supported Files
//!
//! - Image types 1, 2, 3 (uncompressed color-mapped, true-color, grayscale)
//!   and their run-length-encoded variants 9, 10, 11
//! - Pixel depths 8, 16 (A1R5G5B5, or gray + alpha for grayscale), 24, 32
//! - Color maps with 15, 16, 24 or 32-bit entries and 8 or 16-bit indices
//! - All four scan-line origins; output is always top-left, row-major
//! - Image type 0 (no image data) decodes to a 0x0 raster
//!
//! ## Non-Goals
//!
//! - Encoding
//! - The image-ID field and TGA 2.0 extension area (skipped)
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{Channel, Targa, TargaInfo};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = TargaInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! let mut image = Targa::load_from_bytes(data)?;
//! image.apply_mask(Channel::Red, 64)?;
//! image.set_channel(Channel::Alpha, 255)?;
//! let (width, height) = image.dimensions()?;
//! let rgba: &[u8] = image.rgba()?;
//! assert_eq!(rgba.len(), width as usize * height as usize * 4);
//! # Ok::<(), zentga::TargaError>(())
//! ```
//!
//! Decoding keeps no global state; separate [`Targa`] values can be decoded
//! and modified on separate threads.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod channel;
mod decode;
mod error;
mod image;
mod info;
mod limits;
mod tga;

// Re-exports
pub use channel::Channel;
pub use decode::DecodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::TargaError;
pub use image::Targa;
pub use info::TargaInfo;
pub use limits::Limits;
pub use tga::header::{ImageKind, ImageType, Origin};

/// Decode TGA bytes to a loaded [`Targa`], with cancellation.
pub fn decode_tga(data: &[u8], stop: impl Stop) -> Result<Targa, TargaError> {
    DecodeRequest::new(data).decode(stop)
}
