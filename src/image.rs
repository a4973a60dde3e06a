use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::channel::{self, Channel};
use crate::decode::DecodeRequest;
use crate::error::TargaError;

/// A decoded RGBA8 raster with its dimensions.
///
/// Always `width * height * 4` bytes, top-left origin, R,G,B,A order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub(crate) fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The 0x0 raster produced by a header-only (type 0) file.
    pub(crate) fn empty() -> Self {
        Self::new(0, 0, Vec::new())
    }
}

/// A TGA image, either empty or loaded with an RGBA8 raster.
///
/// The raster is owned by this value and freed when it is dropped or
/// [`release`](Self::release)d. Accessors and channel operators on an empty
/// image return [`TargaError::NotLoaded`].
///
/// ```
/// use zentga::{Channel, Targa};
///
/// // 1x1 uncompressed true-color, top-left origin, one B,G,R pixel
/// let mut file = [0u8; 18];
/// file[2] = 2;
/// file[12] = 1;
/// file[14] = 1;
/// file[16] = 24;
/// file[17] = 0x20;
/// let mut data = file.to_vec();
/// data.extend_from_slice(&[10, 20, 30]);
///
/// let mut image = Targa::load_from_bytes(&data)?;
/// assert_eq!(image.dimensions()?, (1, 1));
/// assert_eq!(image.rgba()?, &[30, 20, 10, 255]);
///
/// image.apply_mask(Channel::Red, 255)?;
/// image.set_channel(Channel::Alpha, 0)?;
/// assert_eq!(image.rgba()?, &[255, 20, 10, 0]);
/// # Ok::<(), zentga::TargaError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Targa {
    raster: Option<Raster>,
}

impl Targa {
    /// An empty image.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            raster: Some(raster),
        }
    }

    /// Decode TGA data held in memory.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, TargaError> {
        DecodeRequest::new(data).decode(enough::Unstoppable)
    }

    /// Read and decode a TGA file.
    #[cfg(feature = "std")]
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TargaError> {
        let path = path.as_ref();
        log::debug!("TGA: loading {}", path.display());
        let data = std::fs::read(path)?;
        Self::load_from_bytes(&data)
    }

    /// Decode `data` into this image, replacing any raster it held.
    ///
    /// On failure the image is left empty.
    pub fn load(&mut self, data: &[u8]) -> Result<(), TargaError> {
        self.release();
        *self = Self::load_from_bytes(data)?;
        Ok(())
    }

    /// Drop the raster, returning the image to the empty state.
    pub fn release(&mut self) {
        self.raster = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.raster.is_some()
    }

    fn loaded(&self) -> Result<&Raster, TargaError> {
        self.raster.as_ref().ok_or(TargaError::NotLoaded)
    }

    fn loaded_mut(&mut self) -> Result<&mut Raster, TargaError> {
        self.raster.as_mut().ok_or(TargaError::NotLoaded)
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> Result<(u32, u32), TargaError> {
        let r = self.loaded()?;
        Ok((r.width, r.height))
    }

    /// Length of the RGBA raster in bytes (`width * height * 4`).
    pub fn image_length(&self) -> Result<usize, TargaError> {
        Ok(self.loaded()?.pixels.len())
    }

    /// The RGBA8 raster, row 0 at the top.
    pub fn rgba(&self) -> Result<&[u8], TargaError> {
        Ok(&self.loaded()?.pixels)
    }

    pub fn rgba_mut(&mut self) -> Result<&mut [u8], TargaError> {
        Ok(&mut self.loaded_mut()?.pixels)
    }

    /// Take the raster out, leaving nothing behind.
    pub fn into_rgba(self) -> Result<Vec<u8>, TargaError> {
        self.raster
            .map(|r| r.pixels)
            .ok_or(TargaError::NotLoaded)
    }

    /// Add `value` to `channel` of every pixel, clamping at 255.
    ///
    /// `channel` is a [`Channel`] or a legacy `u8` code (1 = red .. 4 = alpha).
    pub fn apply_mask<C>(&mut self, channel: C, value: u8) -> Result<(), TargaError>
    where
        C: TryInto<Channel>,
        TargaError: From<C::Error>,
    {
        let raster = self.loaded_mut()?;
        let channel = channel.try_into()?;
        channel::apply_mask(&mut raster.pixels, channel, value);
        Ok(())
    }

    /// Set `channel` of every pixel to `value`.
    ///
    /// `channel` is a [`Channel`] or a legacy `u8` code (1 = red .. 4 = alpha).
    pub fn set_channel<C>(&mut self, channel: C, value: u8) -> Result<(), TargaError>
    where
        C: TryInto<Channel>,
        TargaError: From<C::Error>,
    {
        let raster = self.loaded_mut()?;
        let channel = channel.try_into()?;
        channel::set_channel(&mut raster.pixels, channel, value);
        Ok(())
    }

    /// The raster as typed RGBA8 pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> Result<&[rgb::RGBA8], TargaError> {
        Ok(self.rgba()?.as_pixels())
    }

    /// Zero-copy 2D view of the raster.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, rgb::RGBA8>, TargaError> {
        let (width, height) = self.dimensions()?;
        Ok(imgref::ImgRef::new(
            self.as_pixels()?,
            width as usize,
            height as usize,
        ))
    }
}
