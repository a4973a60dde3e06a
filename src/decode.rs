use enough::Stop;

use crate::error::TargaError;
use crate::image::Targa;
use crate::limits::Limits;

/// Configurable decode of TGA bytes.
///
/// ```
/// use zentga::{DecodeRequest, Limits, TargaError, Unstoppable};
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let limits = Limits::default().with_max_pixels(4096 * 4096);
/// match DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable) {
///     Ok(image) => println!("{:?}", image.dimensions()),
///     Err(TargaError::InvalidHeader(msg)) => println!("not a TGA: {msg}"),
///     Err(e) => println!("{e}"),
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Bound the output raster before it is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode to a loaded [`Targa`].
    ///
    /// `stop` is polled between scan lines; cancelling yields
    /// [`TargaError::Cancelled`].
    pub fn decode(self, stop: impl Stop) -> Result<Targa, TargaError> {
        let raster = crate::tga::decode(self.data, self.limits, &stop)?;
        Ok(Targa::from_raster(raster))
    }
}
