use crate::error::TargaError;

/// One of the four channels of an RGBA8 raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Byte offset of this channel within an RGBA pixel.
    pub fn offset(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }

    /// Legacy numeric selector: red = 1, green = 2, blue = 3, alpha = 4.
    pub fn code(self) -> u8 {
        self.offset() as u8 + 1
    }
}

impl TryFrom<u8> for Channel {
    type Error = TargaError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Red),
            2 => Ok(Self::Green),
            3 => Ok(Self::Blue),
            4 => Ok(Self::Alpha),
            other => Err(TargaError::InvalidChannel(other)),
        }
    }
}

/// Saturating add of `value` to `channel` of every pixel in `rgba`.
pub(crate) fn apply_mask(rgba: &mut [u8], channel: Channel, value: u8) {
    let off = channel.offset();
    for px in rgba.chunks_exact_mut(4) {
        px[off] = px[off].saturating_add(value);
    }
}

/// Overwrite `channel` of every pixel in `rgba` with `value`.
pub(crate) fn set_channel(rgba: &mut [u8], channel: Channel, value: u8) {
    let off = channel.offset();
    for px in rgba.chunks_exact_mut(4) {
        px[off] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_channels() {
        for ch in Channel::ALL {
            assert_eq!(Channel::try_from(ch.code()).unwrap(), ch);
        }
        assert!(matches!(
            Channel::try_from(0),
            Err(TargaError::InvalidChannel(0))
        ));
        assert!(matches!(
            Channel::try_from(5),
            Err(TargaError::InvalidChannel(5))
        ));
    }

    #[test]
    fn mask_saturates_instead_of_wrapping() {
        let mut px = [10, 200, 30, 255, 250, 0, 0, 1];
        apply_mask(&mut px, Channel::Red, 255);
        assert_eq!(px, [255, 200, 30, 255, 255, 0, 0, 1]);
        apply_mask(&mut px, Channel::Alpha, 100);
        assert_eq!(px, [255, 200, 30, 255, 255, 0, 0, 101]);
    }

    #[test]
    fn zero_mask_leaves_pixels_alone() {
        let mut px = [0, 128, 255, 7];
        for ch in Channel::ALL {
            apply_mask(&mut px, ch, 0);
        }
        assert_eq!(px, [0, 128, 255, 7]);
    }

    #[test]
    fn set_channel_touches_only_that_channel() {
        let mut px = [1, 2, 3, 4, 5, 6, 7, 8];
        set_channel(&mut px, Channel::Blue, 127);
        assert_eq!(px, [1, 2, 127, 4, 5, 6, 127, 8]);
    }
}
