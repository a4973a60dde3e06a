//! Image-data stream decoding: raw scan lines and run-length packets.
//!
//! Both paths write RGBA8 pixels in the order they are stored in the file;
//! the orientation pass fixes up row and column order afterwards.

use enough::Stop;

use super::cursor::Cursor;
use super::unpack::Unpacker;
use crate::error::TargaError;

/// Rows between cancellation checks.
const STOP_CHECK_ROWS: usize = 16;

/// RLE packet control byte.
///
/// Bit 7 selects a run packet (one pixel repeated) over a raw packet
/// (distinct pixels); the low 7 bits hold the pixel count minus one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PacketHeader(u8);

impl PacketHeader {
    const RUN_FLAG: u8 = 0x80;
    const COUNT_MASK: u8 = 0x7F;

    pub(crate) fn new(byte: u8) -> Self {
        Self(byte)
    }

    pub(crate) fn is_run(self) -> bool {
        self.0 & Self::RUN_FLAG != 0
    }

    /// Number of pixels the packet describes (1..=128).
    pub(crate) fn count(self) -> usize {
        usize::from(self.0 & Self::COUNT_MASK) + 1
    }
}

/// Decode uncompressed pixels into `out` (`width * 4` bytes per row).
pub(crate) fn decode_raw(
    bytes: &mut Cursor<'_>,
    unpacker: &Unpacker<'_>,
    width: usize,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), TargaError> {
    let bpp = unpacker.bytes_per_pixel();
    let in_row = width * bpp;
    let src = bytes.take((out.len() / 4) * bpp)?;

    for (row_idx, (src_row, out_row)) in src
        .chunks_exact(in_row)
        .zip(out.chunks_exact_mut(width * 4))
        .enumerate()
    {
        if row_idx % STOP_CHECK_ROWS == 0 {
            stop.check()?;
        }
        for (s, d) in src_row.chunks_exact(bpp).zip(out_row.chunks_exact_mut(4)) {
            unpacker.unpack(s, d)?;
        }
    }
    Ok(())
}

/// Decode run-length packets into `out` until it is full.
///
/// A packet reaching past the last pixel is cut short; only the bytes of
/// the pixels actually needed are consumed.
pub(crate) fn decode_rle(
    bytes: &mut Cursor<'_>,
    unpacker: &Unpacker<'_>,
    width: usize,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), TargaError> {
    let bpp = unpacker.bytes_per_pixel();
    let total = out.len() / 4;
    let check_interval = width * STOP_CHECK_ROWS;
    let mut filled = 0usize;
    let mut next_check = 0usize;

    while filled < total {
        if filled >= next_check {
            stop.check()?;
            next_check = filled + check_interval;
        }

        let packet = PacketHeader::new(bytes.read_u8()?);
        let count = packet.count().min(total - filled);
        let dst = &mut out[filled * 4..(filled + count) * 4];

        if packet.is_run() {
            let mut pixel = [0u8; 4];
            unpacker.unpack(bytes.take(bpp)?, &mut pixel)?;
            for d in dst.chunks_exact_mut(4) {
                d.copy_from_slice(&pixel);
            }
        } else {
            let src = bytes.take(count * bpp)?;
            for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(4)) {
                unpacker.unpack(s, d)?;
            }
        }
        filled += count;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tga::unpack::PixelFormat;
    use alloc::vec;
    use enough::Unstoppable;

    fn bgr24() -> Unpacker<'static> {
        Unpacker::new(PixelFormat::Bgr24, None).unwrap()
    }

    #[test]
    fn packet_header_bits() {
        let run = PacketHeader::new(0x81);
        assert!(run.is_run());
        assert_eq!(run.count(), 2);
        let raw = PacketHeader::new(0x7F);
        assert!(!raw.is_run());
        assert_eq!(raw.count(), 128);
        assert_eq!(PacketHeader::new(0xFF).count(), 128);
        assert_eq!(PacketHeader::new(0x00).count(), 1);
    }

    #[test]
    fn run_packet_replicates_pixel() {
        let data = [0x81, 0, 255, 0];
        let mut out = vec![0u8; 8];
        decode_rle(&mut Cursor::new(&data), &bgr24(), 2, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [0, 255, 0, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn raw_packet_reads_distinct_pixels() {
        let data = [0x01, 1, 2, 3, 4, 5, 6];
        let mut out = vec![0u8; 8];
        decode_rle(&mut Cursor::new(&data), &bgr24(), 2, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [3, 2, 1, 255, 6, 5, 4, 255]);
    }

    #[test]
    fn mixed_packets() {
        // run of 3 red, then raw of 1 blue
        let data = [0x82, 0, 0, 255, 0x00, 255, 0, 0];
        let mut out = vec![0u8; 16];
        decode_rle(&mut Cursor::new(&data), &bgr24(), 4, &mut out, &Unstoppable).unwrap();
        assert_eq!(
            out,
            [255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255, 0, 0, 255, 255]
        );
    }

    #[test]
    fn overshooting_raw_packet_stops_at_target() {
        // raw packet claims 4 pixels but only 2 are needed and present
        let data = [0x03, 1, 2, 3, 4, 5, 6];
        let mut cursor = Cursor::new(&data);
        let mut out = vec![0u8; 8];
        decode_rle(&mut cursor, &bgr24(), 2, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [3, 2, 1, 255, 6, 5, 4, 255]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn overshooting_run_packet_is_clamped() {
        let data = [0xFF, 9, 8, 7, 0xEE];
        let mut cursor = Cursor::new(&data);
        let mut out = vec![0u8; 12];
        decode_rle(&mut cursor, &bgr24(), 3, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [7, 8, 9, 255, 7, 8, 9, 255, 7, 8, 9, 255]);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn rle_stream_ending_early_is_truncated() {
        let data = [0x80, 1, 2, 3];
        let mut out = vec![0u8; 8];
        assert!(matches!(
            decode_rle(&mut Cursor::new(&data), &bgr24(), 2, &mut out, &Unstoppable),
            Err(TargaError::TruncatedData { .. })
        ));
        let data = [0x01, 1, 2, 3, 4];
        assert!(matches!(
            decode_rle(&mut Cursor::new(&data), &bgr24(), 2, &mut out, &Unstoppable),
            Err(TargaError::TruncatedData { .. })
        ));
    }

    #[test]
    fn raw_rows() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut out = vec![0u8; 16];
        decode_raw(&mut Cursor::new(&data), &bgr24(), 2, &mut out, &Unstoppable).unwrap();
        assert_eq!(
            out,
            [3, 2, 1, 255, 6, 5, 4, 255, 9, 8, 7, 255, 12, 11, 10, 255]
        );
        assert!(matches!(
            decode_raw(&mut Cursor::new(&data[..11]), &bgr24(), 2, &mut out, &Unstoppable),
            Err(TargaError::TruncatedData { .. })
        ));
    }
}
