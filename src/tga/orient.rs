use log::debug;

use super::header::Descriptor;

/// Reorder a file-order RGBA8 raster so row 0 is the top scan line and
/// column 0 the left edge.
pub(crate) fn normalize(rgba: &mut [u8], width: usize, descriptor: Descriptor) {
    let row_len = width * 4;
    if row_len == 0 {
        return;
    }
    if !descriptor.top_to_bottom() {
        debug!("TGA: flipping bottom-up rows");
        flip_rows(rgba, row_len);
    }
    if descriptor.right_to_left() {
        debug!("TGA: mirroring right-to-left columns");
        for row in rgba.chunks_exact_mut(row_len) {
            // Reversing the bytes reverses pixel order and each pixel's
            // channel order; the second pass restores the channels.
            row.reverse();
            for px in row.chunks_exact_mut(4) {
                px.reverse();
            }
        }
    }
}

fn flip_rows(rgba: &mut [u8], row_len: usize) {
    let rows = rgba.len() / row_len;
    let (top, bottom) = rgba.split_at_mut((rows / 2) * row_len);
    // With an odd row count the middle row leads `bottom` and stays put.
    for (upper, lower) in top
        .chunks_exact_mut(row_len)
        .zip(bottom.rchunks_exact_mut(row_len))
    {
        upper.swap_with_slice(lower);
    }
}
