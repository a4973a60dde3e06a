use alloc::vec::Vec;

use log::trace;

use super::cursor::Cursor;
use super::header::ColorMapSpec;
use super::unpack::expand_1555;
use crate::error::TargaError;

/// Color-map table, entries pre-expanded to RGBA8.
#[derive(Debug)]
pub(crate) struct ColorMap {
    first_index: usize,
    entries: Vec<[u8; 4]>,
}

impl ColorMap {
    /// Read `spec.length` entries from the cursor.
    pub(crate) fn read(spec: &ColorMapSpec, bytes: &mut Cursor<'_>) -> Result<Self, TargaError> {
        let table = bytes.take(spec.table_bytes()?)?;
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(usize::from(spec.length))
            .map_err(|_| TargaError::AllocationFailure {
                bytes: usize::from(spec.length) * 4,
            })?;

        if spec.length > 0 {
            let entry_bytes = spec.entry_bytes()?;
            entries.extend(table.chunks_exact(entry_bytes).map(|e| match spec.entry_depth {
                15 => expand_1555(u16::from_le_bytes([e[0], e[1]]), false),
                16 => expand_1555(u16::from_le_bytes([e[0], e[1]]), true),
                24 => [e[2], e[1], e[0], 255],
                _ => [e[2], e[1], e[0], e[3]],
            }));
        }

        trace!(
            "TGA color map: {} entries @ {} bits, first index {}",
            spec.length, spec.entry_depth, spec.first_index
        );

        Ok(Self {
            first_index: usize::from(spec.first_index),
            entries,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up a raw pixel index, offset by the table's first index.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Result<[u8; 4], TargaError> {
        index
            .checked_sub(self.first_index)
            .and_then(|i| self.entries.get(i))
            .copied()
            .ok_or(TargaError::ColorIndexOutOfRange {
                index,
                entries: self.entries.len(),
            })
    }
}
