use crate::error::TargaError;

/// Forward-only reader over the input bytes.
///
/// Every read is bounds-checked; running off the end yields
/// [`TargaError::TruncatedData`] and leaves the position unchanged.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn truncated(&self, needed: usize) -> TargaError {
        TargaError::TruncatedData {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    /// Fail unless at least `n` bytes remain, without consuming any.
    pub(crate) fn require(&self, n: usize) -> Result<(), TargaError> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        Ok(())
    }

    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), TargaError> {
        if pos > self.data.len() {
            return Err(TargaError::TruncatedData {
                offset: self.data.len(),
                needed: pos - self.data.len(),
                available: 0,
            });
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, TargaError> {
        let b = *self.data.get(self.pos).ok_or_else(|| self.truncated(1))?;
        self.pos += 1;
        Ok(b)
    }

    /// Borrow the next `n` bytes.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], TargaError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| self.truncated(n))?;
        let data: &'a [u8] = self.data;
        let bytes = &data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_and_fail_at_end() {
        let data = [1, 2, 3];
        let mut c = Cursor::new(&data);
        assert_eq!(c.read_u8().unwrap(), 1);
        assert_eq!(c.take(2).unwrap(), &[2, 3]);
        assert_eq!(c.remaining(), 0);
        assert!(matches!(
            c.read_u8(),
            Err(TargaError::TruncatedData {
                offset: 3,
                needed: 1,
                available: 0
            })
        ));
    }

    #[test]
    fn failed_take_keeps_position() {
        let data = [1, 2, 3];
        let mut c = Cursor::new(&data);
        c.set_position(1).unwrap();
        assert!(c.take(3).is_err());
        assert_eq!(c.position(), 1);
        assert!(c.set_position(4).is_err());
    }

    #[test]
    fn require_does_not_consume() {
        let data = [1, 2, 3];
        let mut c = Cursor::new(&data);
        c.read_u8().unwrap();
        c.require(2).unwrap();
        assert_eq!(c.position(), 1);
        assert!(matches!(
            c.require(3),
            Err(TargaError::TruncatedData {
                offset: 1,
                needed: 3,
                available: 2
            })
        ));
    }
}
