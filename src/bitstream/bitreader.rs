//! BitReader: reads a packed bitstream one bit at a time.
//!
//! Bits are handed out most significant first within each byte, bytes in stream order.
//!

const BIT_MASK: u8 = 0x80;

/// Reads bits from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return Some(true) if the next bit is 1, Some(false) if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = byte & (BIT_MASK >> self.bit_index) != 0;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Count of bits not read yet.
    pub fn bits_left(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bits_left();
        (left, Some(left))
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let mut br = BitReader::new(&[0b10000001_u8]);
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn empty_test() {
        let mut br = BitReader::new(&[]);
        assert_eq!(br.bits_left(), 0);
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn across_bytes_test() {
        let bits = BitReader::new(&[0x15, 0x80])
            .map(|b| if b { '1' } else { '0' })
            .collect::<String>();
        assert_eq!(bits, "0001010110000000");
    }

    #[test]
    fn bits_left_test() {
        let mut br = BitReader::new("Hello".as_bytes());
        (0..9).for_each(|_| {
            br.bit();
        });
        assert_eq!(br.bits_left(), 31);
        assert_eq!(br.size_hint(), (31, Some(31)));
    }
}
