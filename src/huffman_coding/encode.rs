use log::trace;

use super::code_table::CodeEntry;
use super::dictionary::Dictionary;
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};

impl Dictionary {
    fn lookup(&self, symbol: char) -> Result<&CodeEntry> {
        self.get(symbol).ok_or(HuffError::UnknownSymbol(symbol))
    }

    /// Encode the input into a new buffer of exactly `byte_count_of(input)` bytes.
    pub fn encode(&self, input: &str) -> Result<Vec<u8>> {
        let mut output = vec![0_u8; self.byte_count_of(input)?];
        let written = self.encode_into(&mut output, input)?;
        output.truncate(written);
        Ok(output)
    }

    /// Encode the input into `output` and return the number of bytes written. Stops as soon as
    /// `output` is full, so a short buffer receives the start of the stream. Any trailing 1-7
    /// bits are left aligned in the last byte and padded with zeros.
    pub fn encode_into(&self, output: &mut [u8], input: &str) -> Result<usize> {
        if output.is_empty() || input.is_empty() {
            return Ok(0);
        }
        let mut bp = BitPacker::new(output);
        for symbol in input.chars() {
            let code = self.lookup(symbol)?;
            if !bp.out_bits(code.bits, code.bit_len) {
                trace!("Output buffer full at {}", bp.loc());
                break;
            }
        }
        Ok(bp.flush())
    }

    /// Exact number of bytes `encode` produces for the input, without encoding it.
    pub fn byte_count_of(&self, input: &str) -> Result<usize> {
        let mut bits = 0_u64;
        for symbol in input.chars() {
            bits += self.lookup(symbol)?.bit_len as u64;
        }
        Ok(bits.div_ceil(8) as usize)
    }
}
