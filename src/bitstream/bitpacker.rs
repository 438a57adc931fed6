/// Packs variable length codes into a caller supplied byte buffer, most significant bit first.
/// Once the buffer is full every further write is refused, so a short buffer simply receives
/// the leading part of the stream.
pub struct BitPacker<'a> {
    output: &'a mut [u8],
    /// Count of complete bytes written to output.
    written: usize,
    /// Bits that are waiting to be put as a byte into the output buffer.
    queue: u32,
    /// Count of valid bits in the queue (0-7 between calls).
    q_bits: u8,
}

impl<'a> BitPacker<'a> {
    pub fn new(output: &'a mut [u8]) -> Self {
        Self {
            output,
            written: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.written == self.output.len()
    }

    /// Put the low `len` bits of `bits` on the stream, highest first. Returns false as soon as
    /// the buffer fills up; the rest of the code is dropped.
    pub fn out_bits(&mut self, bits: u64, mut len: u8) -> bool {
        while len > 0 {
            if self.is_full() {
                return false;
            }
            // Take as many of the leading bits as fit in the queue
            let take = len.min(8 - self.q_bits);
            let chunk = (bits >> (len - take)) & ((1_u64 << take) - 1);
            self.queue = (self.queue << take) | chunk as u32;
            self.q_bits += take;
            len -= take;

            if self.q_bits == 8 {
                self.output[self.written] = self.queue as u8;
                self.written += 1;
                self.queue = 0;
                self.q_bits = 0;
            }
        }
        !self.is_full()
    }

    /// Flushes the remaining bits (1-7) from the queue, left aligned and padded with 0s in the
    /// least signficant bits. Returns the number of bytes written in total.
    pub fn flush(&mut self) -> usize {
        if self.q_bits > 0 && !self.is_full() {
            self.output[self.written] = (self.queue << (8 - self.q_bits)) as u8;
            self.written += 1;
        }
        self.queue = 0;
        self.q_bits = 0;
        self.written
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.written, self.q_bits)
    }
}
