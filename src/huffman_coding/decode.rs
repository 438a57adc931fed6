//! Decoding walks the code tree one bit at a time: 0 goes left, 1 goes right, and every leaf
//! reached emits its symbol and starts over at the root.
//!
//! The stream has no end marker. Zero padding in the last byte can look like one or more extra
//! codes, so callers pass the expected message length whenever they have it.

use log::debug;

use super::dictionary::Dictionary;
use super::node::Node;
use crate::bitstream::bitreader::BitReader;

impl Dictionary {
    /// Walk the tree over every bit of the input, calling `emit` for each decoded symbol until
    /// it returns false or the bits run out.
    fn walk<F: FnMut(char) -> bool>(&self, input: &[u8], mut emit: F) {
        let Some(root) = self.root() else {
            return;
        };
        let mut node = root;
        for bit in BitReader::new(input) {
            // The root always has children, and we return to it on every leaf
            let Some(next) = node.child(bit) else {
                return;
            };
            match next {
                Node::Leaf {
                    symbol: Some(symbol),
                    ..
                } => {
                    node = root;
                    if !emit(*symbol) {
                        return;
                    }
                }
                // filler of a one symbol tree
                Node::Leaf { symbol: None, .. } => node = root,
                Node::Internal { .. } => node = next,
            }
        }
    }

    /// Decode at most `expected_len` symbols. The result is shorter only when the input runs out.
    pub fn decode(&self, input: &[u8], expected_len: usize) -> String {
        // Every symbol takes at least one bit
        let mut out = String::with_capacity(expected_len.min(input.len().saturating_mul(8)));
        if expected_len == 0 {
            return out;
        }
        let mut decoded = 0;
        self.walk(input, |symbol| {
            out.push(symbol);
            decoded += 1;
            decoded < expected_len
        });
        if decoded < expected_len {
            debug!(
                "Input ran out after {} of {} symbols",
                decoded, expected_len
            );
        }
        out
    }

    /// Decode into `output` until it is full or the input runs out. Returns the number of
    /// symbols written.
    pub fn decode_into(&self, output: &mut [char], input: &[u8]) -> usize {
        if output.is_empty() || input.is_empty() {
            return 0;
        }
        let mut decoded = 0;
        self.walk(input, |symbol| {
            output[decoded] = symbol;
            decoded += 1;
            decoded < output.len()
        });
        decoded
    }

    /// Decode every complete code in the input. Padding bits may add symbols at the end.
    pub fn decode_all(&self, input: &[u8]) -> String {
        let mut output = vec!['\0'; self.char_count_of(input)];
        let decoded = self.decode_into(&mut output, input);
        output[..decoded].iter().collect()
    }

    /// Number of symbols `decode_all` would produce, without storing them.
    pub fn char_count_of(&self, input: &[u8]) -> usize {
        let mut count = 0;
        self.walk(input, |_| {
            count += 1;
            true
        });
        count
    }
}
