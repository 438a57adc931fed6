use std::fmt::{Display, Formatter};

use log::trace;
use rustc_hash::FxHashMap;

use super::node::Node;
use crate::error::{HuffError, Result};

/// Longest code a `CodeEntry` can hold.
pub const MAX_CODE_LEN: usize = 64;

/// The code of one symbol. Only the low `bit_len` bits of `bits` are meaningful; the highest of
/// them is the branch taken at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: char,
    pub bits: u64,
    pub bit_len: u8,
    /// How often the symbol occurred in the table the dictionary was built from.
    pub frequency: u64,
}

impl CodeEntry {
    /// True if this code is a bit prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &CodeEntry) -> bool {
        self.bit_len <= other.bit_len && other.bits >> (other.bit_len - self.bit_len) == self.bits
    }
}

impl Display for CodeEntry {
    /// Writes the code as a string of 0s and 1s, root branch first.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for pos in (0..self.bit_len).rev() {
            let bit = if (self.bits >> pos) & 1 == 1 { '1' } else { '0' };
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Symbol to code lookup. Iterates shortest codes first, then by code value.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    index: FxHashMap<char, usize>,
}

impl CodeTable {
    pub fn get(&self, symbol: char) -> Option<&CodeEntry> {
        self.index.get(&symbol).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeEntry> {
        self.entries.iter()
    }

    /// Total bits needed to encode every symbol as often as it was counted. Fails with
    /// `FrequencyOverflow` if that does not fit a `u64`.
    pub fn weighted_bits(&self) -> Result<u64> {
        self.entries
            .iter()
            .try_fold(0_u64, |sum, e| {
                (e.bit_len as u64)
                    .checked_mul(e.frequency)
                    .and_then(|bits| sum.checked_add(bits))
            })
            .ok_or(HuffError::FrequencyOverflow)
    }
}

/// Walk the tree and give every symbol leaf its code.
pub fn derive_codes(root: &Node) -> Result<CodeTable> {
    let mut entries = Vec::new();
    collect_leaves(root, 0, 0, &mut entries)?;
    entries.sort_by(|a, b| a.bit_len.cmp(&b.bit_len).then(a.bits.cmp(&b.bits)));

    let index = entries
        .iter()
        .enumerate()
        .map(|(idx, e)| (e.symbol, idx))
        .collect::<FxHashMap<_, _>>();
    trace!(
        "Codes: {:?}",
        entries
            .iter()
            .map(|e| format!("{:?}={}", e.symbol, e))
            .collect::<Vec<_>>()
    );
    Ok(CodeTable { entries, index })
}

/// Recursively walk the tree, appending a 0 for every left turn and a 1 for every right turn.
/// Depth is the code length.
fn collect_leaves(node: &Node, bits: u64, depth: usize, out: &mut Vec<CodeEntry>) -> Result<()> {
    match node {
        Node::Internal { left, right, .. } => {
            collect_leaves(left, bits << 1, depth + 1, out)?;
            collect_leaves(right, (bits << 1) | 1, depth + 1, out)
        }
        Node::Leaf {
            frequency,
            symbol: Some(symbol),
        } => {
            if depth > MAX_CODE_LEN {
                return Err(HuffError::CodeTooLong {
                    symbol: *symbol,
                    depth,
                });
            }
            out.push(CodeEntry {
                symbol: *symbol,
                bits,
                bit_len: depth as u8,
                frequency: *frequency,
            });
            Ok(())
        }
        // filler leaf, no code
        Node::Leaf { symbol: None, .. } => Ok(()),
    }
}
