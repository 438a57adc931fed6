//! Greedy construction of the code tree from a frequency table.
//!
//! Every pass joins the two lightest nodes. Ties are broken by age: leaves are numbered in the
//! order of the frequency table and every joined node takes the next number, so the node that
//! entered first leaves first. The heap only ever holds (weight, number) keys that are unique,
//! which makes the result independent of the heap's internal layout.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::node::Node;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

/// A node waiting in the heap, keyed by weight and then by age.
#[derive(Debug)]
struct Pending {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    /// Reversed so the max-heap hands out the lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Build the code tree. Returns `None` for an empty table. Fails on any count below 1.
///
/// Child order: when the two weights differ, the heavier node goes left (bit 0); when they are
/// equal, the node taken first goes left. A table with a single symbol is padded so the symbol
/// still gets a one bit code.
pub fn build_tree(table: &FrequencyTable) -> Result<Option<Node>> {
    let mut heap = BinaryHeap::with_capacity(table.len());
    for (seq, entry) in table.iter().enumerate() {
        if entry.count <= 0 {
            return Err(HuffError::InvalidFrequency {
                symbol: entry.symbol,
                frequency: entry.count,
            });
        }
        heap.push(Pending {
            weight: entry.count as u64,
            seq,
            node: Node::leaf(entry.symbol, entry.count as u64),
        });
    }
    debug!("Building tree from {} symbols", heap.len());

    let mut next_seq = heap.len();
    let root = loop {
        let Some(first) = heap.pop() else {
            return Ok(None);
        };
        let Some(second) = heap.pop() else {
            break first.node;
        };
        trace!(
            "Joining #{} ({}) with #{} ({}) as #{}",
            first.seq,
            first.weight,
            second.seq,
            second.weight,
            next_seq
        );
        let node = if first.weight == second.weight {
            Node::join(first.node, second.node)?
        } else {
            Node::join(second.node, first.node)?
        };
        heap.push(Pending {
            weight: node.frequency(),
            seq: next_seq,
            node,
        });
        next_seq += 1;
    };

    if root.is_leaf() {
        debug!("Single symbol alphabet, padding the root");
        return Ok(Some(Node::pad_single(root)));
    }
    debug!(
        "Tree built: weight {}, depth {}",
        root.frequency(),
        root.depth()
    );
    Ok(Some(root))
}
