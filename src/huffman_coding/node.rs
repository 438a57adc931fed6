use crate::error::{HuffError, Result};

/// A node of the code tree. Internal nodes always own exactly two children; leaves own none.
///
/// The left child is reached with a 0 bit, the right child with a 1 bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Internal {
        frequency: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// A leaf with `symbol: None` is the filler that pairs up a lone symbol. It is never decoded.
    Leaf { frequency: u64, symbol: Option<char> },
}

impl Node {
    /// Create a new leaf for a real symbol
    pub fn leaf(symbol: char, frequency: u64) -> Node {
        Node::Leaf {
            frequency,
            symbol: Some(symbol),
        }
    }

    /// Join two nodes under a new parent whose frequency is the sum of theirs.
    pub fn join(left: Node, right: Node) -> Result<Node> {
        let frequency = left
            .frequency()
            .checked_add(right.frequency())
            .ok_or(HuffError::FrequencyOverflow)?;
        Ok(Node::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Wrap a lone leaf so it gets a one bit code. The real leaf sits on the 0 side, a filler leaf
    /// of the same frequency on the 1 side. The root keeps the real leaf's frequency so it still
    /// equals the number of symbols counted.
    pub fn pad_single(leaf: Node) -> Node {
        let frequency = leaf.frequency();
        Node::Internal {
            frequency,
            left: Box::new(leaf),
            right: Box::new(Node::Leaf {
                frequency,
                symbol: None,
            }),
        }
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Node::Internal { frequency, .. } | Node::Leaf { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Follow one bit down the tree. Leaves have nowhere to go.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
            Node::Leaf { .. } => None,
        }
    }

    /// Sum of the frequencies of all leaves that carry a symbol.
    pub fn leaf_total(&self) -> u64 {
        match self {
            Node::Internal { left, right, .. } => {
                left.leaf_total().saturating_add(right.leaf_total())
            }
            Node::Leaf {
                frequency,
                symbol: Some(_),
            } => *frequency,
            Node::Leaf { symbol: None, .. } => 0,
        }
    }

    /// Length of the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
            Node::Leaf { .. } => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Node;
    use crate::error::HuffError;

    #[test]
    fn join_sums_frequency_test() {
        let node = Node::join(Node::leaf('a', 3), Node::leaf('b', 4)).unwrap();
        assert_eq!(node.frequency(), 7);
        assert_eq!(node.leaf_total(), 7);
        assert_eq!(node.depth(), 1);
        assert!(!node.is_leaf());
        assert_eq!(node.child(false), Some(&Node::leaf('a', 3)));
        assert_eq!(node.child(true), Some(&Node::leaf('b', 4)));
    }

    #[test]
    fn join_overflow_test() {
        let big = Node::leaf('a', u64::MAX);
        assert_eq!(
            Node::join(big.clone(), Node::leaf('b', 1)),
            Err(HuffError::FrequencyOverflow)
        );
        let node = Node::join(Node::leaf('a', u64::MAX - 1), Node::leaf('b', 1)).unwrap();
        assert_eq!(node.frequency(), u64::MAX);
        assert_eq!(big.leaf_total(), u64::MAX);
    }

    #[test]
    fn leaf_has_no_children_test() {
        let leaf = Node::leaf('x', 1);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.child(false), None);
        assert_eq!(leaf.child(true), None);
    }

    #[test]
    fn pad_single_keeps_count_test() {
        let root = Node::pad_single(Node::leaf('q', 5));
        assert_eq!(root.frequency(), 5);
        assert_eq!(root.leaf_total(), 5);
        assert_eq!(
            root.child(true),
            Some(&Node::Leaf {
                frequency: 5,
                symbol: None
            })
        );
    }
}
