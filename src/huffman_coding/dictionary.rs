use log::debug;

use super::code_table::{derive_codes, CodeEntry, CodeTable};
use super::node::Node;
use super::tree_builder::build_tree;
use crate::error::Result;
use crate::tools::freq_count::FrequencyTable;

/// An immutable code dictionary: the code tree used for decoding and the symbol to code table
/// used for encoding. Build a new one for a new distribution.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: Option<Node>,
    codes: CodeTable,
    bit_count: u64,
}

impl Dictionary {
    /// Build a dictionary from symbol counts. Fails if a count is below 1 or the counts are too
    /// large to add up.
    pub fn from_frequency_table(table: &FrequencyTable) -> Result<Dictionary> {
        let Some(root) = build_tree(table)? else {
            return Ok(Dictionary::default());
        };
        let codes = derive_codes(&root)?;
        let bit_count = codes.weighted_bits()?;
        debug!(
            "Dictionary: {} symbols, {} in total, {} bits encoded",
            codes.len(),
            root.frequency(),
            bit_count
        );
        Ok(Dictionary {
            root: Some(root),
            codes,
            bit_count,
        })
    }

    /// Build a dictionary from `(symbol, count)` pairs.
    pub fn from_counts<I: IntoIterator<Item = (char, i64)>>(counts: I) -> Result<Dictionary> {
        Self::from_frequency_table(&FrequencyTable::from_counts(counts)?)
    }

    /// Build a dictionary from the symbol counts of a message.
    pub fn from_message(message: &str) -> Result<Dictionary> {
        Self::from_frequency_table(&FrequencyTable::from_message(message))
    }

    /// Build a dictionary from the message and encode the message with it.
    pub fn encode_message(message: &str) -> Result<(Vec<u8>, Dictionary)> {
        let dictionary = Self::from_message(message)?;
        let encoded = dictionary.encode(message)?;
        Ok((encoded, dictionary))
    }

    /// Root of the code tree, `None` for an empty dictionary.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Number of symbols counted when the dictionary was built (the root frequency).
    pub fn char_count(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::frequency)
    }

    /// Encoded size in bits of the message the dictionary was built from.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Encoded size in bytes of the message the dictionary was built from.
    pub fn byte_count(&self) -> usize {
        self.bit_count.div_ceil(8) as usize
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn get(&self, symbol: char) -> Option<&CodeEntry> {
        self.codes.get(symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains(symbol)
    }

    /// `(symbol, code)` pairs, shortest codes first.
    pub fn iter(&self) -> impl Iterator<Item = (char, &CodeEntry)> {
        self.codes.iter().map(|e| (e.symbol, e))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a CodeEntry;
    type IntoIter = std::slice::Iter<'a, CodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod test {
    use super::Dictionary;
    use crate::error::HuffError;

    #[test]
    fn counts_test() {
        let dict = Dictionary::from_message("aaabbc").unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.char_count(), 6);
        assert_eq!(dict.bit_count(), 9);
        assert_eq!(dict.byte_count(), 2);
        assert!(dict.contains('b'));
        assert!(!dict.contains('d'));
        assert_eq!(dict.get('c').unwrap().to_string(), "11");
    }

    #[test]
    fn conservation_test() {
        let message = "pack my box with five dozen liquor jugs";
        let dict = Dictionary::from_message(message).unwrap();
        let root = dict.root().unwrap();
        let total = message.chars().count() as u64;
        assert_eq!(root.frequency(), total);
        assert_eq!(root.leaf_total(), total);
        assert_eq!(dict.iter().map(|(_, e)| e.frequency).sum::<u64>(), total);
    }

    #[test]
    fn empty_dictionary_test() {
        let dict = Dictionary::from_message("").unwrap();
        assert!(dict.is_empty());
        assert!(dict.root().is_none());
        assert_eq!(dict.char_count(), 0);
        assert_eq!(dict.byte_count(), 0);
    }

    #[test]
    fn invalid_frequency_test() {
        let err = Dictionary::from_counts([('a', 1), ('b', -1)]).unwrap_err();
        assert_eq!(
            err,
            HuffError::InvalidFrequency {
                symbol: 'b',
                frequency: -1
            }
        );
    }

    #[test]
    fn frequency_overflow_test() {
        let max = i64::MAX;
        let err = Dictionary::from_counts([('a', max), ('b', max), ('c', max)]).unwrap_err();
        assert_eq!(err, HuffError::FrequencyOverflow);
        // the weights fit, but a=00 b=01 c=1 needs five times a quarter of u64::MAX bits
        let quarter = i64::MAX / 2;
        let err = Dictionary::from_counts([('a', quarter), ('b', quarter), ('c', quarter)])
            .unwrap_err();
        assert_eq!(err, HuffError::FrequencyOverflow);
        let err = Dictionary::from_counts([('a', i64::MAX), ('a', 1)]).unwrap_err();
        assert_eq!(err, HuffError::FrequencyOverflow);
    }

    #[test]
    fn iterate_codes_test() {
        let dict = Dictionary::from_counts([('a', 3), ('b', 2), ('c', 1)]).unwrap();
        let listed = (&dict)
            .into_iter()
            .map(|e| format!("{}={}", e.symbol, e))
            .collect::<Vec<_>>();
        assert_eq!(listed, ["a=0", "b=10", "c=11"]);
    }

    #[test]
    fn independent_rebuild_test() {
        let first = Dictionary::from_message("aab").unwrap();
        let second = Dictionary::from_message("abb").unwrap();
        assert_eq!(first.get('a').unwrap().bit_len, 1);
        assert_eq!(second.get('b').unwrap().bit_len, 1);
        assert_eq!(first.get('a').unwrap().frequency, 2);
    }
}
