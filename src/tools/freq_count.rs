use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};

/// One symbol and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub symbol: char,
    pub count: i64,
}

/// Frequency count of a message. Entries keep the order in which each symbol was first seen,
/// which is the order leaves enter the tree builder (and therefore decides ties).
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: FxHashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every char of the message.
    pub fn from_message(message: &str) -> Self {
        Self::from_symbols(message.chars())
    }

    /// Count every symbol of the sequence.
    pub fn from_symbols<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            // bounded by the length of the sequence
            let count = table.count_mut(symbol);
            *count = count.saturating_add(1);
        }
        table
    }

    /// Take caller supplied counts, adding up repeated symbols. Only the sums are checked here;
    /// the tree builder rejects anything that is not positive.
    pub fn from_counts<I: IntoIterator<Item = (char, i64)>>(counts: I) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, count) in counts {
            table.insert(symbol, count)?;
        }
        Ok(table)
    }

    /// Add count to the symbol, creating the entry if it is new. Fails with
    /// `FrequencyOverflow` if the sum no longer fits an `i64`; the table is unchanged then.
    pub fn insert(&mut self, symbol: char, count: i64) -> Result<()> {
        let slot = self.count_mut(symbol);
        *slot = slot.checked_add(count).ok_or(HuffError::FrequencyOverflow)?;
        Ok(())
    }

    /// Count of the symbol, starting a zero entry if it is new.
    fn count_mut(&mut self, symbol: char) -> &mut i64 {
        let entries = &mut self.entries;
        let idx = *self.index.entry(symbol).or_insert_with(|| {
            entries.push(FrequencyEntry { symbol, count: 0 });
            entries.len() - 1
        });
        &mut self.entries[idx].count
    }

    pub fn get(&self, symbol: char) -> Option<i64> {
        self.index.get(&symbol).map(|&idx| self.entries[idx].count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, `None` if it does not fit an `i64`.
    pub fn total(&self) -> Option<i64> {
        self.entries
            .iter()
            .try_fold(0_i64, |sum, e| sum.checked_add(e.count))
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
