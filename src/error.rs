//! Errors raised while building a dictionary or encoding with it.
//!
//! Decoding never fails: bits that do not complete a code are simply left unused.

/// Everything that can go wrong in the library.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// A frequency of zero or less was supplied for a symbol.
    #[error("invalid frequency {frequency} for symbol {symbol:?}")]
    InvalidFrequency { symbol: char, frequency: i64 },
    /// The symbol has no code in the dictionary.
    #[error("symbol {0:?} is not in the dictionary")]
    UnknownSymbol(char),
    /// The tree grew deeper than a code register can hold.
    #[error("code for symbol {symbol:?} needs {depth} bits, more than the supported 64")]
    CodeTooLong { symbol: char, depth: usize },
    /// The counts add up to more than a 64 bit counter holds.
    #[error("symbol frequencies add up to more than {}", u64::MAX)]
    FrequencyOverflow,
}

pub type Result<T> = std::result::Result<T, HuffError>;

impl From<HuffError> for std::io::Error {
    fn from(err: HuffError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
