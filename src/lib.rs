//! Huffman code dictionary.
//!
//! Builds a prefix code from symbol frequencies and packs messages into bytes with it, or walks
//! the code tree to get them back.
//!
//! ```
//! use huffdict::Dictionary;
//!
//! let dict = Dictionary::from_message("aaabbc")?;
//! let bytes = dict.encode("aaabbc")?;
//! assert_eq!(bytes, [0x15, 0x80]);
//! assert_eq!(dict.decode(&bytes, 6), "aaabbc");
//! # Ok::<(), huffdict::HuffError>(())
//! ```
//!
//! The stream is bare: no header, no frequency table and no length. Keep the dictionary (or the
//! counts it was built from) and the message length to decode it.
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::HuffError;
pub use huffman_coding::code_table::CodeEntry;
pub use huffman_coding::dictionary::Dictionary;
pub use huffman_coding::node::Node;
pub use tools::freq_count::{FrequencyEntry, FrequencyTable};
