//! The huffman_coding module builds the code dictionary and uses it to encode and decode messages.
//!
//! A dictionary is built once from a frequency table and never changes afterwards:
//! - tree_builder: greedily joins the two lightest nodes until one root is left.
//! - code_table: walks the tree and gives every symbol its bit pattern and length.
//! - encode: packs the codes of a message into bytes.
//! - decode: walks the tree bit by bit to recover the message.
//!
//! The same dictionary must be used on both sides. Nothing about it is written to the stream.
//!

pub mod code_table;
pub mod decode;
pub mod dictionary;
pub mod encode;
pub mod node;
pub mod tree_builder;
