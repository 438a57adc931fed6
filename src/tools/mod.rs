//! The tools module provides the helpers around the code dictionary.
//!
//! The tools are:
//! - cli: Command line interface and options.
//! - freq_count: Frequency count of the symbols of a message.
//! - report: Text renderings of bytes, code tables and trees.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
