//! The bitstream module is the bit level I/O for the code dictionary.
//!
//! Codes are written and read most significant bit first within each byte. The final byte of a
//! stream is padded with zero bits. There is no header, no length field and no end marker: a
//! reader needs the dictionary and the message length from somewhere else.
//!
pub mod bitpacker;
pub mod bitreader;
