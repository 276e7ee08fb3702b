//! Huffman coding of text, with a closed-session codec.
//!
//! Provides lossless compression of a byte sequence: a prefix-free code is derived from the
//! byte frequencies of the input, the input is packed into a bitstream behind a one byte
//! padding header, and the same session decodes it back.
//!
//! Basic usage:
//!
//! ```
//! let (codec, packed) = huffpack::compress(b"hello").unwrap();
//! assert_eq!(packed, vec![0x06, 0x4f, 0x80]);
//! assert_eq!(codec.decompress(&packed).unwrap(), b"hello");
//! ```
//!
//! The `huffpack` binary runs a whole round trip on a file and writes an XML report:
//!
//! `$> huffpack data/sample.txt -r report.xml`
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::codec::{compress, HuffmanCodec};
pub use error::{HuffError, Result};
pub use huffman_coding::{code_table::CodeTable, huffman::HuffmanTree};
pub use tools::freq_count::FreqTable;
