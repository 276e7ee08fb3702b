//! The compression module ties the codec together.
//!
//! Compression happens in the following steps:
//! - Count the frequency of every byte in the input.
//! - Build the huffman tree and read the code table off it.
//! - Replace every byte with its code, pad the bit string out to a whole byte and put the
//!   padding count in front as a one byte header.
//!
//! Decompression reads the header, drops the padding and matches codes against the table
//! until the bit string is used up. The code table is not stored with the data, so the
//! session (HuffmanCodec) that compressed the data is the one that decompresses it.
//!

pub mod codec;
pub mod compress;
pub mod decompress;
pub mod files;
