//! The bitstream module is the bit level I/O for the packed stream.
//!
//! BitPacker queues bits and emits whole bytes, most significant bit first. BitReader walks
//! a byte slice in the same order. Neither knows anything about huffman codes.
//!
pub mod bitpacker;
pub mod bitreader;
