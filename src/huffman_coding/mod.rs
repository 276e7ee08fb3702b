//! The huffman module turns a frequency table into a prefix-free code.
//!
//! The tree is built with a min-priority queue. Ties between equal weights are broken by the
//! order in which nodes entered the queue, with leaves entering in ascending byte order, so
//! the same input always gives the same tree and the same codes.
//!
//! Codes are read off the tree depth first: a left branch appends a 0, a right branch a 1.
//! A tree holding a single symbol has no branch to read, and that symbol gets the code 0.
//!

pub mod code_table;
pub mod huffman;
