//! Helpers around the codec: frequency counting plus the pieces the command line driver
//! is built from.
//!
//! The tools are:
//! - cli: Command line interface, merged over the configuration file.
//! - config: TOML configuration (input path, report path).
//! - freq_count: Frequency count of the input bytes.
//! - report: XML summary of a compress/decompress round trip.
//! - timer: Wall-clock time per phase.
//!
pub mod cli;
pub mod config;
pub mod freq_count;
pub mod report;
pub mod timer;
