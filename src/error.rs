//! Error type shared by the codec, the file driver and the configuration loader.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong while building, encoding or decoding a huffman session.
#[derive(Error, Debug)]
pub enum HuffError {
    /// A tree was requested for a frequency table with no symbols in it.
    #[error("Cannot build a huffman tree from empty input")]
    EmptyInput,

    /// The packed stream does not decode against the session's code table.
    #[error("Malformed stream: {message}")]
    MalformedStream { message: String },

    /// Internal bookkeeping went wrong. Never caused by user data.
    #[error("Invariant violated: {message}")]
    InvariantViolation { message: String },

    /// The encoder was handed a byte the session never saw.
    #[error("Byte {0:#04x} is not in the code table")]
    UnknownSymbol(u8),

    #[error("No input file given on the command line or in the configuration")]
    NoInput,

    #[error("Configuration file not found at \"{}\"", .path.display())]
    MissingConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration file")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HuffError {
    pub(crate) fn malformed<S: Into<String>>(message: S) -> Self {
        HuffError::MalformedStream {
            message: message.into(),
        }
    }

    pub(crate) fn invariant<S: Into<String>>(message: S) -> Self {
        HuffError::InvariantViolation {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;
