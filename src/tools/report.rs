use std::{fs, path::Path, time::Duration};

use log::info;

use crate::error::Result;

/// Summary of one compress/decompress round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub compression_time: Duration,
    pub decompression_time: Duration,
    /// Decompressed output matched the original input.
    pub successful: bool,
}

impl Report {
    /// Renders the summary as a small XML record. Times are in seconds.
    pub fn to_xml(&self) -> String {
        format!(
            "<root><CompressionTime>{}</CompressionTime><DecompressionTime>{}</DecompressionTime><isSuccessful>{}</isSuccessful></root>",
            self.compression_time.as_secs_f64(),
            self.decompression_time.as_secs_f64(),
            if self.successful { "True" } else { "False" }
        )
    }

    /// One line verdict for the terminal.
    pub fn summary(&self) -> String {
        format!("Original and decompressed are the same: {}", self.successful)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xml())?;
        info!("Report written to {}.", path.display());
        Ok(())
    }
}
