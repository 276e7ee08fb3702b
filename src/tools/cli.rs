use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, LevelFilter};

use super::config::{Config, DEFAULT_CONFIG_PATH};
use crate::compression::files::output_path;
use crate::error::{HuffError, Result};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman compress a text file, decompress it again and report how it went",
    long_about = None
)]
pub struct Args {
    /// Text file to compress (overrides `path` in the configuration)
    #[clap()]
    pub file: Option<PathBuf>,

    /// Configuration file [default: config/config.toml, if present]
    #[clap(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Where to write the packed file [default: input path with a .bin extension]
    #[clap(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Where to write the XML report (overrides `report` in the configuration)
    #[clap(short = 'r', long = "report")]
    pub report: Option<PathBuf>,

    /// Raises verbosity above warnings. -v info, -vv debug, -vvv trace
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Warnings are shown when no -v is given.
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// The configuration named on the command line, else the default file if it exists,
    /// else built-in defaults.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_PATH))
            }
            None => Ok(Config::default()),
        }
    }
}

/// Everything the driver needs to run, after merging the command line over the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: PathBuf,
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let input = args
            .file
            .clone()
            .or_else(|| config.path.clone())
            .ok_or(HuffError::NoInput)?;
        let output = args.output.clone().unwrap_or_else(|| output_path(&input));
        let report = args.report.clone().unwrap_or_else(|| config.report.clone());

        Ok(Self {
            input,
            output,
            report,
            verbose: args.verbosity(),
        })
    }

    /// Set the log level and report the settings at info level.
    pub fn apply(&self) {
        log::set_max_level(self.verbose.level_filter());

        info!("---- Huffpack Initialization Start ----");
        info!("Verbosity set to {}", log::max_level());
        info!("Getting input from the file {}", self.input.display());
        info!("Writing packed data to {}", self.output.display());
        info!("Writing the report to {}", self.report.display());
        info!("---- Huffpack Initialization End ----");
    }
}
