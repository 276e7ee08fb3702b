//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;
use std::process::exit;

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

use huffpack::compression::files::{compress_file, decompress_file};
use huffpack::tools::cli::{Args, HuffOpts};
use huffpack::tools::report::Report;
use huffpack::tools::timer::Timer;
use huffpack::Result;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The real level is set
    // once the command line is parsed.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        simplelog::Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        exit(1);
    }
    info!("Done.");
}

/// Compress the input file, read the packed file back, decompress it, check it against
/// the original and write the report.
fn run(args: &Args) -> Result<()> {
    let config = args.load_config()?;
    let opts = HuffOpts::resolve(args, &config)?;
    opts.apply();

    let mut timer = Timer::new();
    let (codec, original) = compress_file(&opts.input, &opts.output)?;
    timer.mark("compress");

    let decompressed = decompress_file(&codec, &opts.output)?;
    timer.mark("decompress");

    let successful = original == decompressed;
    let report = Report {
        compression_time: timer.elapsed("compress"),
        decompression_time: timer.elapsed("decompress"),
        successful,
    };
    // The verdict goes to stdout whatever the log level.
    println!("{}", report.summary());
    if !successful {
        error!("Decompressed output differs from {}", opts.input.display());
        // Keep the bad output around for inspection.
        fs::write(opts.output.with_extension("out"), &decompressed)?;
    }
    timer.log_summary();

    report.write(&opts.report)
}
