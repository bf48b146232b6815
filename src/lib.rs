pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

pub use error::TranslateError;
pub use model::{SplitPolicy, TranslateOptions, Translation};
pub use processor::translate;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use log::{LevelFilter, info};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    // 1. ── Options ────────────────────────────────────────────────────
    let mut options = match &args.config {
        Some(path) => parser::load_options_file(path)?,
        None => TranslateOptions::default(),
    };
    args.apply(&mut options);
    parser::validate(&options).with_context(|| "Checking options")?;

    // 2. ── Read ───────────────────────────────────────────────────────
    let source = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Reading stdin")?;
            buf
        }
    };

    // 3. ── Translate ──────────────────────────────────────────────────
    let translation =
        processor::run(&source, &options).with_context(|| "Translating turtle program")?;
    info!(
        "{} procedures, {} output lines",
        translation.procedures.len(),
        translation.lines.len()
    );

    // 4. ── Write ──────────────────────────────────────────────────────
    let source_name = args
        .input
        .as_ref()
        .map(|p| p.display().to_string());
    writer::python::emit(&translation, args.output.as_deref(), source_name.as_deref())
        .with_context(|| "Writing Python output")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
