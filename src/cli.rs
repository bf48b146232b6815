use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::model::{SplitPolicy, TranslateOptions};

/// Translate turtle graphics programs into Python.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input turtle source file (stdin when omitted)
    pub input: Option<PathBuf>,
    /// Output .py file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// JSON options file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// How commands inside `repeat` blocks are separated
    #[arg(long, value_enum)]
    pub split: Option<SplitPolicy>,
    /// Spaces per nesting level
    #[arg(long)]
    pub indent: Option<usize>,
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line flags take precedence over the options file.
    pub fn apply(&self, options: &mut TranslateOptions) {
        if let Some(split) = self.split {
            options.split = split;
        }
        if let Some(indent) = self.indent {
            options.indent = indent;
        }
    }
}
