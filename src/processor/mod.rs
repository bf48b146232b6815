//! The functional core: turtle source in, Python out.
pub mod assembler;
pub mod ast;
pub mod command_parser;
pub mod lexer;
pub mod lower;
pub mod registry;
pub mod scanner;

pub use ast::{Builtin, Command, Procedure};

use crate::error::TranslateError;
use crate::model::{TranslateOptions, Translation};

/// Runs every pass and returns a read-only structure for writers.
pub fn run(src: &str, options: &TranslateOptions) -> Result<Translation, TranslateError> {
    assembler::assemble(src, options)
}

/// Same as [`run`], joined into the final Python text.
pub fn translate(src: &str, options: &TranslateOptions) -> Result<String, TranslateError> {
    run(src, options).map(|t| t.text())
}
