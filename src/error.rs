//! Structural failures that abort a translation run.
//!
//! Unknown commands and malformed `repeat` blocks never end up here; they
//! are carried through into the generated code instead.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("line {line}: procedure `{name}` has no matching `end`")]
    MissingTerminator { name: String, line: usize },

    #[error("line {line}: `to` must be followed by a procedure name")]
    MissingName { line: usize },

    #[error("line {line}: procedure `{name}` declares parameter `{param}` more than once")]
    DuplicateParameter {
        name: String,
        param: String,
        line: usize,
    },

    #[error("line index {index} does not start a procedure definition")]
    NotAHeader { index: usize },
}
