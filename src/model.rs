use serde::Deserialize;

/// Spaces per nesting level unless configured otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// How the inside of a `repeat [ … ]` block is cut into commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Read the block command by command, each command taking as many
    /// inputs as it declares.
    #[default]
    Command,
    /// Lower every whitespace-separated word of the block on its own.
    Token,
}

/// Knobs for one translation run, usually read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateOptions {
    pub indent: usize,
    pub split: SplitPolicy,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            split: SplitPolicy::default(),
        }
    }
}

impl TranslateOptions {
    /// Whitespace for one nesting level.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }
}

/// Fully translated program handed to `writer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Output lines in emission order, prologue first and epilogue last.
    pub lines: Vec<String>,
    /// Names of the procedures defined, in the order they were emitted.
    pub procedures: Vec<String>,
}

impl Translation {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
