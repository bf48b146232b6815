//! Turns one command line into typed `Command`s.
//!
//! A top-level line is a single command whose inputs are every remaining
//! word. Inside a `repeat` block there are no line breaks to lean on, so
//! how the block is cut up depends on the `SplitPolicy`.

use std::iter::Peekable;

use log::warn;

use super::ast::{Builtin, Command};
use super::lexer::{self, Lexer, PARAM_SIGIL, Token};
use super::registry::Registry;
use crate::model::SplitPolicy;

pub const REPEAT_KEYWORD: &str = "repeat";

type Tokens<'a> = Peekable<Lexer<'a>>;

pub struct CommandParser<'r> {
    registry: &'r Registry,
    split: SplitPolicy,
}

impl<'r> CommandParser<'r> {
    pub fn new(registry: &'r Registry, split: SplitPolicy) -> Self {
        Self { registry, split }
    }

    /// Parses a full source line. Empty lines produce nothing; a `repeat`
    /// line read with `SplitPolicy::Command` may produce trailing commands
    /// after its block.
    pub fn parse_line(&self, line: &str) -> Vec<Command> {
        let words = lexer::words(line);
        let Some((head, rest)) = words.split_first() else {
            return Vec::new();
        };

        let name = head.to_lowercase();
        if name == REPEAT_KEYWORD {
            return match self.split {
                SplitPolicy::Command => self.parse_block(&mut Lexer::new(line).peekable(), false),
                SplitPolicy::Token => vec![self.parse_repeat_tokens(line, rest)],
            };
        }

        let cmd = if let Some(op) = Builtin::from_name(&name) {
            builtin(op, rest.iter().map(|w| argument(w)).collect())
        } else if self.registry.contains(&name) {
            Command::Call {
                name,
                args: rest.iter().map(|w| argument(w)).collect(),
            }
        } else {
            Command::Unknown {
                text: line.trim().to_string(),
            }
        };
        vec![cmd]
    }

    /// Word-by-word splitting: drop the outer brackets and lower every word of
    /// the block as its own one-word line.
    fn parse_repeat_tokens(&self, line: &str, rest: &[&str]) -> Command {
        let Some((count, block)) = rest.split_first() else {
            return Command::Unknown {
                text: line.trim().to_string(),
            };
        };

        let joined = block.join(" ");
        let body = strip_brackets(&joined)
            .split_whitespace()
            .flat_map(|word| self.parse_line(word))
            .collect();

        Command::Repeat {
            count: argument(count),
            body,
        }
    }

    /// Reads commands until the tokens run out or, for a nested block, until
    /// the closing bracket.
    fn parse_block(&self, tokens: &mut Tokens<'_>, nested: bool) -> Vec<Command> {
        let mut body = Vec::new();
        while let Some(token) = tokens.next() {
            let cmd = match token {
                Token::Close if nested => break,
                Token::Close => Command::Unknown { text: "]".into() },
                Token::Open => Command::Unknown {
                    text: format!("[{}]", read_group(tokens)),
                },
                Token::Word(word) => self.parse_word(word, tokens),
            };
            body.push(cmd);
        }
        body
    }

    fn parse_word(&self, word: String, tokens: &mut Tokens<'_>) -> Command {
        let name = word.to_lowercase();

        if name == REPEAT_KEYWORD {
            let Some(Token::Word(count)) = tokens.next_if(|t| matches!(t, Token::Word(_))) else {
                return Command::Unknown { text: word };
            };
            let body = match tokens.next_if_eq(&Token::Open) {
                Some(_) => self.parse_block(tokens, true),
                None => Vec::new(),
            };
            return Command::Repeat {
                count: argument(&count),
                body,
            };
        }

        if let Some(op) = Builtin::from_name(&name) {
            return builtin(op, take_args(tokens, op.arity()));
        }

        if let Some(proc) = self.registry.lookup(&name) {
            let args = take_args(tokens, proc.params.len());
            return Command::Call { name, args };
        }

        // Unknown words swallow their inputs up to the next known command.
        let mut text = vec![word];
        loop {
            match tokens.peek() {
                Some(Token::Word(next)) if !self.is_command(next) => {
                    text.push(next.clone());
                    tokens.next();
                }
                Some(Token::Open) => {
                    tokens.next();
                    text.push(format!("[{}]", read_group(tokens)));
                }
                _ => break,
            }
        }
        Command::Unknown {
            text: text.join(" "),
        }
    }

    fn is_command(&self, word: &str) -> bool {
        word.eq_ignore_ascii_case(REPEAT_KEYWORD)
            || Builtin::from_name(word).is_some()
            || self.registry.contains(word)
    }
}

fn builtin(op: Builtin, mut args: Vec<String>) -> Command {
    if op.arity() == 0 && !args.is_empty() {
        warn!("{op:?} takes no inputs, ignoring {args:?}");
        args.clear();
    }
    Command::Builtin { op, args }
}

/// Takes up to `n` inputs. A bracketed list counts as one input.
fn take_args(tokens: &mut Tokens<'_>, n: usize) -> Vec<String> {
    let mut args = Vec::with_capacity(n);
    while args.len() < n {
        if let Some(Token::Word(w)) = tokens.next_if(|t| matches!(t, Token::Word(_))) {
            args.push(argument(&w));
        } else if tokens.next_if_eq(&Token::Open).is_some() {
            args.push(format!("[{}]", read_group(tokens)));
        } else {
            break;
        }
    }
    args
}

/// Consumes up to and including the `]` matching an already consumed `[`
/// and renders what was inside.
fn read_group(tokens: &mut Tokens<'_>) -> String {
    let mut parts = Vec::new();
    while let Some(token) = tokens.next() {
        match token {
            Token::Open => parts.push(format!("[{}]", read_group(tokens))),
            Token::Close => break,
            Token::Word(w) => parts.push(w),
        }
    }
    parts.join(" ")
}

/// Strips one leading `[` and one trailing `]`.
fn strip_brackets(block: &str) -> &str {
    let block = block.strip_prefix('[').unwrap_or(block);
    let block = block.strip_suffix(']').unwrap_or(block);
    block.trim()
}

/// Normalises one input word for Python: `:size` reads the variable `size`,
/// `"word` becomes a string literal, anything else passes through.
///
/// Only those two forms are rewritten; every other token reaches the output
/// exactly as written.
pub fn argument(word: &str) -> String {
    if let Some(var) = word.strip_prefix(PARAM_SIGIL) {
        var.to_lowercase()
    } else if let Some(text) = word.strip_prefix('"') {
        // JSON string escapes are also valid Python string escapes.
        serde_json::Value::String(text.to_string()).to_string()
    } else {
        word.to_string()
    }
}
