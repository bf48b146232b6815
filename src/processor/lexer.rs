//! Very small hand-written line splitter and lexer for turtle source.
//!
//! `SourceLines` cuts the program into trimmed logical lines and throws away
//! blank lines and comments. `Lexer` only matters inside `repeat` blocks,
//! where brackets have to be told apart from words.
//
//  Grammar excerpts (informal):
//
//      program ::= line*
//      line    ::= comment | header | 'end' | command
//      comment ::= ';' .* NEWLINE
//
//  Lexical items (inside a block):
//
//      Word     ::= [^\s\[\]]+
//      Open     ::= '['
//      Close    ::= ']'

use std::iter::Peekable;
use std::str::Chars;

pub const COMMENT_MARKER: char = ';';
pub const PARAM_SIGIL: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based position in the original text.
    pub number: usize,
    pub text: &'a str,
}

/// Executable lines of a program, indexable so the scanner can step through
/// them and restart wherever it likes.
#[derive(Debug, Clone, Default)]
pub struct SourceLines<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> SourceLines<'a> {
    pub fn new(src: &'a str) -> Self {
        let lines = src
            .lines()
            .enumerate()
            .map(|(i, raw)| Line {
                number: i + 1,
                text: raw.trim(),
            })
            .filter(|line| !is_skipped(line.text))
            .collect();
        Self { lines }
    }

    pub fn get(&self, idx: usize) -> Option<&Line<'a>> {
        self.lines.get(idx)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line<'a>> {
        self.lines.iter()
    }
}

/// Blank lines and `;` comments carry no commands.
pub fn is_skipped(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with(COMMENT_MARKER)
}

/// Splits a whole command line the plain way, on whitespace.
pub fn words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Open,  // '['
    Close, // ']'
}

#[derive(Clone)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
        }
    }

    fn read_word(&mut self, first: char) -> String {
        let mut word = String::new();
        word.push(first);
        while let Some(c) = self.chars.next_if(|c| !is_delimiter(*c)) {
            word.push(c);
        }
        word
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '[' || c == ']'
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}

        let token = match self.chars.next()? {
            '[' => Token::Open,
            ']' => Token::Close,
            c => Token::Word(self.read_word(c)),
        };
        Some(token)
    }
}
