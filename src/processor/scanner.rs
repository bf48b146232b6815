//! Reads one `to <name> [:param]* … end` block out of the line stream.

use log::trace;

use super::lexer::{PARAM_SIGIL, SourceLines};
use crate::error::TranslateError;

pub const HEADER_KEYWORD: &str = "to";
pub const TERMINATOR_KEYWORD: &str = "end";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedProcedure {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<String>,
    /// Index of the first line after `end`.
    pub next: usize,
}

pub fn is_header(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|w| w.eq_ignore_ascii_case(HEADER_KEYWORD))
}

pub fn is_terminator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(TERMINATOR_KEYWORD)
}

/// Scans the definition whose header sits at `start`.
pub fn scan_procedure(
    lines: &SourceLines<'_>,
    start: usize,
) -> Result<ScannedProcedure, TranslateError> {
    let header = lines
        .get(start)
        .filter(|l| is_header(l.text))
        .ok_or(TranslateError::NotAHeader { index: start })?;

    let mut words = header.text.split_whitespace().skip(1);
    let name = words
        .next()
        .ok_or(TranslateError::MissingName {
            line: header.number,
        })?
        .to_lowercase();

    let mut params: Vec<String> = Vec::new();
    for word in words {
        let param = word.strip_prefix(PARAM_SIGIL).unwrap_or(word).to_lowercase();
        if params.contains(&param) {
            return Err(TranslateError::DuplicateParameter {
                name,
                param,
                line: header.number,
            });
        }
        params.push(param);
    }

    let mut body = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if is_terminator(line.text) {
            trace!("scanned `{name}`: {} params, {} body lines", params.len(), body.len());
            return Ok(ScannedProcedure {
                name,
                params,
                body,
                next: idx + 1,
            });
        }
        body.push(line.text.to_string());
    }

    Err(TranslateError::MissingTerminator {
        name,
        line: header.number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_square() {
        let lines = SourceLines::new("to square :size\n  repeat 4 [fd :size rt 90]\nend\n\nsquare 100\n");
        let scanned = scan_procedure(&lines, 0).unwrap();

        assert_eq!(
            scanned,
            ScannedProcedure {
                name: "square".into(),
                params: vec!["size".into()],
                body: vec!["repeat 4 [fd :size rt 90]".into()],
                next: 3,
            }
        );
        assert_eq!(lines.get(scanned.next).unwrap().text, "square 100");
    }

    #[test]
    fn test_scan_headers() {
        let test_cases = vec![
            ("to star\nend", "star", vec![]),
            ("TO Box :W :h\nEND", "box", vec!["w", "h"]),
            ("to line :a :b :c\n; comment inside\nend", "line", vec!["a", "b", "c"]),
        ];

        for (src, name, params) in test_cases {
            let lines = SourceLines::new(src);
            let scanned = scan_procedure(&lines, 0).unwrap();
            assert_eq!(scanned.name, name);
            assert_eq!(scanned.params, params);
            assert!(scanned.body.is_empty(), "body of {name}");
            assert_eq!(scanned.next, lines.len());
        }
    }

    #[test]
    fn test_missing_terminator() {
        let lines = SourceLines::new("fd 10\n\nto square :size\n  fd :size\n");
        let err = scan_procedure(&lines, 1).unwrap_err();
        assert_eq!(
            err,
            TranslateError::MissingTerminator {
                name: "square".into(),
                line: 3,
            }
        );
    }

    #[test]
    fn test_header_errors() {
        let lines = SourceLines::new("to\nend");
        assert_eq!(
            scan_procedure(&lines, 0),
            Err(TranslateError::MissingName { line: 1 })
        );

        let lines = SourceLines::new("to f :x :X\nend");
        assert_eq!(
            scan_procedure(&lines, 0),
            Err(TranslateError::DuplicateParameter {
                name: "f".into(),
                param: "x".into(),
                line: 1,
            })
        );

        let lines = SourceLines::new("fd 10");
        assert_eq!(
            scan_procedure(&lines, 0),
            Err(TranslateError::NotAHeader { index: 0 })
        );
        assert_eq!(
            scan_procedure(&lines, 5),
            Err(TranslateError::NotAHeader { index: 5 })
        );
    }

    #[test]
    fn test_is_header() {
        assert!(is_header("to square"));
        assert!(is_header("To square :n"));
        assert!(!is_header("toward 10"));
        assert!(!is_header("fd 10"));
        assert!(!is_header(""));
    }
}
