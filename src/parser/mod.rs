use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use log::debug;

use crate::model::TranslateOptions;

/// Widest nesting step accepted from a config file or the command line.
pub const MAX_INDENT: usize = 16;

/// Parse a JSON options document into `TranslateOptions`.
///
/// Every field is optional and falls back to its default:
///
/// ```json
/// { "indent": 4, "split": "command" }
/// ```
///
/// Unknown fields are reported as an error so typos don't go unnoticed.
pub fn load_options(json: &str) -> Result<TranslateOptions> {
    let options: TranslateOptions =
        serde_json::from_str(json).map_err(|e| anyhow!("Failed to parse options JSON: {}", e))?;
    validate(&options)?;
    debug!("options loaded: {options:?}");
    Ok(options)
}

pub fn load_options_file(path: &Path) -> Result<TranslateOptions> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    load_options(&json).with_context(|| format!("Loading options from {}", path.display()))
}

pub fn validate(options: &TranslateOptions) -> Result<()> {
    if options.indent == 0 {
        bail!("`indent` must be at least 1");
    }
    if options.indent > MAX_INDENT {
        bail!("`indent` must be at most {MAX_INDENT}, got {}", options.indent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SplitPolicy;

    #[test]
    fn test_load_options() {
        let test_cases = vec![
            ("{}", TranslateOptions::default()),
            (
                r#"{ "split": "token" }"#,
                TranslateOptions {
                    indent: 4,
                    split: SplitPolicy::Token,
                },
            ),
            (
                r#"{ "indent": 2, "split": "command" }"#,
                TranslateOptions {
                    indent: 2,
                    split: SplitPolicy::Command,
                },
            ),
        ];

        for (json, expected) in test_cases {
            assert_eq!(load_options(json).unwrap(), expected, "options {json}");
        }
    }

    #[test]
    fn test_indent_bounds() {
        let mut options = TranslateOptions {
            indent: MAX_INDENT,
            ..TranslateOptions::default()
        };
        assert!(validate(&options).is_ok());

        options.indent = usize::MAX;
        let err = validate(&options).unwrap_err();
        assert!(err.to_string().contains("at most"), "got error message: {err}");
    }

    #[test]
    fn test_bad_options() {
        let test_cases = vec![
            r#"{ "indnet": 2 }"#,
            r#"{ "split": "lines" }"#,
            r#"{ "indent": 0 }"#,
            r#"{ "indent": -1 }"#,
            r#"{ "indent": 17 }"#,
            r#"{ "indent": 100000000000 }"#,
            "not json",
        ];

        for json in test_cases {
            assert!(load_options(json).is_err(), "accepted {json}");
        }
    }
}
