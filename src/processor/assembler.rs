//! Walks the program top to bottom and puts the Python output together.

use log::debug;

use super::lexer::SourceLines;
use super::lower::Lowerer;
use super::registry::Registry;
use super::scanner;
use crate::error::TranslateError;
use crate::model::{TranslateOptions, Translation};

pub const PROLOGUE: &str = "import turtle";
pub const EPILOGUE: &str = "turtle.done()";

/// Translates a whole program. Every call gets its own registry.
pub fn assemble(src: &str, options: &TranslateOptions) -> Result<Translation, TranslateError> {
    let lines = SourceLines::new(src);
    let mut registry = Registry::new();
    let mut out = vec![PROLOGUE.to_string()];
    let mut procedures = Vec::new();

    let mut idx = 0;
    while let Some(line) = lines.get(idx) {
        if !scanner::is_header(line.text) {
            out.extend(Lowerer::new(&registry, options).lower_line(line.text, 0));
            idx += 1;
            continue;
        }

        let scanned = scanner::scan_procedure(&lines, idx)?;
        idx = scanned.next;

        // Registered before its body is lowered so recursive calls resolve.
        let proc = registry
            .define(&scanned.name, scanned.params, scanned.body)
            .clone();
        debug!(
            "line {}: defined `{}` ({} params)",
            line.number,
            proc.name,
            proc.params.len()
        );

        out.push(String::new());
        out.push(format!("def {}({}):", proc.name, proc.params.join(", ")));
        out.extend(Lowerer::new(&registry, options).lower_body(&proc.body, 1));
        procedures.push(proc.name);
    }

    out.push(EPILOGUE.to_string());
    debug!(
        "translated {} lines into {} ({} procedures)",
        lines.len(),
        out.len(),
        procedures.len()
    );

    Ok(Translation {
        lines: out,
        procedures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SplitPolicy;

    const SQUARE: &str = "to square :size\n  repeat 4 [fd :size rt 90]\nend\n\nsquare 100\n";

    fn translate(src: &str, split: SplitPolicy) -> Vec<String> {
        let options = TranslateOptions {
            split,
            ..TranslateOptions::default()
        };
        assemble(src, &options).expect("translation ok").lines
    }

    #[test]
    fn test_comments_only() {
        let test_cases = vec!["", "\n\n", "; nothing here\n   ; still nothing\n\n"];
        for src in test_cases {
            assert_eq!(
                translate(src, SplitPolicy::Command),
                vec![PROLOGUE, EPILOGUE],
                "source {src:?}"
            );
        }
    }

    #[test]
    fn test_square_by_command() {
        assert_eq!(
            translate(SQUARE, SplitPolicy::Command),
            vec![
                "import turtle",
                "",
                "def square(size):",
                "    for _ in range(int(4)):",
                "        turtle.forward(size)",
                "        turtle.right(90)",
                "square(100)",
                "turtle.done()",
            ]
        );
    }

    #[test]
    fn test_square_by_token() {
        assert_eq!(
            translate(SQUARE, SplitPolicy::Token),
            vec![
                "import turtle",
                "",
                "def square(size):",
                "    for _ in range(int(4)):",
                "        turtle.forward()",
                "        # Unknown: :size",
                "        turtle.right()",
                "        # Unknown: 90",
                "square(100)",
                "turtle.done()",
            ]
        );
    }

    #[test]
    fn test_unknown_does_not_abort() {
        assert_eq!(
            translate("foo 1 2\nfd 10", SplitPolicy::Command),
            vec![PROLOGUE, "# Unknown: foo 1 2", "turtle.forward(10)", EPILOGUE]
        );
    }

    #[test]
    fn test_call_before_definition_is_unknown() {
        let out = translate("star 5\nto star :n\nfd :n\nend\nstar 6", SplitPolicy::Command);
        assert_eq!(
            out,
            vec![
                PROLOGUE,
                "# Unknown: star 5",
                "",
                "def star(n):",
                "    turtle.forward(n)",
                "star(6)",
                EPILOGUE,
            ]
        );
    }

    #[test]
    fn test_redefinition_last_wins() {
        let src = "to tri :a\nfd :a\nend\nto tri :a :b\nfd :b\nend\nrepeat 2 [tri 1 2]";
        let options = TranslateOptions::default();
        let translation = assemble(src, &options).unwrap();

        assert_eq!(translation.procedures, vec!["tri", "tri"]);
        assert_eq!(
            &translation.lines[translation.lines.len() - 3..],
            &["for _ in range(int(2)):", "    tri(1, 2)", EPILOGUE]
        );
    }

    #[test]
    fn test_recursive_and_empty_procedures() {
        let src = "to spiral :n\nfd :n\nrt 90\nspiral :n\nend\nto nothing\nend";
        assert_eq!(
            translate(src, SplitPolicy::Command),
            vec![
                PROLOGUE,
                "",
                "def spiral(n):",
                "    turtle.forward(n)",
                "    turtle.right(90)",
                "    spiral(n)",
                "",
                "def nothing():",
                "    pass",
                EPILOGUE,
            ]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let upper = translate("FD 50\nTO Box\nPU\nEND\nbox", SplitPolicy::Command);
        let lower = translate("fd 50\nto box\npu\nend\nBOX", SplitPolicy::Command);
        assert_eq!(upper, lower);
        assert_eq!(upper[1], "turtle.forward(50)");
        assert_eq!(upper[5], "box()");
    }

    #[test]
    fn test_unterminated_definition() {
        let err = assemble("fd 10\nto square :size\nfd :size\n", &TranslateOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::MissingTerminator {
                name: "square".into(),
                line: 2,
            }
        );
    }
}
