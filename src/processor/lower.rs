//! Lowers typed commands into indented Python statements.

use log::trace;

use super::ast::Command;
use super::command_parser::CommandParser;
use super::registry::Registry;
use crate::model::TranslateOptions;

pub const UNKNOWN_PREFIX: &str = "# Unknown: ";

pub struct Lowerer<'r> {
    parser: CommandParser<'r>,
    unit: String,
}

impl<'r> Lowerer<'r> {
    pub fn new(registry: &'r Registry, options: &TranslateOptions) -> Self {
        Self {
            parser: CommandParser::new(registry, options.split),
            unit: options.indent_unit(),
        }
    }

    /// Lowers one source line at the given nesting depth.
    pub fn lower_line(&self, line: &str, depth: usize) -> Vec<String> {
        trace!("lowering {line:?} at depth {depth}");
        self.parser
            .parse_line(line)
            .iter()
            .flat_map(|cmd| self.lower(cmd, depth))
            .collect()
    }

    /// Lowers the lines of a procedure body as one block.
    pub fn lower_body(&self, lines: &[String], depth: usize) -> Vec<String> {
        let cmds: Vec<Command> = lines
            .iter()
            .flat_map(|line| self.parser.parse_line(line))
            .collect();
        self.lower_block(&cmds, depth)
    }

    pub fn lower(&self, cmd: &Command, depth: usize) -> Vec<String> {
        let indent = self.unit.repeat(depth);
        match cmd {
            Command::Builtin { op, args } => vec![format!("{indent}{}", op.render(args))],
            Command::Call { name, args } => vec![format!("{indent}{name}({})", args.join(", "))],
            Command::Unknown { text } => vec![format!("{indent}{UNKNOWN_PREFIX}{text}")],
            Command::Repeat { count, body } => {
                let mut out = vec![format!("{indent}for _ in range(int({count})):")];
                out.extend(self.lower_block(body, depth + 1));
                out
            }
        }
    }

    /// A block that lowers to nothing but comments still needs a statement.
    fn lower_block(&self, cmds: &[Command], depth: usize) -> Vec<String> {
        let mut out: Vec<String> = cmds.iter().flat_map(|cmd| self.lower(cmd, depth)).collect();
        if !out.iter().any(|line| is_statement(line)) {
            out.push(format!("{}pass", self.unit.repeat(depth)));
        }
        out
    }
}

fn is_statement(line: &str) -> bool {
    let line = line.trim_start();
    !line.is_empty() && !line.starts_with('#')
}
