//! Write the translated Python program to a file or stdout.

use crate::model::Translation;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes to `out`, or to stdout when no path is given. `source` names the
/// input in the generated-file banner.
pub fn emit(translation: &Translation, out: Option<&Path>, source: Option<&str>) -> io::Result<()> {
    match out {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            write_banner(&mut w, source)?;
            write_program(&mut w, translation)?;
            w.flush()
        }
        None => write_program(&mut io::stdout().lock(), translation),
    }
}

fn write_banner<W: Write>(w: &mut W, source: Option<&str>) -> io::Result<()> {
    match source {
        Some(name) => writeln!(w, "# Auto-generated from {name}, do not edit"),
        None => writeln!(w, "# Auto-generated, do not edit"),
    }
}

pub fn write_program<W: Write>(w: &mut W, translation: &Translation) -> io::Result<()> {
    for line in &translation.lines {
        writeln!(w, "{line}")?;
    }
    Ok(())
}
