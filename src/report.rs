//! Plain-text report of found equations.
//!
//! ```text
//! 1. TOO + TOO = FOUR
//!    F = 1
//!    O = 7
//!    R = 4
//!    T = 8
//!    U = 5
//!
//! ```
//!
//! One numbered line per equation, one indented `LETTER = digit` line per letter in
//! alphabetical order, then a blank line.

use crate::sampler::Found;
use std::io::{self, Write};

/// Write `found` to `out` in report format.
///
/// # Errors
///
/// Any I/O error from `out`.
pub fn write_report<W: Write>(out: &mut W, found: &[Found]) -> io::Result<()> {
    for (idx, f) in found.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, f.expression)?;
        for (letter, digit) in f.assignment.iter() {
            writeln!(out, "   {letter} = {digit}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// The report as a `String`.
#[must_use]
pub fn report_to_string(found: &[Found]) -> String {
    let mut buf = Vec::new();
    // NB: writing to a Vec never fails
    let _ = write_report(&mut buf, found);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the report to a file, replacing it if it exists.
///
/// # Errors
///
/// If the file cannot be created or written.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_to_path<P: AsRef<std::path::Path>>(path: P, found: &[Found]) -> io::Result<()> {
    let path_ref = path.as_ref();
    let file = std::fs::File::create(path_ref).map_err(|e| {
        io::Error::new(e.kind(), format!("failed to create report '{}': {}", path_ref.display(), e))
    })?;
    let mut out = io::BufWriter::new(file);
    write_report(&mut out, found)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Assignment;

    fn too_too_four() -> Found {
        Found {
            expression: "TOO + TOO = FOUR".to_string(),
            assignment: [('T', 8), ('O', 7), ('F', 1), ('U', 5), ('R', 4)].into_iter().collect(),
        }
    }

    #[test]
    fn test_single_entry_layout() {
        let text = report_to_string(&[too_too_four()]);
        assert_eq!(
            text,
            "1. TOO + TOO = FOUR\n   F = 1\n   O = 7\n   R = 4\n   T = 8\n   U = 5\n\n"
        );
    }

    #[test]
    fn test_entries_are_numbered_and_separated() {
        let second = Found {
            expression: "A + A = B".to_string(),
            assignment: [('A', 1), ('B', 2)].into_iter().collect::<Assignment>(),
        };
        let text = report_to_string(&[too_too_four(), second]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "1. TOO + TOO = FOUR");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "2. A + A = B");
        assert_eq!(lines[8], "   A = 1");
        assert_eq!(lines[9], "   B = 2");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(report_to_string(&[]), "");
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let err = save_to_path("/definitely/not/here/report.txt", &[too_too_four()]).unwrap_err();
        assert!(err.to_string().contains("failed to create report"));
    }
}
