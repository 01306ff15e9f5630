//! Finding report formatting.

use std::fmt::Write;

use conllulex_validate::Findings;

/// Numbered findings followed by a summary line.
pub fn format_report(findings: &Findings, written: bool) -> String {
    let mut out = String::new();
    for (i, finding) in findings.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, finding);
    }
    let errors = findings.errors().count();
    let warnings = findings.warnings().count();
    let _ = write!(
        out,
        "Finished with {} error{} and {} warning{}.",
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    );
    if !written {
        out.push_str(" No output has been written.");
    }
    out.push('\n');
    out
}
