//! Rendering of lint results for the terminal and for tools.

use anyhow::Result;
use fsd_lint_core::{LintResult, Severity, Violation};
use std::fmt::Write;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result, true),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Compact => render_compact(result),
    };
    print!("{rendered}");
    if matches!(format, OutputFormat::Json) {
        println!();
    }
    Ok(())
}

fn paint(text: &str, severity: Option<Severity>, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let code = match severity {
        Some(Severity::Error) => "31",
        Some(Severity::Warning) => "33",
        Some(Severity::Info) => "34",
        None => "32",
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

/// Violations grouped under their file, then a summary line.
fn render_text(result: &LintResult, color: bool) -> String {
    let mut out = String::new();
    let files = result.files_with_violations();

    for file in &files {
        let _ = writeln!(out, "{file}");
        for v in result.violations.iter().filter(|v| v.location.file == *file) {
            let severity = paint(&v.severity.to_string(), Some(v.severity), color);
            let _ = writeln!(
                out,
                "  {}:{}  {severity}  {} {}  {}",
                v.location.line, v.location.column, v.code, v.rule, v.message
            );
            let _ = writeln!(out, "    import '{}' ({})", v.specifier, v.kind);
            if let Some(fix) = v.fix() {
                let _ = writeln!(out, "    fix: '{fix}'");
            }
        }
        let _ = writeln!(out);
    }

    let (errors, warnings, infos) = result.count_by_severity();
    let worst = if errors > 0 {
        Some(Severity::Error)
    } else if warnings > 0 {
        Some(Severity::Warning)
    } else {
        None
    };
    let summary = format!(
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} of {} file(s) \
         ({} import(s) checked, {} fixable)",
        files.len(),
        result.files_checked,
        result.imports_checked,
        result.fixes().len()
    );
    let _ = writeln!(out, "{}", paint(&summary, worst, color));
    out
}

/// One line per violation: `file:line:col: severity [CODE kind] message (fix: '..')`.
fn render_compact(result: &LintResult) -> String {
    result.violations.iter().map(compact_line).collect()
}

fn compact_line(v: &Violation) -> String {
    let mut line = format!(
        "{}:{}:{}: {} [{} {}] {}",
        v.location.file,
        v.location.line,
        v.location.column,
        v.severity,
        v.code,
        v.kind,
        v.message
    );
    if let Some(fix) = v.fix() {
        let _ = write!(line, " (fix: '{fix}')");
    }
    line.push('\n');
    line
}
