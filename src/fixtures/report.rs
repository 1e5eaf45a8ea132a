//! Status lines printed after a build.
use crate::fixtures::error::FixtureError;
use crate::fixtures::model::{FixtureSpec, ReportStyle};
use std::error::Error as StdError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write the status lines for a build outcome.
///
/// Successes follow the fixture's [`ReportStyle`]; failures always print an
/// `[ERROR]` line, followed by the error's source chain.
pub fn report<W: Write>(
    fixture: &FixtureSpec,
    outcome: &Result<PathBuf, FixtureError>,
    out: &mut W,
) -> io::Result<()> {
    match outcome {
        Ok(path) => report_success(fixture, path, out),
        Err(FixtureError::MissingDependency { hint }) => {
            writeln!(out, "[ERROR] Need to install the pptx writer")?;
            writeln!(out, "   Run: {}", hint)
        },
        Err(err) => report_failure(err, out),
    }
}

fn report_success<W: Write>(fixture: &FixtureSpec, path: &Path, out: &mut W) -> io::Result<()> {
    match fixture.report_style {
        ReportStyle::Detailed => {
            writeln!(
                out,
                "[OK] Successfully created test PPTX file: {}",
                path.display()
            )?;
            writeln!(out, "   Slide count: {}", fixture.slide_count())?;
            writeln!(
                out,
                "   File size: ~{} slides with basic elements",
                fixture.slide_count()
            )
        },
        ReportStyle::Brief => {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            writeln!(out, "{} created successfully", name)
        },
    }
}

fn report_failure<W: Write>(err: &FixtureError, out: &mut W) -> io::Result<()> {
    let message = err.to_string();
    writeln!(out, "[ERROR] Failed to create file: {}", message)?;

    // The variant displays its source, so the chain starts one level down
    let mut source = match err {
        FixtureError::Build { source, .. } => source.source(),
        _ => err.source(),
    };
    let mut shown = message;
    while let Some(cause) = source {
        let text = cause.to_string();
        if !shown.contains(&text) {
            writeln!(out, "   Caused by: {}", text)?;
            shown = text;
        }
        source = cause.source();
    }

    if let FixtureError::Build { backtrace, .. } = err {
        writeln!(out, "   Trace:")?;
        for line in backtrace.to_string().lines() {
            writeln!(out, "      {}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::fixtures::catalog;

    fn render(fixture: &FixtureSpec, outcome: &Result<PathBuf, FixtureError>) -> String {
        let mut out = Vec::new();
        report(fixture, outcome, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_detailed_success() {
        let outcome = Ok(PathBuf::from("tests/fixtures/simple.pptx"));
        assert_eq!(
            render(&catalog::conversion_test(), &outcome),
            "[OK] Successfully created test PPTX file: tests/fixtures/simple.pptx\n   Slide count: 2\n   File size: ~2 slides with basic elements\n"
        );
    }

    #[test]
    fn test_brief_success_uses_file_name() {
        let outcome = Ok(PathBuf::from("out/simple.pptx"));
        assert_eq!(
            render(&catalog::simple_zh(), &outcome),
            "simple.pptx created successfully\n"
        );
    }

    #[test]
    fn test_missing_dependency() {
        let outcome = Err(FixtureError::missing_dependency());
        assert_eq!(
            render(&catalog::simple_zh(), &outcome),
            "[ERROR] Need to install the pptx writer\n   Run: cargo install pptx-fixtures --features pptx\n"
        );
    }

    #[test]
    fn test_failure_prints_message_once_then_trace() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let outcome = Err(FixtureError::from(Error::Io(io)));
        let text = render(&catalog::conversion_test(), &outcome);

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("[ERROR] Failed to create file: IO error: no such directory")
        );
        assert_eq!(lines.next(), Some("   Trace:"));
        assert!(lines.next().is_some_and(|frame| frame.starts_with("      ")));
        assert_eq!(text.matches("no such directory").count(), 1);
        assert!(!text.contains("Caused by"));
    }

    #[derive(Debug, thiserror::Error)]
    #[error("zip writer closed")]
    struct Closed;

    #[derive(Debug, thiserror::Error)]
    #[error("cannot finish archive")]
    struct Finish(#[source] Closed);

    #[test]
    fn test_failure_prints_distinct_causes() {
        let io = std::io::Error::other(Finish(Closed));
        let outcome = Err(FixtureError::from(Error::Io(io)));
        let text = render(&catalog::simple_zh(), &outcome);

        assert!(text.starts_with(
            "[ERROR] Failed to create file: IO error: cannot finish archive\n   Caused by: zip writer closed\n   Trace:\n"
        ));
    }
}
