//! Line-oriented rendering of analysis aggregates.
//!
//! Every entry renders as a numbered Markdown-style link line for the primary
//! entity followed by indented bullets for the associated entities, then a
//! blank line.

use std::io::Write;

use crate::analysis::{ContestedIssue, StalePullRequest};
use crate::github::error::AuditError;
use crate::github::models::{Issue, RepositorySummary};

/// Title printed above the stale pull request report.
pub const STALE_REPORT_TITLE: &str = "List of open PRs whose closing issues are already all closed";

/// Title printed above the contested issue report.
pub const CONTESTED_REPORT_TITLE: &str = "List of open issues with multiple open closing PRs.";

/// Writes the stale pull request report.
///
/// # Errors
///
/// Returns [`AuditError::Io`] when the writer fails.
pub fn write_stale_report<W: Write>(
    writer: &mut W,
    repository: &RepositorySummary,
    stale: &[StalePullRequest],
) -> Result<(), AuditError> {
    write_header(writer, repository, STALE_REPORT_TITLE)?;

    for (position, entry) in stale.iter().enumerate() {
        write_entry(
            writer,
            position + 1,
            ("PR", &entry.pull_request),
            ("issue", &entry.closed_issues),
        )?;
    }

    Ok(())
}

/// Writes the contested issue report.
///
/// # Errors
///
/// Returns [`AuditError::Io`] when the writer fails.
pub fn write_contested_report<W: Write>(
    writer: &mut W,
    repository: &RepositorySummary,
    contested: &[ContestedIssue],
) -> Result<(), AuditError> {
    write_header(writer, repository, CONTESTED_REPORT_TITLE)?;

    for (position, entry) in contested.iter().enumerate() {
        write_entry(
            writer,
            position + 1,
            ("Issue", &entry.issue),
            ("PR", &entry.pull_requests),
        )?;
    }

    Ok(())
}

fn write_header<W: Write>(
    writer: &mut W,
    repository: &RepositorySummary,
    title: &str,
) -> Result<(), AuditError> {
    writeln!(writer)?;
    writeln!(writer, "Repo: {}", repository.url)?;
    writeln!(writer, "{title}")?;
    writeln!(writer)?;
    Ok(())
}

fn write_entry<W: Write>(
    writer: &mut W,
    position: usize,
    (primary_kind, primary): (&str, &Issue),
    (related_kind, related): (&str, &[Issue]),
) -> Result<(), AuditError> {
    writeln!(
        writer,
        "{position}. {primary_kind} {link} {title}",
        link = link(primary),
        title = primary.title
    )?;
    for issue in related {
        writeln!(
            writer,
            "  - {related_kind} {link} {title}",
            link = link(issue),
            title = issue.title
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

fn link(issue: &Issue) -> String {
    format!("[#{}]({})", issue.number, issue.url)
}
