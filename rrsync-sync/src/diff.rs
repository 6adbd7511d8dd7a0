//! Added/removed comparison of two title lists.
//!
//! Membership-based, not positional: reordering produces no diff, and a
//! title repeated in either list is reported at most once.

use std::collections::HashSet;
use std::fmt;

/// Titles present on only one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleDiff {
    /// In `new` but not in `old`, in order of first appearance in `new`.
    pub added: Vec<String>,
    /// In `old` but not in `new`, in order of first appearance in `old`.
    pub removed: Vec<String>,
}

impl TitleDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare `old` and `new` under set membership.
pub fn compare(old: &[String], new: &[String]) -> TitleDiff {
    TitleDiff {
        added: missing_from(new, old),
        removed: missing_from(old, new),
    }
}

/// Items of `from` absent in `other`, deduplicated, first-appearance order.
fn missing_from(from: &[String], other: &[String]) -> Vec<String> {
    let other: HashSet<&str> = other.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for title in from {
        if !other.contains(title.as_str()) && seen.insert(title.as_str()) {
            out.push(title.clone());
        }
    }
    out
}

/// Human-readable summary of a [`TitleDiff`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    pub diff: TitleDiff,
}

/// Compare `old` and `new` and wrap the result for display.
pub fn report(old: &[String], new: &[String]) -> DiffReport {
    let diff = compare(old, new);
    tracing::info!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        "station diff computed"
    );
    DiffReport { diff }
}

impl DiffReport {
    pub fn has_changes(&self) -> bool {
        !self.diff.is_empty()
    }
}

impl DiffReport {
    /// The summary, one entry per printed line.
    ///
    /// `Display` writes these as plain text; the CLI styles them by kind.
    pub fn lines(&self) -> Vec<ReportLine<'_>> {
        if self.diff.is_empty() {
            return vec![ReportLine::NoChanges];
        }
        let mut lines = Vec::new();
        if !self.diff.added.is_empty() {
            lines.push(ReportLine::AddedHeading(self.diff.added.len()));
            lines.extend(self.diff.added.iter().map(|t| ReportLine::Added(t)));
        }
        if !self.diff.removed.is_empty() {
            lines.push(ReportLine::RemovedHeading(self.diff.removed.len()));
            lines.extend(self.diff.removed.iter().map(|t| ReportLine::Removed(t)));
        }
        lines
    }
}

/// One line of a [`DiffReport`] summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine<'a> {
    NoChanges,
    AddedHeading(usize),
    Added(&'a str),
    RemovedHeading(usize),
    Removed(&'a str),
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::NoChanges => write!(f, "No changes."),
            ReportLine::AddedHeading(n) => write!(f, "Added ({n}):"),
            ReportLine::Added(title) => write!(f, "  + {title}"),
            ReportLine::RemovedHeading(n) => write!(f, "Removed ({n}):"),
            ReportLine::Removed(title) => write!(f, "  - {title}"),
        }
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
