use std::collections::BTreeSet;

use crate::utils::strip_dir_prefix;

const CHECKING_PREFIX: &str = "Checking ";
const NEEDS_REFORMATTING_SUFFIX: &str = "...Needs reformatting";
const FORMATTED_WELL_SUFFIX: &str = "...Formatted well";
/// Followed by the reason, ex. `...Skipped, unsupported file type`.
const SKIPPED_MARKER: &str = "...Skipped,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileOutcome {
  Skipped,
  Formatted,
  Failed,
}

/// Files reported by the formatter, relative to the working directory.
///
/// A path is in at most one of the sets. When the formatter reports a path
/// more than once, the most severe outcome wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormatReport {
  pub formatted: BTreeSet<String>,
  pub skipped: BTreeSet<String>,
  pub failed: BTreeSet<String>,
}

impl FormatReport {
  /// Parses the progress output of `idea format`. Lines other than the
  /// `Checking ...` progress lines are ignored.
  pub fn parse(output: &str, cwd: &str) -> FormatReport {
    let mut report = FormatReport::default();
    for line in output.lines() {
      if let Some((path, outcome)) = parse_report_line(line, cwd) {
        report.record(path.to_string(), outcome);
      }
    }
    report
  }

  pub fn record(&mut self, path: String, outcome: FileOutcome) {
    match self.outcome(&path) {
      Some(existing) if existing >= outcome => return,
      Some(FileOutcome::Skipped) => {
        self.skipped.remove(&path);
      }
      Some(FileOutcome::Formatted) => {
        self.formatted.remove(&path);
      }
      Some(FileOutcome::Failed) | None => {}
    }
    match outcome {
      FileOutcome::Skipped => self.skipped.insert(path),
      FileOutcome::Formatted => self.formatted.insert(path),
      FileOutcome::Failed => self.failed.insert(path),
    };
  }

  pub fn outcome(&self, path: &str) -> Option<FileOutcome> {
    if self.failed.contains(path) {
      Some(FileOutcome::Failed)
    } else if self.formatted.contains(path) {
      Some(FileOutcome::Formatted)
    } else if self.skipped.contains(path) {
      Some(FileOutcome::Skipped)
    } else {
      None
    }
  }

  pub fn has_failures(&self) -> bool {
    !self.failed.is_empty()
  }

  pub fn file_count(&self) -> usize {
    self.formatted.len() + self.skipped.len() + self.failed.len()
  }
}

/// Parses a single progress line into the reported path and its outcome.
pub fn parse_report_line<'a>(line: &'a str, cwd: &str) -> Option<(&'a str, FileOutcome)> {
  let line = line.trim_end_matches('\r');
  let rest = line.strip_prefix(CHECKING_PREFIX)?;
  let (path, outcome) = if let Some(path) = rest.strip_suffix(NEEDS_REFORMATTING_SUFFIX) {
    (path, FileOutcome::Failed)
  } else if let Some(path) = rest.strip_suffix(FORMATTED_WELL_SUFFIX) {
    (path, FileOutcome::Formatted)
  } else {
    let index = rest.rfind(SKIPPED_MARKER)?;
    (&rest[..index], FileOutcome::Skipped)
  };
  // the formatter echoes the absolute paths it was given
  let path = strip_dir_prefix(cwd, path).unwrap_or(path);
  if path.is_empty() { None } else { Some((path, outcome)) }
}
