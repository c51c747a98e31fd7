use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

use crate::environment::Environment;
use crate::utils::CommandError;
use crate::utils::CommandSpec;

/// Paths that are never handed to the formatter: VCS, IDE and Gradle
/// metadata at the root, the Gradle wrapper scripts, generated output under
/// any `build` directory and `bin/main` or `bin/test` output anywhere.
pub const DEFAULT_IGNORE_PATTERN_TEXT: &str = concat!(
  r"^(?:\.git|\.idea|\.gradle|gradle)[/\\]",
  r"|^gradlew(?:\.bat)?$",
  r"|(?:^|[/\\])build[/\\](?:classes|resources|kotlin|jacoco|test-results|tmp|reports)(?:[/\\]|$)",
  r"|(?:^|[/\\])bin[/\\](?:main|test)(?:[/\\]|$)",
);

static DEFAULT_IGNORE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_IGNORE_PATTERN_TEXT).unwrap());

pub fn default_ignore_pattern() -> &'static Regex {
  &DEFAULT_IGNORE_PATTERN
}

/// Candidate files of the repository, relative to its root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepositoryFiles {
  pub included: Vec<String>,
  pub ignored: Vec<String>,
}

#[derive(Debug, Error)]
pub enum EnumerateError {
  #[error(transparent)]
  Command(#[from] CommandError),
  #[error("Listing repository files with `{command}` failed (exit code {exit_code}).{stderr}")]
  QueryFailed { command: String, exit_code: String, stderr: String },
}

// -z prints paths verbatim and NUL terminated, never C-quoted
fn untracked_files_command(repo_dir: &Path) -> CommandSpec {
  CommandSpec::new("git", ["ls-files", "-z", "--others", "--exclude-standard"]).with_cwd(repo_dir)
}

fn tracked_files_command(repo_dir: &Path) -> CommandSpec {
  CommandSpec::new("git", ["ls-files", "-z"]).with_cwd(repo_dir)
}

/// Lists the untracked but not ignored files along with all tracked files
/// of the repository at `repo_dir` and partitions them with the ignore pattern.
pub async fn list_repository_files(environment: &impl Environment, repo_dir: &Path, ignore_pattern: &Regex) -> Result<RepositoryFiles, EnumerateError> {
  let mut candidates = BTreeSet::new();
  for command in [untracked_files_command(repo_dir), tracked_files_command(repo_dir)] {
    let stdout = run_query(environment, &command).await?;
    candidates.extend(split_nul_terminated(&stdout).map(ToOwned::to_owned));
  }
  log_debug!(environment, "Found {} candidate files.", candidates.len());
  Ok(partition_files(candidates, ignore_pattern))
}

async fn run_query(environment: &impl Environment, command: &CommandSpec) -> Result<String, EnumerateError> {
  let output = environment.run_command(command).await?;
  if !output.success() {
    let stderr = output.stderr.trim();
    return Err(EnumerateError::QueryFailed {
      command: command.to_string(),
      exit_code: output.exit_code_text(),
      stderr: if stderr.is_empty() { String::new() } else { format!("\n{}", stderr) },
    });
  }
  Ok(output.stdout)
}

fn split_nul_terminated(text: &str) -> impl Iterator<Item = &str> {
  text.split('\0').filter(|path| !path.is_empty())
}

pub fn partition_files(paths: impl IntoIterator<Item = String>, ignore_pattern: &Regex) -> RepositoryFiles {
  let (ignored, included) = paths.into_iter().partition(|path| ignore_pattern.is_match(path));
  RepositoryFiles { included, ignored }
}
