use std::path::Path;

use super::FormatReport;
use crate::environment::Environment;
use crate::utils::CommandError;
use crate::utils::CommandSpec;

pub fn build_format_command(executable: &str, flags: &[String], cwd: &Path, files: &[String]) -> CommandSpec {
  let mut args = Vec::with_capacity(1 + flags.len() + files.len());
  args.push("format".to_string());
  args.extend(flags.iter().cloned());
  args.extend(files.iter().map(|file| cwd.join(file).to_string_lossy().into_owned()));
  CommandSpec::new(executable, args)
}

/// Runs the formatter once over the files and parses its report.
///
/// The exit code is disregarded because the formatter exits non-zero
/// whenever a file needs reformatting. Only failing to start it is an error.
pub async fn run_formatter(
  environment: &impl Environment,
  executable: &str,
  flags: &[String],
  cwd: &Path,
  files: &[String],
) -> Result<FormatReport, CommandError> {
  let command = build_format_command(executable, flags, cwd, files);
  let output = environment.run_command(&command).await?;
  if !output.stdout.is_empty() {
    log_debug!(environment, "{}", output.stdout.trim_end());
  }
  if !output.stderr.trim().is_empty() {
    log_debug!(environment, "{}", output.stderr.trim_end());
  }
  if !output.success() {
    log_debug!(environment, "{} exited with code {}.", executable, output.exit_code_text());
  }
  Ok(FormatReport::parse(&output.stdout, &cwd.to_string_lossy()))
}
