use anyhow::Result;
use std::path::Path;
use std::path::PathBuf;

use crate::utils::CommandError;
use crate::utils::CommandOutput;
use crate::utils::CommandSpec;

/// Everything the checker needs from the host: the file system, the
/// process environment, subprocesses and the log.
pub trait Environment: Clone + std::marker::Send + std::marker::Sync + 'static {
  fn cwd(&self) -> Result<PathBuf>;
  fn path_exists(&self, file_path: &Path) -> bool;
  fn env_var(&self, name: &str) -> Option<String>;
  /// Operating system family, in the form of `std::env::consts::OS`.
  fn os_family(&self) -> String;
  /// Runs the command to completion, capturing its output.
  ///
  /// A non-zero exit code is not an error here. Only failing to start
  /// the process is.
  async fn run_command(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError>;
  fn log(&self, text: &str);
  fn log_debug(&self, text: &str);
  fn log_warn(&self, text: &str);
  fn log_error(&self, text: &str);
  fn is_debug_enabled(&self) -> bool;
}

// use a macro here so the expression provided is only evaluated when debug output is on
macro_rules! log_debug {
  ($environment:expr, $($arg:tt)*) => {
    if $environment.is_debug_enabled() {
      $environment.log_debug(&format!($($arg)*));
    }
  }
}
