use anyhow::Context;
use anyhow::Result;
use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;

use super::Environment;
use crate::utils::CommandError;
use crate::utils::CommandOutput;
use crate::utils::CommandSpec;
use crate::utils::LogLevel;
use crate::utils::LogStyle;
use crate::utils::Logger;
use crate::utils::LoggerOptions;

pub struct RealEnvironmentOptions {
  pub is_verbose: bool,
  pub log_style: LogStyle,
}

#[derive(Clone)]
pub struct RealEnvironment {
  logger: Logger,
}

impl RealEnvironment {
  pub fn new(options: RealEnvironmentOptions) -> RealEnvironment {
    RealEnvironment {
      logger: Logger::new(&LoggerOptions {
        style: options.log_style,
        is_verbose: options.is_verbose,
      }),
    }
  }
}

impl Environment for RealEnvironment {
  fn cwd(&self) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Could not get the current working directory.")?;
    // dunce avoids the \\?\ prefix on Windows, which the formatter would echo back
    dunce::canonicalize(&cwd).with_context(|| format!("Could not canonicalize the current working directory: {}", cwd.display()))
  }

  fn path_exists(&self, file_path: &Path) -> bool {
    log_debug!(self, "Checking path exists: {}", file_path.display());
    file_path.exists()
  }

  fn env_var(&self, name: &str) -> Option<String> {
    std::env::var(name).ok()
  }

  fn os_family(&self) -> String {
    std::env::consts::OS.to_string()
  }

  async fn run_command(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError> {
    log_debug!(self, "Running: {}", command);
    let mut process = tokio::process::Command::new(&command.program);
    if let Some(cwd) = &command.cwd {
      process.current_dir(cwd);
    }
    let output = process
      .args(&command.args)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .kill_on_drop(true)
      .output()
      .await
      .map_err(|source| CommandError::Launch {
        program: command.program.clone(),
        source,
      })?;
    Ok(CommandOutput {
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      exit_code: output.status.code(),
    })
  }

  fn log(&self, text: &str) {
    self.logger.log(LogLevel::Info, text);
  }

  fn log_debug(&self, text: &str) {
    self.logger.log(LogLevel::Debug, text);
  }

  fn log_warn(&self, text: &str) {
    self.logger.log(LogLevel::Warn, text);
  }

  fn log_error(&self, text: &str) {
    self.logger.log(LogLevel::Error, text);
  }

  fn is_debug_enabled(&self) -> bool {
    self.logger.is_enabled(LogLevel::Debug)
  }
}
