use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
  pub program: String,
  pub args: Vec<String>,
  /// Directory to run in. The current directory of the process when `None`.
  pub cwd: Option<PathBuf>,
}

impl CommandSpec {
  pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
    CommandSpec {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
      cwd: None,
    }
  }

  pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
    self.cwd = Some(cwd.into());
    self
  }
}

impl fmt::Display for CommandSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", quote_arg(&self.program))?;
    for arg in &self.args {
      write!(f, " {}", quote_arg(arg))?;
    }
    Ok(())
  }
}

fn quote_arg(arg: &str) -> String {
  if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
    format!("\"{}\"", arg.replace('"', "\\\""))
  } else {
    arg.to_string()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
  pub stdout: String,
  pub stderr: String,
  /// `None` when the process was terminated by a signal.
  pub exit_code: Option<i32>,
}

impl CommandOutput {
  pub fn success(&self) -> bool {
    self.exit_code == Some(0)
  }

  pub fn exit_code_text(&self) -> String {
    match self.exit_code {
      Some(code) => code.to_string(),
      None => "none".to_string(),
    }
  }
}

#[derive(Debug, Error)]
pub enum CommandError {
  #[error("Failed to start '{program}'")]
  Launch {
    program: String,
    #[source]
    source: std::io::Error,
  },
}
