use parking_lot::Mutex;
use std::io::Stderr;
use std::io::Stdout;
use std::io::Write;
use std::io::stderr;
use std::io::stdout;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  Debug,
  Info,
  Warn,
  Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
  /// GitHub Actions workflow commands (`::error::message`).
  Actions,
  Plain,
}

impl LogStyle {
  /// Picks the style from the value of the `GITHUB_ACTIONS` environment variable.
  pub fn from_github_actions_var(value: Option<&str>) -> Self {
    match value {
      Some(value) if value.trim().eq_ignore_ascii_case("true") => LogStyle::Actions,
      _ => LogStyle::Plain,
    }
  }
}

#[derive(Clone)]
pub struct LoggerOptions {
  pub style: LogStyle,
  /// Whether to output debug text in the plain style.
  pub is_verbose: bool,
}

#[derive(Clone)]
pub struct Logger {
  output_lock: Arc<Mutex<LoggerState>>,
  style: LogStyle,
  is_verbose: bool,
}

struct LoggerState {
  std_out: Stdout,
  std_err: Stderr,
}

impl Logger {
  pub fn new(options: &LoggerOptions) -> Self {
    Logger {
      output_lock: Arc::new(Mutex::new(LoggerState {
        std_out: stdout(),
        std_err: stderr(),
      })),
      style: options.style,
      is_verbose: options.is_verbose,
    }
  }

  pub fn is_enabled(&self, level: LogLevel) -> bool {
    match level {
      // the runner hides debug commands unless step debugging is on
      LogLevel::Debug => self.style == LogStyle::Actions || self.is_verbose,
      LogLevel::Info | LogLevel::Warn | LogLevel::Error => true,
    }
  }

  pub fn log(&self, level: LogLevel, text: &str) {
    if !self.is_enabled(level) {
      return;
    }
    let text = render_log_text(self.style, level, text);
    let mut state = self.output_lock.lock();
    // workflow commands are only picked up from stdout
    let use_stderr = self.style == LogStyle::Plain && level >= LogLevel::Warn;
    let result = if use_stderr {
      writeln!(state.std_err, "{}", text).and_then(|_| state.std_err.flush())
    } else {
      writeln!(state.std_out, "{}", text).and_then(|_| state.std_out.flush())
    };
    // nothing sensible to do when the log output is closed
    let _ = result;
  }
}

pub fn render_log_text(style: LogStyle, level: LogLevel, text: &str) -> String {
  match style {
    LogStyle::Actions => match level {
      LogLevel::Debug => format!("::debug::{}", escape_command_data(text)),
      LogLevel::Info => text.to_string(),
      LogLevel::Warn => format!("::warning::{}", escape_command_data(text)),
      LogLevel::Error => format!("::error::{}", escape_command_data(text)),
    },
    LogStyle::Plain => match level {
      LogLevel::Debug => prefix_lines("[DEBUG]: ", text),
      LogLevel::Info => text.to_string(),
      LogLevel::Warn => format!("warning: {}", text),
      LogLevel::Error => format!("error: {}", text),
    },
  }
}

/// Escapes the message part of a workflow command so it stays on one line.
pub fn escape_command_data(text: &str) -> String {
  text.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn prefix_lines(prefix: &str, text: &str) -> String {
  text.lines().map(|line| format!("{}{}", prefix, line)).collect::<Vec<_>>().join("\n")
}
