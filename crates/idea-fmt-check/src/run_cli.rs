use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

use crate::arg_parser::CliArgs;
use crate::arg_parser::ParseArgsError;
use crate::arg_parser::SubCommand;
use crate::environment::Environment;
use crate::files::EnumerateError;
use crate::files::default_ignore_pattern;
use crate::files::list_repository_files;
use crate::formatter::FormatReport;
use crate::formatter::build_formatter_flags;
use crate::formatter::run_formatter;
use crate::platform::PlatformError;
use crate::platform::formatter_executable_name;
use crate::settings::SettingsRef;
use crate::settings::resolve_settings;
use crate::utils::CommandError;

const DEFAULT_FORMATTER_NAME: &str = "idea";
const SETTINGS_INPUT_VAR: &str = "INPUT_SETTINGS";
const FORMATTER_INPUT_VAR: &str = "INPUT_FORMATTER";

#[derive(Debug, Error)]
#[error("{inner:#}")]
pub struct AppError {
  pub inner: anyhow::Error,
  pub exit_code: i32,
}

impl AppError {
  fn new(inner: impl Into<anyhow::Error>, exit_code: i32) -> Self {
    AppError {
      inner: inner.into(),
      exit_code,
    }
  }
}

#[derive(Debug, Error)]
#[error("Some files are not formatted!")]
pub struct NotFormattedError;

impl From<NotFormattedError> for AppError {
  fn from(err: NotFormattedError) -> Self {
    AppError::new(err, 1)
  }
}

impl From<ParseArgsError> for AppError {
  fn from(err: ParseArgsError) -> Self {
    AppError::new(err, 10)
  }
}

impl From<PlatformError> for AppError {
  fn from(err: PlatformError) -> Self {
    AppError::new(err, 11)
  }
}

impl From<CommandError> for AppError {
  fn from(err: CommandError) -> Self {
    AppError::new(err, 12)
  }
}

impl From<EnumerateError> for AppError {
  fn from(err: EnumerateError) -> Self {
    // failing to start git is still failing to list the files
    AppError::new(err, 13)
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::new(err, 14)
  }
}

pub async fn run_cli<TEnvironment: Environment>(args: &CliArgs, environment: &TEnvironment) -> Result<(), AppError> {
  match &args.sub_command {
    SubCommand::Help(text) => {
      environment.log(text);
      Ok(())
    }
    SubCommand::Version => {
      environment.log(&format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
      Ok(())
    }
    SubCommand::Check => check_repository(args, environment).await,
  }
}

struct ResolvedConfig {
  cwd: PathBuf,
  settings: SettingsRef,
  executable: String,
}

fn resolve_config(args: &CliArgs, environment: &impl Environment) -> Result<ResolvedConfig, AppError> {
  let requested_settings = first_non_blank(args.settings.clone(), || environment.env_var(SETTINGS_INPUT_VAR));
  let settings = resolve_settings(requested_settings.as_deref(), environment)?;
  let formatter_name = first_non_blank(args.formatter.clone(), || environment.env_var(FORMATTER_INPUT_VAR)).unwrap_or_else(|| DEFAULT_FORMATTER_NAME.to_string());
  let executable = formatter_executable_name(&formatter_name, &environment.os_family())?;
  Ok(ResolvedConfig {
    cwd: environment.cwd()?,
    settings,
    executable,
  })
}

fn first_non_blank(value: Option<String>, fallback: impl FnOnce() -> Option<String>) -> Option<String> {
  let is_blank = |value: &String| value.trim().is_empty();
  match value {
    Some(value) if !is_blank(&value) => Some(value.trim().to_string()),
    _ => fallback().filter(|value| !is_blank(value)).map(|value| value.trim().to_string()),
  }
}

async fn check_repository<TEnvironment: Environment>(args: &CliArgs, environment: &TEnvironment) -> Result<(), AppError> {
  let config = resolve_config(args, environment)?;

  let files = list_repository_files(environment, &config.cwd, default_ignore_pattern()).await?;
  if environment.is_debug_enabled() && !files.ignored.is_empty() {
    environment.log_debug(&get_file_list_text("Ignored", &files.ignored));
  }

  let report = if files.included.is_empty() {
    environment.log("No files to check.");
    FormatReport::default()
  } else {
    let flags = build_formatter_flags(&config.settings);
    run_formatter(environment, &config.executable, &flags, &config.cwd, &files.included).await?
  };

  log_report(environment, &report);
  if report.has_failures() { Err(NotFormattedError.into()) } else { Ok(()) }
}

fn log_report(environment: &impl Environment, report: &FormatReport) {
  if environment.is_debug_enabled() {
    if !report.formatted.is_empty() {
      environment.log_debug(&get_file_list_text("Formatted well", &report.formatted));
    }
    if !report.skipped.is_empty() {
      environment.log_debug(&get_file_list_text("Skipped", &report.skipped));
    }
  }
  if !report.failed.is_empty() {
    environment.log_error(&get_file_list_text("Failed", &report.failed));
  }
  environment.log(&format!(
    "Checked {}: {} formatted well, {} skipped, {} need reformatting.",
    get_files_count_text(report.file_count()),
    report.formatted.len(),
    report.skipped.len(),
    report.failed.len(),
  ));
}

fn get_file_list_text<'a>(title: &str, paths: impl IntoIterator<Item = &'a String> + Clone) -> String {
  let count = paths.clone().into_iter().count();
  let mut text = format!("{} ({})\n", title, count);
  for path in paths {
    text.push_str("   ");
    text.push_str(path);
    text.push('\n');
  }
  text
}

fn get_files_count_text(count: usize) -> String {
  if count == 1 { "1 file".to_string() } else { format!("{} files", count) }
}
