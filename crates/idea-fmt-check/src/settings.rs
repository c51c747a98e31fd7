use anyhow::Result;
use std::path::Path;
use std::path::PathBuf;

use crate::environment::Environment;
use crate::utils::normalize_path;

pub const DEFAULT_SETTINGS_PATH: &str = ".idea/codeStyles/Project.xml";

/// The code style the formatter should check against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRef {
  /// Absolute path to an existing settings file.
  File(PathBuf),
  /// Let the formatter fall back to its default code style.
  Defaults,
}

/// Resolves the requested settings file against the working directory.
///
/// A missing file is not an error. It is reported as a warning and the
/// formatter's defaults are used instead.
pub fn resolve_settings(requested: Option<&str>, environment: &impl Environment) -> Result<SettingsRef> {
  let requested = requested.map(str::trim).filter(|path| !path.is_empty()).unwrap_or(DEFAULT_SETTINGS_PATH);
  let settings_path = normalize_path(&environment.cwd()?.join(Path::new(requested)));
  if !environment.path_exists(&settings_path) {
    environment.log_warn(&format!("Settings '{}' was not found, allowing defaults!", settings_path.display()));
    return Ok(SettingsRef::Defaults);
  }
  log_debug!(environment, "Using settings: {}", settings_path.display());
  Ok(SettingsRef::File(settings_path))
}
