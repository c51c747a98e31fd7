use crate::settings::SettingsRef;

/// Flags passed to `idea format`: dry run, recursive, all file masks and
/// either the explicit settings file or permission to use the defaults.
pub fn build_formatter_flags(settings: &SettingsRef) -> Vec<String> {
  let mut flags = vec!["-d".to_string(), "-r".to_string(), "-m".to_string(), "*".to_string()];
  match settings {
    SettingsRef::File(path) => {
      flags.push("-s".to_string());
      flags.push(path.to_string_lossy().into_owned());
    }
    SettingsRef::Defaults => flags.push("-allowDefaults".to_string()),
  }
  flags
}
