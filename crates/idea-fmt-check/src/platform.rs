use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
  #[error("Unsupported os '{0}'. The formatter can only be run on Linux, macOS or Windows.")]
  Unsupported(String),
}

/// Gets the suffix of the platform specific formatter launcher.
pub fn formatter_executable_suffix(os_family: &str) -> Result<&'static str, PlatformError> {
  match os_family {
    "linux" => Ok(".sh"),
    "macos" => Ok(""),
    "windows" => Ok(".exe"),
    _ => Err(PlatformError::Unsupported(os_family.to_string())),
  }
}

pub fn formatter_executable_name(base_name: &str, os_family: &str) -> Result<String, PlatformError> {
  let suffix = formatter_executable_suffix(os_family)?;
  Ok(format!("{}{}", base_name, suffix))
}
