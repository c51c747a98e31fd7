use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Resolves `.` and `..` components without touching the file system.
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut result = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        // never pop past the root or a prefix
        if matches!(result.components().next_back(), Some(Component::Normal(_))) {
          result.pop();
        } else if !result.has_root() {
          result.push(component);
        }
      }
      _ => result.push(component),
    }
  }
  result
}

/// Removes the directory and the separator following it from the start of
/// `path`, returning `None` when the path is not inside the directory.
pub fn strip_dir_prefix<'a>(dir: &str, path: &'a str) -> Option<&'a str> {
  let dir = dir.trim_end_matches(['/', '\\']);
  let remainder = path.strip_prefix(dir)?;
  remainder.strip_prefix('/').or_else(|| remainder.strip_prefix('\\'))
}
