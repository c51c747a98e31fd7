use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use super::Environment;
use crate::utils::CommandError;
use crate::utils::CommandOutput;
use crate::utils::CommandSpec;

#[derive(Clone)]
enum TestCommandResult {
  Output(CommandOutput),
  LaunchFailure,
}

#[derive(Default)]
struct TestEnvironmentState {
  files: HashSet<PathBuf>,
  env_vars: HashMap<String, String>,
  command_results: HashMap<String, TestCommandResult>,
  run_commands: Vec<CommandSpec>,
  logged_messages: Vec<String>,
  logged_debug_messages: Vec<String>,
  logged_warnings: Vec<String>,
  logged_errors: Vec<String>,
}

/// In-memory environment. Commands are answered from canned results keyed
/// by the full command line, falling back to the program name.
#[derive(Clone)]
pub struct TestEnvironment {
  cwd: PathBuf,
  os_family: String,
  state: Arc<Mutex<TestEnvironmentState>>,
}

impl TestEnvironment {
  pub fn new() -> TestEnvironment {
    TestEnvironment::with_cwd("/repo")
  }

  pub fn with_cwd(cwd: impl AsRef<Path>) -> TestEnvironment {
    TestEnvironment {
      cwd: cwd.as_ref().to_path_buf(),
      os_family: "linux".to_string(),
      state: Default::default(),
    }
  }

  pub fn with_os_family(mut self, os_family: &str) -> TestEnvironment {
    self.os_family = os_family.to_string();
    self
  }

  pub fn add_file(&self, file_path: impl AsRef<Path>) {
    self.state.lock().files.insert(file_path.as_ref().to_path_buf());
  }

  pub fn set_env_var(&self, name: &str, value: &str) {
    self.state.lock().env_vars.insert(name.to_string(), value.to_string());
  }

  pub fn set_command_output(&self, key: &str, output: CommandOutput) {
    self.state.lock().command_results.insert(key.to_string(), TestCommandResult::Output(output));
  }

  pub fn set_command_stdout(&self, key: &str, stdout: &str) {
    self.set_command_output(
      key,
      CommandOutput {
        stdout: stdout.to_string(),
        stderr: String::new(),
        exit_code: Some(0),
      },
    );
  }

  pub fn set_command_launch_failure(&self, key: &str) {
    self.state.lock().command_results.insert(key.to_string(), TestCommandResult::LaunchFailure);
  }

  /// Sets up the answers of the version control queries.
  pub fn set_git_files(&self, tracked: &[&str], untracked: &[&str]) {
    let to_stdout = |paths: &[&str]| paths.iter().map(|p| format!("{}\0", p)).collect::<String>();
    self.set_command_stdout("git ls-files -z", &to_stdout(tracked));
    self.set_command_stdout("git ls-files -z --others --exclude-standard", &to_stdout(untracked));
  }

  pub fn take_run_commands(&self) -> Vec<CommandSpec> {
    std::mem::take(&mut self.state.lock().run_commands)
  }

  pub fn take_logged_messages(&self) -> Vec<String> {
    std::mem::take(&mut self.state.lock().logged_messages)
  }

  pub fn take_logged_debug_messages(&self) -> Vec<String> {
    std::mem::take(&mut self.state.lock().logged_debug_messages)
  }

  pub fn take_logged_warnings(&self) -> Vec<String> {
    std::mem::take(&mut self.state.lock().logged_warnings)
  }

  pub fn take_logged_errors(&self) -> Vec<String> {
    std::mem::take(&mut self.state.lock().logged_errors)
  }

  pub fn run_in_runtime<T>(&self, future: impl std::future::Future<Output = T>) -> T {
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    rt.block_on(future)
  }
}

impl Environment for TestEnvironment {
  fn cwd(&self) -> Result<PathBuf> {
    Ok(self.cwd.clone())
  }

  fn path_exists(&self, file_path: &Path) -> bool {
    self.state.lock().files.contains(file_path)
  }

  fn env_var(&self, name: &str) -> Option<String> {
    self.state.lock().env_vars.get(name).cloned()
  }

  fn os_family(&self) -> String {
    self.os_family.clone()
  }

  async fn run_command(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError> {
    let mut state = self.state.lock();
    state.run_commands.push(command.clone());
    let result = state
      .command_results
      .get(&command.to_string())
      .or_else(|| state.command_results.get(&command.program))
      .cloned();
    match result {
      Some(TestCommandResult::Output(output)) => Ok(output),
      Some(TestCommandResult::LaunchFailure) | None => Err(CommandError::Launch {
        program: command.program.clone(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
      }),
    }
  }

  fn log(&self, text: &str) {
    self.state.lock().logged_messages.push(text.to_string());
  }

  fn log_debug(&self, text: &str) {
    self.state.lock().logged_debug_messages.push(text.to_string());
  }

  fn log_warn(&self, text: &str) {
    self.state.lock().logged_warnings.push(text.to_string());
  }

  fn log_error(&self, text: &str) {
    self.state.lock().logged_errors.push(text.to_string());
  }

  fn is_debug_enabled(&self) -> bool {
    true
  }
}
