#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

#[macro_use]
mod environment;

use environment::Environment;
use environment::RealEnvironment;
use environment::RealEnvironmentOptions;
use run_cli::AppError;
use utils::LogStyle;

mod arg_parser;
mod files;
mod formatter;
mod platform;
mod run_cli;
mod settings;
mod utils;

#[cfg(test)]
mod test_helpers;

fn main() {
  let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
    Ok(rt) => rt,
    Err(err) => {
      print_stderr(&format!("Could not start the async runtime: {:#}", err));
      std::process::exit(14);
    }
  };
  let exit_code = rt.block_on(run());
  std::process::exit(exit_code);
}

async fn run() -> i32 {
  let args = match arg_parser::parse_args(std::env::args().collect()) {
    Ok(args) => args,
    Err(err) => {
      // nothing is known about the log style yet
      let err = AppError::from(err);
      print_stderr(&format!("{:#}", err.inner));
      return err.exit_code;
    }
  };

  let environment = RealEnvironment::new(RealEnvironmentOptions {
    is_verbose: args.verbose,
    log_style: LogStyle::from_github_actions_var(std::env::var("GITHUB_ACTIONS").ok().as_deref()),
  });
  match run_cli::run_cli(&args, &environment).await {
    Ok(()) => 0,
    Err(err) => {
      environment.log_error(&format!("{:#}", err.inner));
      err.exit_code
    }
  }
}

#[allow(clippy::print_stderr)]
fn print_stderr(text: &str) {
  eprintln!("{}", text);
}
