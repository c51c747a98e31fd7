use anyhow::Result;
use clap::ArgMatches;
use clap::error::ErrorKind;
use thiserror::Error;

pub struct CliArgs {
  pub sub_command: SubCommand,
  /// Path of the code style settings file.
  pub settings: Option<String>,
  /// Base name of the formatter executable, without the platform suffix.
  pub formatter: Option<String>,
  pub verbose: bool,
}

impl CliArgs {
  fn new_with_sub_command(sub_command: SubCommand) -> CliArgs {
    CliArgs {
      sub_command,
      settings: None,
      formatter: None,
      verbose: false,
    }
  }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubCommand {
  Check,
  Version,
  Help(String),
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseArgsError(#[from] anyhow::Error);

pub fn parse_args(args: Vec<String>) -> Result<CliArgs, ParseArgsError> {
  inner_parse_args(args).map_err(ParseArgsError)
}

fn inner_parse_args(args: Vec<String>) -> Result<CliArgs> {
  let mut cli_parser = create_cli_parser();
  let matches = match cli_parser.try_get_matches_from_mut(&args) {
    Ok(matches) => matches,
    Err(err) => {
      return match err.kind() {
        ErrorKind::DisplayHelp => Ok(CliArgs::new_with_sub_command(SubCommand::Help(cli_parser.render_help().to_string()))),
        ErrorKind::DisplayVersion => Ok(CliArgs::new_with_sub_command(SubCommand::Version)),
        _ => Err(err.into()),
      };
    }
  };

  Ok(CliArgs {
    sub_command: SubCommand::Check,
    settings: get_string(&matches, "settings"),
    formatter: get_string(&matches, "formatter"),
    verbose: matches.get_flag("verbose"),
  })
}

fn get_string(matches: &ArgMatches, id: &str) -> Option<String> {
  matches.get_one::<String>(id).map(String::from)
}

pub fn create_cli_parser() -> clap::Command {
  use clap::Arg;
  use clap::ArgAction;
  use clap::Command;

  Command::new("idea-fmt-check")
    .bin_name("idea-fmt-check")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Checks that the files of a git repository are formatted according to an IntelliJ IDEA code style.")
    .after_help(
      r#"ENVIRONMENT VARIABLES:
  INPUT_SETTINGS   Settings file to use when --settings is not provided.
  INPUT_FORMATTER  Formatter base name to use when --formatter is not provided.
  GITHUB_ACTIONS   When "true", output is written as workflow commands.

EXAMPLES:
  Check the repository in the current directory:

    idea-fmt-check

  Check against a code style exported to a custom location:

    idea-fmt-check --settings config/codestyle.xml"#,
    )
    .arg(
      Arg::new("settings")
        .long("settings")
        .value_name("path")
        .help("Path to the code style settings file. Defaults to .idea/codeStyles/Project.xml and falls back to the formatter's defaults when the file doesn't exist.")
        .num_args(1)
        .required(false),
    )
    .arg(
      Arg::new("formatter")
        .long("formatter")
        .value_name("name")
        .help("Base name of the formatter executable. The platform specific suffix is appended (idea.sh on Linux, idea on macOS, idea.exe on Windows).")
        .num_args(1)
        .required(false),
    )
    .arg(
      Arg::new("verbose")
        .long("verbose")
        .help("Prints additional diagnostic information.")
        .action(ArgAction::SetTrue),
    )
}
