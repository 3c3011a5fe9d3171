mod commands;
mod environment;
mod error;
mod interaction;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use changeset_project::ConfigOverrides;
use clap::{ArgAction, Parser};

use crate::commands::{Commands, non_empty};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "changeset-ci")]
#[command(version = env!("CHANGESET_CI_VERSION"))]
#[command(about = "Verify, merge and release changesets in CI", long_about = None)]
struct Cli {
    /// Path to start project discovery from (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    /// Changeset directory relative to the project root (default: .changeset)
    #[arg(long, global = true, value_name = "DIR")]
    changeset_dir: Option<PathBuf>,

    /// Package name changesets must declare (default: name in package.json)
    #[arg(long = "package", global = true, value_name = "NAME")]
    package_name: Option<String>,

    /// Branch pull requests merge into, used when no base revision is given
    #[arg(long, global = true, env = "GITHUB_BASE_REF", value_name = "BRANCH")]
    base_branch: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            package_name: non_empty(self.package_name.clone()),
            changeset_dir: self.changeset_dir.clone(),
            base_branch: non_empty(self.base_branch.clone()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let start_path = match resolve_start_path(cli.path.clone()) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let overrides = cli.overrides();
    if let Err(e) = cli.command.execute(&start_path, overrides) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
