use crate::commands::{self, Subcommand};
use crate::config::Settings;
use crate::info::{Info, Repo, split_args};
use crate::utils::{TaskResult, current_user, project_root};
use clap::Parser;
use std::path::PathBuf;

/// Prints docker commands for developing and publishing pyopenvdb.
///
/// The command is printed rather than run so that the calling shell keeps
/// interactive sessions and live output:
///
///     eval "$(vdbctl start)"
#[derive(Parser, Debug)]
#[command(name = "vdbctl", author, version)]
pub struct Cli {
    /// Command to resolve
    #[arg(value_enum)]
    pub command: Subcommand,

    /// Additional arguments to be passed. Be sure to include hyphen prefixes.
    #[arg(short, long, value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Repository root [default: this crate's directory]
    #[arg(long, value_name = "DIR", env = "VDBCTL_REPO")]
    pub repo: Option<PathBuf>,

    /// Settings file [default: <repo>/vdbctl.toml]
    #[arg(long, value_name = "FILE", env = "VDBCTL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Gather everything the builders need into one [`Info`].
    pub fn info(&self) -> TaskResult<Info> {
        let repo_path = match &self.repo {
            Some(path) => std::path::absolute(path)?,
            None => project_root(),
        };
        let repo = Repo::from_path(&repo_path)?;
        let settings = Settings::load(&repo_path, self.config.as_deref())?;
        let args = split_args(self.args.as_deref());

        debug!("==> Resolving {}", self.command.name());
        debug!("    Repo: {} ({})", repo.name, repo.path);
        debug!("    Args: {:?}", args);
        if !args.is_empty() && !self.command.takes_args() {
            warn!("{} ignores --args", self.command.name());
        }

        Ok(Info::new(self.command, args, repo, current_user(), settings))
    }

    pub fn run(&self) -> TaskResult<String> {
        let info = self.info()?;
        Ok(commands::resolve(&info))
    }
}
