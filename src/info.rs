//! The per-invocation record every command builder reads.

use crate::commands::Subcommand;
use crate::config::Settings;
use crate::utils::{TaskError, TaskResult, posix};
use std::path::Path;

/// Name and host path of the repository the commands operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub name: String,
    pub path: String,
}

impl Repo {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Repo {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Derive the repository name from the last component of `path`.
    pub fn from_path(path: &Path) -> TaskResult<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TaskError::InvalidRepo(path.display().to_string()))?;
        Ok(Repo::new(name, posix(path)))
    }
}

#[derive(Debug, Clone)]
pub struct Info {
    pub mode: Subcommand,
    pub args: Vec<String>,
    pub compose_path: String,
    /// `uid:gid` handed to docker-compose as `CURRENT_USER`.
    pub user: String,
    pub repo: Repo,
    pub settings: Settings,
}

impl Info {
    pub fn new(
        mode: Subcommand,
        args: Vec<String>,
        repo: Repo,
        user: String,
        settings: Settings,
    ) -> Self {
        let compose_path = if settings.compose_file.starts_with('/') {
            settings.compose_file.clone()
        } else {
            format!("{}/{}", repo.path, settings.compose_file)
        };
        Info {
            mode,
            args,
            compose_path,
            user,
            repo,
            settings,
        }
    }

    /// Directory holding the compose file; compose commands run from here.
    pub fn compose_dir(&self) -> &str {
        match self.compose_path.rsplit_once('/') {
            Some(("", _)) => "/",
            Some((dir, _)) => dir,
            None => &self.repo.path,
        }
    }

    /// Repository mount point inside the container.
    pub fn container_repo(&self) -> String {
        format!("{}/{}", self.settings.container_root, self.repo.name)
    }

    /// Package staging directory inside the container.
    pub fn staging_dir(&self) -> String {
        format!("{}/{}", self.settings.staging_root, self.repo.name)
    }

    /// Passthrough arguments joined back into one string.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}

/// Split a passthrough string into arguments on runs of spaces.
pub fn split_args(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split_whitespace().map(String::from).collect())
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn split_args_collapses_spaces() {
        assert_eq!(split_args(Some("--foo   bar")), vec!["--foo", "bar"]);
        assert_eq!(split_args(Some("  -x ")), vec!["-x"]);
        assert!(split_args(Some("")).is_empty());
        assert!(split_args(None).is_empty());
    }

    #[test]
    fn repo_name_is_last_component() {
        let repo = Repo::from_path(&PathBuf::from("/home/dev/docker_pyopenvdb")).unwrap();
        assert_eq!(repo.name, "docker_pyopenvdb");
        assert_eq!(repo.path, "/home/dev/docker_pyopenvdb");
    }

    #[test]
    fn repo_without_name_is_rejected() {
        assert!(matches!(
            Repo::from_path(Path::new("/")),
            Err(TaskError::InvalidRepo(_))
        ));
    }

    #[test]
    fn derived_paths() {
        let info = fixture::info(Subcommand::Start);
        assert_eq!(
            info.compose_path,
            "/home/dev/docker_pyopenvdb/docker/docker-compose.yml"
        );
        assert_eq!(info.compose_dir(), "/home/dev/docker_pyopenvdb/docker");
        assert_eq!(info.container_repo(), "/root/docker_pyopenvdb");
        assert_eq!(info.staging_dir(), "/tmp/docker_pyopenvdb");
    }

    #[test]
    fn absolute_compose_file_is_kept() {
        let mut settings = Settings::default();
        settings.compose_file = String::from("/srv/compose/vdb.yml");
        let info = Info::new(
            Subcommand::Stop,
            Vec::new(),
            Repo::new("docker_pyopenvdb", "/home/dev/docker_pyopenvdb"),
            String::from("0:0"),
            settings,
        );
        assert_eq!(info.compose_path, "/srv/compose/vdb.yml");
        assert_eq!(info.compose_dir(), "/srv/compose");
    }

    #[test]
    fn compose_file_at_filesystem_root() {
        let mut settings = Settings::default();
        settings.compose_file = String::from("/compose.yml");
        let info = Info::new(
            Subcommand::Start,
            Vec::new(),
            Repo::new("docker_pyopenvdb", "/home/dev/docker_pyopenvdb"),
            String::from("0:0"),
            settings,
        );
        assert_eq!(info.compose_dir(), "/");
        assert!(crate::commands::start(&info).starts_with("CWD=`pwd`; cd /; "));
    }
}
