use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error("Config not found: {0}")]
    ConfigNotFound(String),
    #[error("Invalid repository path: {0}")]
    InvalidRepo(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("figment: {0}")]
    Figment(#[from] figment::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Project root directory
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

/// Effective `uid:gid` of the invoking user, as handed to docker-compose.
#[cfg(unix)]
pub fn current_user() -> String {
    // SAFETY: geteuid/getegid have no preconditions and cannot fail.
    let (uid, gid) = unsafe { (libc::geteuid(), libc::getegid()) };
    format!("{}:{}", uid, gid)
}

#[cfg(not(unix))]
pub fn current_user() -> String {
    String::from("0:0")
}

/// Render a path with forward slashes regardless of host platform.
pub fn posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_rewrites_backslashes() {
        assert_eq!(posix(Path::new(r"C:\dev\repo")), "C:/dev/repo");
        assert_eq!(posix(Path::new("/home/dev/repo")), "/home/dev/repo");
    }

    #[test]
    fn current_user_is_uid_gid_pair() {
        let user = current_user();
        let (uid, gid) = user.split_once(':').unwrap();
        assert!(uid.parse::<u32>().is_ok());
        assert!(gid.parse::<u32>().is_ok());
    }

    #[test]
    fn project_root_contains_manifest() {
        assert!(project_root().join("Cargo.toml").exists());
    }
}
