//! Layered settings for command generation.
//!
//! Values are resolved in order, later sources winning:
//! built-in defaults, `vdbctl.toml` at the repository root (or the file given
//! with `--config`), then `VDBCTL_*` environment variables.

use crate::utils::{TaskError, TaskResult};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Settings file looked up at the repository root when `--config` is absent.
pub const CONFIG_FILE: &str = "vdbctl.toml";

/// Prefix of environment variables overriding settings.
pub const ENV_PREFIX: &str = "VDBCTL_";

/// A shared object copied into the wheel's `lib/` directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharedLib {
    /// Absolute path inside the container.
    pub source: String,
    /// File name inside the staged `lib/` directory.
    pub name: String,
}

impl SharedLib {
    fn new(source: &str, name: &str) -> Self {
        SharedLib {
            source: source.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Compose file, relative to the repository root.
    #[serde(deserialize_with = "lenient_string")]
    pub compose_file: String,
    /// Directory the repository is mounted under inside the container.
    #[serde(deserialize_with = "lenient_string")]
    pub container_root: String,
    /// Directory the package is staged under inside the container.
    #[serde(deserialize_with = "lenient_string")]
    pub staging_root: String,
    /// Interpreter used for the `python` session and wheel builds.
    #[serde(deserialize_with = "lenient_string")]
    pub python: String,
    /// Wheel python tag.
    #[serde(deserialize_with = "lenient_string")]
    pub python_tag: String,
    pub shared_libs: Vec<SharedLib>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            compose_file: String::from("docker/docker-compose.yml"),
            container_root: String::from("/root"),
            staging_root: String::from("/tmp"),
            python: String::from("python3.7"),
            python_tag: String::from("cp37"),
            shared_libs: default_shared_libs(),
        }
    }
}

/// Accept scalars for string settings; `VDBCTL_PYTHON_TAG=38` arrives as a number.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        UInt(u64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

fn default_shared_libs() -> Vec<SharedLib> {
    vec![
        SharedLib::new("/usr/lib/libblosc.so.1.15.1", "libblosc.so.1"),
        SharedLib::new(
            "/root/boost_1_68_0/stage/lib/libboost_iostreams.so.1.68.0",
            "libboost_iostreams.so.1.68.0",
        ),
        SharedLib::new(
            "/root/boost_1_68_0/stage/lib/libboost_numpy37.so.1.68.0",
            "libboost_numpy37.so.1.68.0",
        ),
        SharedLib::new(
            "/root/boost_1_68_0/stage/lib/libboost_python37.so.1.68.0",
            "libboost_python37.so.1.68.0",
        ),
        SharedLib::new("/usr/lib/x86_64-linux-gnu/libHalf.so.23.0.0", "libHalf.so.23"),
        SharedLib::new(
            "/usr/lib/x86_64-linux-gnu/liblog4cplus-1.1.so.9.0.0",
            "liblog4cplus-1.1.so.9",
        ),
        SharedLib::new("/usr/lib/x86_64-linux-gnu/libm.so.6", "libm.so.6"),
        SharedLib::new("/root/openvdb/openvdb/libopenvdb.so.7.1.0", "libopenvdb.so.7.1"),
        SharedLib::new("/usr/lib/x86_64-linux-gnu/libsnappy.so.1.1.7", "libsnappy.so.1"),
        SharedLib::new("/usr/lib/x86_64-linux-gnu/libtbb.so.2", "libtbb.so.2"),
        SharedLib::new("/usr/lib/x86_64-linux-gnu/libtbbmalloc.so.2", "libtbbmalloc.so.2"),
        SharedLib::new(
            "/usr/lib/x86_64-linux-gnu/libtbbmalloc_proxy.so.2",
            "libtbbmalloc_proxy.so.2",
        ),
        SharedLib::new("/usr/lib/x86_64-linux-gnu/libzstd.so.1.3.8", "libzstd.so.1.3.8"),
        SharedLib::new("/root/openvdb/openvdb/pyopenvdb.so", "pyopenvdb.so"),
    ]
}

impl Settings {
    /// Resolve settings for the repository at `repo_path`.
    ///
    /// An explicit `config` file must exist; the implicit `vdbctl.toml` is
    /// optional.
    pub fn load(repo_path: &Path, config: Option<&Path>) -> TaskResult<Self> {
        let file = match config {
            Some(path) => {
                if !path.exists() {
                    return Err(TaskError::ConfigNotFound(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => repo_path.join(CONFIG_FILE),
        };

        Self::figment(&file).extract().map_err(TaskError::from)
    }

    fn figment(file: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if file.exists() {
            debug!("Loading settings from {}", file.display());
            figment = figment.merge(Toml::file_exact(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["repo", "config"]))
    }
}
