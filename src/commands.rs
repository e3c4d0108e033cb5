//! Command resolution: one builder per subcommand, each returning the shell
//! text for the caller to `eval`.

mod docker;
mod package;
mod runner;
mod service;
mod session;

use crate::info::Info;
use clap::ValueEnum;

pub use docker::{container_id, docker, docker_compose, docker_exec, image_id};
pub use package::{build, copy_libs, publish};
pub use runner::{coverage, test, tox};
pub use service::{destroy, remove_image, restart, start, stop};
pub use session::{bash, python};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    /// Run a bash session inside the container
    Bash,
    /// Build a repaired pip wheel inside the container
    Build,
    /// Display the docker container id of the service
    Container,
    /// Run pytest with an html coverage report
    Coverage,
    /// Stop the service and remove its docker image
    Destroy,
    /// Run docker with the service environment
    Docker,
    /// Display the docker image id of the service
    Image,
    /// Build and upload the wheel to the python package index
    Publish,
    /// Run a python interpreter session inside the container
    Python,
    /// Remove the service's docker image
    Remove,
    /// Restart the service
    Restart,
    /// Start the service
    Start,
    /// Stop the service
    Stop,
    /// Build the wheel and run tox against it
    Tox,
}

impl Subcommand {
    /// Name as accepted on the command line.
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }

    /// Whether the builder forwards `-a/--args` into its command.
    pub fn takes_args(self) -> bool {
        matches!(
            self,
            Subcommand::Bash
                | Subcommand::Coverage
                | Subcommand::Docker
                | Subcommand::Python
                | Subcommand::Tox
        )
    }
}

/// Resolve `info.mode` into a complete shell command.
pub fn resolve(info: &Info) -> String {
    match info.mode {
        Subcommand::Bash => bash(info),
        Subcommand::Build => build(info),
        Subcommand::Container => container_id(info),
        Subcommand::Coverage => coverage(info),
        Subcommand::Destroy => destroy(info),
        Subcommand::Docker => docker(info),
        Subcommand::Image => image_id(info),
        Subcommand::Publish => publish(info),
        Subcommand::Python => python(info),
        Subcommand::Remove => remove_image(info),
        Subcommand::Restart => restart(info),
        Subcommand::Start => start(info),
        Subcommand::Stop => stop(info),
        Subcommand::Tox => tox(info),
    }
}

/// Append passthrough arguments to `cmd`, if any.
fn with_args(cmd: String, info: &Info) -> String {
    if info.args.is_empty() {
        cmd
    } else {
        format!("{} {}", cmd, info.joined_args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::fixture;

    #[test]
    fn names_match_value_enum() {
        for &mode in Subcommand::value_variants() {
            let parsed = Subcommand::from_str(&mode.name(), false).unwrap();
            assert_eq!(parsed, mode);
        }
        assert_eq!(Subcommand::Coverage.name(), "coverage");
    }

    #[test]
    fn every_subcommand_names_its_tool() {
        let expected: &[(Subcommand, &[&str])] = &[
            (Subcommand::Bash, &["docker exec", "bash"]),
            (Subcommand::Build, &["setup.py bdist_wheel", "auditwheel repair"]),
            (Subcommand::Container, &["docker ps"]),
            (Subcommand::Coverage, &["pytest", "--cov="]),
            (Subcommand::Destroy, &["docker-compose", "docker image rm"]),
            (Subcommand::Docker, &["docker"]),
            (Subcommand::Image, &["docker image ls"]),
            (Subcommand::Publish, &["setup.py bdist_wheel", "auditwheel", "twine upload"]),
            (Subcommand::Python, &["docker exec", "python3.7"]),
            (Subcommand::Remove, &["docker image rm --force"]),
            (Subcommand::Restart, &["docker-compose", "down", "up --detach"]),
            (Subcommand::Start, &["docker-compose", "up --detach"]),
            (Subcommand::Stop, &["docker-compose", "down"]),
            (Subcommand::Tox, &["tox"]),
        ];
        assert_eq!(expected.len(), Subcommand::value_variants().len());

        for (mode, tools) in expected {
            let cmd = resolve(&fixture::info(*mode));
            assert!(!cmd.is_empty(), "{} is empty", mode.name());
            for tool in *tools {
                assert!(cmd.contains(tool), "{} lacks {:?}: {}", mode.name(), tool, cmd);
            }
        }
    }

    #[test]
    fn argument_free_commands_ignore_args() {
        for mode in Subcommand::value_variants().iter().copied().filter(|m| !m.takes_args()) {
            let plain = resolve(&fixture::info(mode));
            let with = resolve(&fixture::info_with_args(mode, &["--foo", "bar"]));
            assert_eq!(plain, with, "{} changed with args", mode.name());
        }
    }

    #[test]
    fn argument_commands_forward_args_in_order() {
        for mode in Subcommand::value_variants().iter().copied().filter(|m| m.takes_args()) {
            let cmd = resolve(&fixture::info_with_args(mode, &["--foo", "bar"]));
            assert!(cmd.contains("--foo bar"), "{}: {}", mode.name(), cmd);
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve(&fixture::info(Subcommand::Start));
        let second = resolve(&fixture::info(Subcommand::Start));
        assert_eq!(first, second);
    }
}
