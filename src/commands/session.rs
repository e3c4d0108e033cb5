use super::{docker_exec, with_args};
use crate::info::Info;

/// Interactive bash inside the container.
pub fn bash(info: &Info) -> String {
    with_args(format!("{} bash", docker_exec(info, None)), info)
}

/// Interactive python interpreter inside the container.
pub fn python(info: &Info) -> String {
    with_args(
        format!("{} {}", docker_exec(info, None), info.settings.python),
        info,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Subcommand;
    use crate::info::fixture;

    #[test]
    fn bash_runs_after_exec() {
        let info = fixture::info(Subcommand::Bash);
        assert_eq!(bash(&info), format!("{} bash", docker_exec(&info, None)));
    }

    #[test]
    fn python_uses_configured_interpreter() {
        let mut info = fixture::info_with_args(Subcommand::Python, &["-c", "'import openvdb'"]);
        info.settings.python = String::from("python3.8");
        assert!(python(&info).ends_with("$CONTAINER_ID python3.8 -c 'import openvdb'"));
    }
}
