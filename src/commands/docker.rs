//! Docker and docker-compose invocations shared by the other builders.

use super::{service, with_args};
use crate::info::Info;

/// Environment the compose file expects: repository path, invoking user and
/// image name.
fn compose_env(info: &Info) -> String {
    format!(
        "REPO_PATH=\"{path}\" CURRENT_USER=\"{user}\" IMAGE=\"{repo}\"",
        path = info.repo.path,
        user = info.user,
        repo = info.repo.name,
    )
}

/// `docker-compose` bound to the service's project and compose file.
///
/// Leaves the shell inside the compose directory with the previous working
/// directory saved in `$CWD`; callers append their verb and `cd $CWD`.
pub fn docker_compose(info: &Info) -> String {
    format!(
        "CWD=`pwd`; cd {dir}; {env} docker-compose -p {repo} -f {compose}",
        dir = info.compose_dir(),
        env = compose_env(info),
        repo = info.repo.name,
        compose = info.compose_path,
    )
}

/// Plain `docker` with the service environment and passthrough arguments.
pub fn docker(info: &Info) -> String {
    let cmd = format!(
        "CWD=$(pwd); cd {dir}; {env} docker",
        dir = info.compose_dir(),
        env = compose_env(info),
    );
    format!("{}; cd $CWD", with_args(cmd, info))
}

/// Prints the id of the service's running container.
pub fn container_id(info: &Info) -> String {
    format!(
        "docker ps | grep {} | head -n 1 | awk '{{print $1}}'",
        info.repo.name
    )
}

/// Prints the id of the service's image.
pub fn image_id(info: &Info) -> String {
    format!(
        "docker image ls | grep {} | head -n 1 | awk '{{print $3}}'",
        info.repo.name
    )
}

/// `docker exec` into the service container, starting it first.
///
/// The result ends with the container reference; callers append the program
/// to run.
pub fn docker_exec(info: &Info, working_directory: Option<&str>) -> String {
    let mut cmd = format!(
        "{start}; CONTAINER_ID=$({container}); \
         docker exec --interactive --tty --user \"root:root\" \
         -e PYTHONPATH=\"${{PYTHONPATH}}:{root}/python\"",
        start = service::start(info),
        container = container_id(info),
        root = info.container_repo(),
    );
    if let Some(dir) = working_directory {
        cmd.push_str(" -w ");
        cmd.push_str(dir);
    }
    cmd.push_str(" $CONTAINER_ID");
    cmd
}
