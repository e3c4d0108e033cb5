//! Test runners: pytest (optionally with coverage) and tox.

use super::{build, docker_exec, with_args};
use crate::info::Info;

/// pytest over the repository's python sources.
pub fn test(info: &Info) -> String {
    let root = info.container_repo();
    format!(
        "{} pytest {root}/python -c {root}/docker/pytest.ini",
        docker_exec(info, None)
    )
}

/// pytest with an html coverage report written to `docs/htmlcov`.
pub fn coverage(info: &Info) -> String {
    let root = info.container_repo();
    let cmd = format!(
        "{exec} mkdir -p {root}/docs; {test} \
         --cov={root}/python --cov-config={root}/docker/pytest.ini \
         --cov-report=html:{root}/docs/htmlcov",
        exec = docker_exec(info, None),
        test = test(info),
    );
    with_args(cmd, info)
}

/// Build the wheel, then run tox from the staging directory.
pub fn tox(info: &Info) -> String {
    let root = info.container_repo();
    let staging = info.staging_dir();
    let script = format!(
        "cp {root}/docker/* {staging}/; \
         cp {root}/pip/* {staging}/; \
         cp -R {root}/resources {tmp}; \
         find {staging} | grep -E '__pycache__|\\.pyc$' | parallel 'rm -rf'; \
         cd {staging}; {tox}",
        tmp = info.settings.staging_root,
        tox = with_args(String::from("tox"), info),
    );
    format!(
        "{} && {} bash -c \"{}\"",
        build(info),
        docker_exec(info, None),
        script
    )
}
