//! Wheel packaging: staging, shared-library bundling, repair and upload.

use super::docker_exec;
use crate::info::Info;

/// Files copied from the repository into the staging directory, as
/// `(source relative to the repository, destination relative to staging)`.
const STAGED_FILES: &[(&str, &str)] = &[
    ("README.md", "README.md"),
    ("LICENSE", "LICENSE"),
    ("pip/MANIFEST.in", "MANIFEST.in"),
    ("pip/setup.cfg", ""),
    ("pip/setup.py", ""),
    ("pip/version.txt", ""),
    ("docker/dev_requirements.txt", ""),
];

/// Recreate the staging directory from the repository's python sources and
/// packaging files.
fn stage(info: &Info) -> String {
    let root = info.container_repo();
    let staging = info.staging_dir();

    let mut script = format!("rm -rf {staging}; cp -r {root}/python {staging}; ");
    for (source, dest) in STAGED_FILES {
        script.push_str(&format!("cp {root}/{source} {staging}/{dest}; "));
    }

    format!("{} bash -c \"{}\"", docker_exec(info, None), script)
}

/// Copy the configured shared objects into `<staging>/lib`.
pub fn copy_libs(info: &Info) -> String {
    let lib = format!("{}/lib", info.staging_dir());

    let mut script = format!("rm -rf {lib}; mkdir {lib}; ");
    for shared in &info.settings.shared_libs {
        script.push_str(&format!("cp {} {lib}/{}; ", shared.source, shared.name));
    }
    script.push_str(&format!("chmod +x {lib}/*; "));

    format!("{} bash -c \"{}\"", docker_exec(info, None), script)
}

fn wheel(info: &Info) -> String {
    format!(
        "{exec} {python} setup.py bdist_wheel --bdist-dir lib --dist-dir dist --python-tag {tag}",
        exec = docker_exec(info, Some(&info.staging_dir())),
        python = info.settings.python,
        tag = info.settings.python_tag,
    )
}

/// Graft the bundled libraries into the built wheel.
fn repair(info: &Info) -> String {
    format!(
        "{exec} bash -c \"export LD_LIBRARY_PATH={staging}/lib && \
         auditwheel repair ./dist/*.whl --lib-sdir lib --wheel-dir dist --no-update-tags\"",
        exec = docker_exec(info, Some(&info.staging_dir())),
        staging = info.staging_dir(),
    )
}

/// Build a repaired wheel in the staging directory.
///
/// `bdist_wheel` consumes the `lib/` directory, so libraries are copied
/// again before the repair step.
pub fn build(info: &Info) -> String {
    let lib = copy_libs(info);
    [stage(info), lib.clone(), wheel(info), lib, repair(info)].join(" && ")
}

/// Build, then upload with twine and clear the staging directories.
pub fn publish(info: &Info) -> String {
    format!(
        "{build} && {exec} twine upload dist/* && rm -rf {staging} {root}/tox",
        build = build(info),
        exec = docker_exec(info, Some(&info.staging_dir())),
        staging = info.staging_dir(),
        root = info.settings.staging_root,
    )
}
