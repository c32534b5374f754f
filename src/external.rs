use crate::command::Launcher;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Launches programs as child processes and waits for them.
///
/// The child inherits standard input, output and error as well as the
/// working directory of the interpreter. Only termination ends the wait;
/// a child that is stopped and later continued is waited through.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, argv: &[&str]) -> Result<()> {
        let search_paths = std::env::var_os("PATH").unwrap_or_default();
        launch_with_search_paths(&search_paths, argv)
    }
}

/// Spawns `argv[0]`, looked up in `search_paths`, and waits for it.
///
/// The child sees `argv` unchanged: `argv[0]` stays the name as typed even
/// when it was resolved to a full path.
fn launch_with_search_paths(search_paths: &OsStr, argv: &[&str]) -> Result<()> {
    let Some((&name, args)) = argv.split_first() else {
        return Ok(());
    };

    let program = find_command_path(search_paths, Path::new(name))
        .map(Cow::into_owned)
        .unwrap_or_else(|| PathBuf::from(name));
    log::debug!("launching {} with args {:?}", program.display(), args);

    let mut command = Command::new(&program);
    command.args(args);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.arg0(name);
    }

    let mut child = command.spawn().with_context(|| name.to_string())?;
    let exit_status = child.wait().with_context(|| name.to_string())?;

    match exit_status.code() {
        Some(code) => log::debug!("{name} exited with code {code}"),
        None => log::debug!("{name} exited with code {}", terminated_by_signal(exit_status)),
    }
    Ok(())
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}

/// Resolve a command path the way a typical shell would.
///
/// Behavior:
/// - Absolute path: returns it if it exists.
/// - Relative with multiple components (e.g., `bin/sh`): returns it if it exists.
/// - `./foo` on Unix or any `./`-prefixed path on other platforms: returns it if it exists.
/// - Single path component (no separators): search each directory in `search_paths` (PATH)
///   and return the first match that is an executable file. Non-executable files are
///   skipped, as `execvp` does.
/// - Empty path: returns `None`.
pub fn find_command_path<'a>(search_paths: &OsStr, path: &'a Path) -> Option<Cow<'a, Path>> {
    if path.is_absolute() {
        return find_by_path(path).map(Cow::Borrowed);
    }

    let search_in_current_dir = cfg!(not(unix)) || path.starts_with("./");
    if search_in_current_dir && path.exists() {
        return Some(Cow::Borrowed(path));
    }

    let mut components = path.components();
    match (components.next(), components.next()) {
        (None, _) => None,
        (Some(single), None) => find_in_path(search_paths, single.as_os_str()).map(Cow::Owned),
        _ => find_by_path(path).map(Cow::Borrowed),
    }
}

fn find_in_path(search_paths: &OsStr, cmd: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_paths)
        .map(|dir| dir.join(cmd))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn find_by_path(path: &Path) -> Option<&Path> {
    if path.exists() { Some(path) } else { None }
}
