// Spawn-and-wait delegation
// Exactly one child per call, stdio inherited, blocking wait. No retries,
// no timeout: the launcher is a direct single-shot delegation.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::resolver;

/// Resolve the binary and run it with `args`, returning the child's exit
/// code. Stdin/stdout/stderr are inherited unmodified.
pub fn run<I, S>(config: &LauncherConfig, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin_path = resolver::resolve(config)?;
    run_resolved(&bin_path, args)
}

/// [`run`] with the calling process's own command-line arguments
/// (program name excluded) forwarded verbatim.
pub fn run_from_env(config: &LauncherConfig) -> Result<i32> {
    run(config, std::env::args_os().skip(1))
}

fn run_resolved<I, S>(bin_path: &Path, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!(path = %bin_path.display(), "spawning message plane binary");

    let status = Command::new(bin_path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LauncherError::LaunchFailed {
            path: bin_path.to_path_buf(),
            source,
        })?;

    let code = exit_code(status);
    debug!(path = %bin_path.display(), exit_code = %code, "message plane binary exited");
    Ok(code)
}

/// Child exit code. A signal-terminated child has no code; it maps to
/// `128 + signal` on unix (shell convention), 1 elsewhere.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_exit_code_from_normal_exit() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status encoding: exit code in the high byte
        assert_eq!(exit_code(ExitStatus::from_raw(7 << 8)), 7);
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_from_signal_termination() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status encoding: signal number in the low byte
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
        assert_eq!(exit_code(ExitStatus::from_raw(15)), 143);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_propagates_child_exit_code() {
        let config = LauncherConfig::new("neko-message-plane", "/nonexistent")
            .with_override(Some("/bin/sh".to_string()));
        let code = run(&config, ["-c", "exit 7"]).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_run_fails_before_spawn_when_resolution_fails() {
        let config = LauncherConfig::new("neko-message-plane", "/nonexistent");
        let err = run(&config, ["--whatever"]).unwrap_err();
        assert!(matches!(err, LauncherError::BinaryNotFound { .. }));
    }

    #[test]
    fn test_run_surfaces_launch_failure_for_bad_override() {
        // Override is never pre-checked, so the failure shows up at spawn.
        let config = LauncherConfig::new("neko-message-plane", "/nonexistent")
            .with_override(Some("/no/such/binary/anywhere".to_string()));
        let err = run(&config, Vec::<String>::new()).unwrap_err();
        let LauncherError::LaunchFailed { path, .. } = err else {
            panic!("expected LaunchFailed");
        };
        assert_eq!(path, Path::new("/no/such/binary/anywhere"));
    }
}
