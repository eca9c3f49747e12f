// Launcher error types
// Two failure modes only; both are fatal for the invocation and never
// retried, since correct operation requires the external binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::OVERRIDE_ENV;

/// Launcher-level error type
#[derive(Error, Debug)]
pub enum LauncherError {
    /// No override was set and none of the candidate paths exists.
    #[error("{}", binary_not_found_message(.attempted))]
    BinaryNotFound { attempted: Vec<PathBuf> },

    /// The OS refused to start the resolved executable.
    #[error("failed to launch {}: {source}", .path.display())]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    /// Process exit status for this error: 127 for a missing binary,
    /// 126 for one that could not be started (shell conventions).
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::BinaryNotFound { .. } => 127,
            LauncherError::LaunchFailed { .. } => 126,
        }
    }
}

fn binary_not_found_message(attempted: &[PathBuf]) -> String {
    let tried = attempted
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "neko-message-plane bundled binary not found. Tried: {tried}. \
         Set {OVERRIDE_ENV} to a real binary path or repackage with \
         bin/<platform>/neko-message-plane included."
    )
}

/// Result type alias using LauncherError
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_lists_every_attempt() {
        let err = LauncherError::BinaryNotFound {
            attempted: vec![
                PathBuf::from("/opt/neko/bin/linux/neko-message-plane"),
                PathBuf::from("/opt/neko/bin/neko-message-plane"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("/opt/neko/bin/linux/neko-message-plane"));
        assert!(message.contains("/opt/neko/bin/neko-message-plane"));
        assert!(message.contains(OVERRIDE_ENV));
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let not_found = LauncherError::BinaryNotFound { attempted: vec![] };
        let launch_failed = LauncherError::LaunchFailed {
            path: PathBuf::from("/opt/neko/bin/neko-message-plane"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(not_found.exit_code(), 127);
        assert_eq!(launch_failed.exit_code(), 126);
        assert_ne!(not_found.exit_code(), launch_failed.exit_code());
    }

    #[test]
    fn test_launch_failed_names_the_path() {
        let err = LauncherError::LaunchFailed {
            path: PathBuf::from("/opt/neko/bin/neko-message-plane"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/opt/neko/bin/neko-message-plane"));
    }
}
