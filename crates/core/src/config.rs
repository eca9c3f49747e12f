// Launcher configuration
// The process environment is read exactly once, here; everything
// downstream is explicit parameter passing.

use std::path::{Path, PathBuf};

/// Environment variable that overrides binary resolution entirely.
/// Its value is used verbatim, without any existence check.
pub const OVERRIDE_ENV: &str = "NEKO_MESSAGE_PLANE_RUST_BIN";

/// Base name of the bundled message plane binary.
pub const DEFAULT_BINARY_NAME: &str = "neko-message-plane";

/// Launcher configuration. Built once per invocation.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Base name of the executable to resolve (no `.exe` suffix).
    pub binary_name: String,
    /// Override path, if the override variable was set to a non-empty string.
    pub override_path: Option<String>,
    /// Directory the launcher itself is installed in; candidates are
    /// resolved relative to its `bin` subdirectory.
    pub install_dir: PathBuf,
}

impl LauncherConfig {
    pub fn new(binary_name: impl Into<String>, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary_name: binary_name.into(),
            override_path: None,
            install_dir: install_dir.into(),
        }
    }

    pub fn with_override(mut self, override_path: Option<String>) -> Self {
        self.override_path = override_path;
        self
    }

    /// Build the configuration from the process environment: the override
    /// variable (empty counts as unset) and the directory containing the
    /// launcher's own executable.
    pub fn from_env() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let install_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let override_path = std::env::var(OVERRIDE_ENV).ok().filter(|s| !s.is_empty());

        Ok(Self {
            binary_name: DEFAULT_BINARY_NAME.to_string(),
            override_path,
            install_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = LauncherConfig::new("neko-message-plane", "/opt/neko");
        assert_eq!(config.binary_name, "neko-message-plane");
        assert_eq!(config.install_dir, PathBuf::from("/opt/neko"));
        assert!(config.override_path.is_none());
    }

    #[test]
    fn test_with_override() {
        let config = LauncherConfig::new("neko-message-plane", "/opt/neko")
            .with_override(Some("/somewhere/else".to_string()));
        assert_eq!(config.override_path.as_deref(), Some("/somewhere/else"));
    }
}
