// Neko Launcher Core - Resolution & Delegation
// NO runtime dependencies beyond the standard process API: the launcher
// resolves one binary, spawns it once, and relays its exit code.

pub mod config;
pub mod error;
pub mod launcher;
pub mod platform;
pub mod resolver;

pub use config::{LauncherConfig, DEFAULT_BINARY_NAME, OVERRIDE_ENV};
pub use error::{LauncherError, Result};
pub use launcher::{run, run_from_env};
pub use platform::PlatformTag;
pub use resolver::{
    candidate_paths, resolve, resolve_debug, resolve_debug_with_tag, resolve_with_tag,
    ResolutionAttempt, ResolutionReport,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
