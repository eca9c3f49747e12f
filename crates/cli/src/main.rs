//! neko-launcher - thin launcher for the bundled neko-message-plane binary
//!
//! Interprets no flags of its own: every argument is forwarded verbatim to
//! the resolved binary, and the child's exit code becomes ours.

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use neko_launcher_core::{LauncherConfig, LauncherError};

const LOG_ENV: &str = "NEKO_LAUNCHER_LOG";

fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr only: stdout belongs to the child process
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn launch() -> Result<i32> {
    let config = LauncherConfig::from_env()
        .context("cannot determine the launcher's own install location")?;

    debug!(
        install_dir = %config.install_dir.display(),
        override_set = %config.override_path.is_some(),
        "launcher v{} configured", neko_launcher_core::VERSION
    );

    let code = neko_launcher_core::run_from_env(&config)?;
    Ok(code)
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LauncherError>() {
        Some(launcher_err) => launcher_err.exit_code(),
        None => 1,
    }
}

fn main() {
    init_logging();

    match launch() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // Plain stderr message regardless of the log filter
            eprintln!("neko-launcher: {err:#}");
            std::process::exit(exit_code_for(&err));
        }
    }
}
