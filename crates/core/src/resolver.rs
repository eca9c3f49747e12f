// Binary resolution
// Priority: env override (verbatim, unchecked) > platform-nested bundle
// path > flat bundle path. Read-only filesystem access throughout.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::platform::PlatformTag;

/// One candidate considered during resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionAttempt {
    /// Path (or override value) that was considered.
    pub candidate: String,
    /// Where the candidate came from (`override` or `bundled`).
    pub source: String,
    /// What happened (`ok`, `missing`, `not_a_file`).
    pub outcome: String,
}

/// Full diagnostic picture of one resolution walk.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    pub binary_name: String,
    pub resolved_path: Option<String>,
    pub attempts: Vec<ResolutionAttempt>,
}

/// Ordered candidate locations for the bundled binary, relative to the
/// launcher's install directory: platform-nested first, flat fallback
/// second. First existing regular file wins.
pub fn candidate_paths(config: &LauncherConfig, tag: &PlatformTag) -> Vec<PathBuf> {
    let file_name = tag.exe_name(&config.binary_name);
    let bin_dir = config.install_dir.join("bin");
    vec![bin_dir.join(tag.to_string()).join(&file_name), bin_dir.join(&file_name)]
}

/// Non-empty override value, if any. An empty string counts as unset.
fn override_value(config: &LauncherConfig) -> Option<&str> {
    config.override_path.as_deref().filter(|s| !s.is_empty())
}

fn resolve_with_attempts(
    config: &LauncherConfig,
    tag: &PlatformTag,
) -> (Option<PathBuf>, Vec<ResolutionAttempt>) {
    // Override wins unconditionally and is never existence-checked: a
    // misconfigured override fails later, inside spawn.
    if let Some(path) = override_value(config) {
        debug!(path = %path, "using binary path override from environment");
        let attempts = vec![ResolutionAttempt {
            candidate: path.to_string(),
            source: "override".to_string(),
            outcome: "ok".to_string(),
        }];
        return (Some(PathBuf::from(path)), attempts);
    }

    let mut attempts = Vec::new();
    for candidate in candidate_paths(config, tag) {
        let outcome = if candidate.is_file() {
            "ok"
        } else if candidate.exists() {
            "not_a_file"
        } else {
            "missing"
        };

        attempts.push(ResolutionAttempt {
            candidate: candidate.display().to_string(),
            source: "bundled".to_string(),
            outcome: outcome.to_string(),
        });

        if outcome == "ok" {
            debug!(path = %candidate.display(), "resolved bundled binary");
            return (Some(candidate), attempts);
        }
        debug!(path = %candidate.display(), outcome = %outcome, "candidate rejected");
    }

    (None, attempts)
}

/// Resolve the binary path for an explicit platform tag.
pub fn resolve_with_tag(
    config: &LauncherConfig,
    tag: &PlatformTag,
) -> Result<PathBuf, LauncherError> {
    match resolve_with_attempts(config, tag) {
        (Some(path), _) => Ok(path),
        (None, attempts) => Err(LauncherError::BinaryNotFound {
            attempted: attempts.iter().map(|a| PathBuf::from(&a.candidate)).collect(),
        }),
    }
}

/// Resolve the binary path for the host platform.
pub fn resolve(config: &LauncherConfig) -> Result<PathBuf, LauncherError> {
    resolve_with_tag(config, &PlatformTag::current())
}

/// Same walk as [`resolve_with_tag`], but returns every attempt instead
/// of failing fast. Intended for operator diagnostics.
pub fn resolve_debug_with_tag(config: &LauncherConfig, tag: &PlatformTag) -> ResolutionReport {
    let (resolved, attempts) = resolve_with_attempts(config, tag);
    ResolutionReport {
        binary_name: config.binary_name.clone(),
        resolved_path: resolved.map(|p| p.display().to_string()),
        attempts,
    }
}

/// Diagnostic resolution walk for the host platform.
pub fn resolve_debug(config: &LauncherConfig) -> ResolutionReport {
    resolve_debug_with_tag(config, &PlatformTag::current())
}
