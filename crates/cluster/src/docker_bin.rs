// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host location of the docker binary mounted into the agent container.

use std::path::{Path, PathBuf};

/// Checked in order; the first entry is also the fallback.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["/usr/bin/docker", "/usr/local/bin/docker"];

pub fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// Return the first candidate that exists on the host.
///
/// When none exists the first candidate is returned anyway and a warning is
/// logged; container creation is expected to fail later on the bad mount.
pub fn resolve_docker_binary(candidates: &[PathBuf]) -> PathBuf {
    if let Some(found) = candidates.iter().find(|p| p.exists()) {
        tracing::debug!(path = %found.display(), "found docker binary");
        return found.clone();
    }

    let fallback = candidates
        .first()
        .cloned()
        .unwrap_or_else(|| Path::new(DEFAULT_CANDIDATES[0]).to_path_buf());
    tracing::warn!(
        candidates = ?candidates,
        fallback = %fallback.display(),
        "docker binary not found, creating containers will most likely fail"
    );
    fallback
}

#[cfg(test)]
#[path = "docker_bin_tests.rs"]
mod tests;
