// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the cluster crate.

use mm_core::ImageRef;

/// Container CLI program: MM_DOCKER > `docker`
pub fn docker_program() -> String {
    non_empty("MM_DOCKER").unwrap_or_else(|| "docker".to_string())
}

/// Agent image override (`name[:tag]`)
pub fn agent_image() -> Option<ImageRef> {
    non_empty("MM_AGENT_IMAGE").map(|s| ImageRef::parse(&s))
}

/// Proxy image override (`name[:tag]`)
pub fn proxy_image() -> Option<ImageRef> {
    non_empty("MM_PROXY_IMAGE").map(|s| ImageRef::parse(&s))
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
