// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container request for the forwarding proxy in front of the inner docker.

use mm_core::{generate_name, ContainerSpec, PortBinding};

use crate::config::ProxyConfig;

pub const PROXY_IMAGE: &str = "paintedfox/tinyproxy";
pub const PROXY_TAG: &str = "latest";
pub const PROXY_NAME_PREFIX: &str = "innerDockerProxy_";
pub const PROXY_PORT: u16 = 8888;
/// Host port of the inner docker daemon
pub const DEFAULT_PUBLISHED_PORT: u16 = 2376;

/// Build the proxy's container request: one exposed port, published on all
/// host interfaces.
pub fn build_proxy(config: &ProxyConfig) -> ContainerSpec {
    let spec = ContainerSpec::new(config.image.clone(), generate_name(PROXY_NAME_PREFIX)).publish(
        PortBinding::ALL_INTERFACES,
        config.published_port,
        config.proxy_port,
    );
    tracing::debug!(
        name = %spec.name,
        published_port = config.published_port,
        "built proxy container request"
    );
    spec
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod tests;
