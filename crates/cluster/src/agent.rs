// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container request for the cluster-coordination agent.
//!
//! The agent runs privileged in the host PID namespace with the host's
//! docker daemon mounted in, so that it can launch task containers as
//! siblings of itself.

use mm_core::{generate_name, parse_ports, AgentEnvironment, ContainerSpec};

use crate::config::AgentConfig;
use crate::docker_bin::resolve_docker_binary;

pub const AGENT_IMAGE: &str = "mesosphere/mesos-slave";
pub const AGENT_TAG: &str = "0.23.0-1.0.ubuntu1404";
pub const AGENT_NAME_PREFIX: &str = "mini-mesos-slave-";
/// Alias under which the master container is reachable from the agent
pub const MASTER_ALIAS: &str = "mini-mesos-master";

const DOCKER_DATA_DIR: &str = "/var/lib/docker";
const SYS_DIR: &str = "/sys/";
const DOCKER_BIN_MOUNT: &str = "/usr/bin/docker";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Build the agent's container request.
///
/// Never fails: a resource descriptor whose ports cannot be parsed is logged
/// and only the configured agent port is exposed.
pub fn build_agent(config: &AgentConfig) -> ContainerSpec {
    let docker_bin = resolve_docker_binary(&config.docker_binary_candidates);
    let extra: Vec<(String, String)> =
        config.extra_env.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    let env = AgentEnvironment {
        zk_endpoint: &config.zk_endpoint,
        port: config.port,
        master: config.advertised_master(),
        resources: &config.resources,
        settings: &config.settings,
        extra: &extra,
    }
    .build();

    let spec = ContainerSpec::new(config.image.clone(), generate_name(AGENT_NAME_PREFIX))
        .privileged(true)
        .pid_mode("host")
        .env(env)
        .link(&config.master, MASTER_ALIAS)
        .bind(DOCKER_DATA_DIR, DOCKER_DATA_DIR)
        .bind(SYS_DIR, SYS_DIR)
        .bind(docker_bin.display().to_string(), DOCKER_BIN_MOUNT)
        .bind(DOCKER_SOCKET, DOCKER_SOCKET)
        .expose(config.port)
        .expose_all(resource_ports(config));

    tracing::debug!(
        name = %spec.name,
        image = %spec.image,
        exposed_ports = ?spec.exposed_ports,
        "built agent container request"
    );
    spec
}

/// Ports declared by the resource descriptor, or none if it is malformed.
fn resource_ports(config: &AgentConfig) -> Vec<u16> {
    match parse_ports(&config.resources) {
        Ok(ports) => ports,
        Err(e) => {
            tracing::warn!(
                resources = %config.resources,
                error = %e,
                "port binding is incorrect, exposing only the agent port"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
