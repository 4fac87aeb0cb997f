// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container-creation requests for the cluster's containers.
//!
//! A [`ContainerSpec`] is assembled once per creation call from caller
//! configuration and handed to a container runtime unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Image reference split into repository name and tag.
///
/// Configuration accepts two forms:
///
/// Short form: `image = "mesosphere/mesos-slave:0.23.0-1.0.ubuntu1404"`.
/// Block form: `image = { name = "mesosphere/mesos-slave", tag = "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub name: String,
    pub tag: String,
}

impl ImageRef {
    pub const DEFAULT_TAG: &'static str = "latest";

    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { name: name.into(), tag: tag.into() }
    }

    /// Parse `name[:tag]`. A colon inside a registry host (`host:5000/img`)
    /// is not mistaken for the tag separator, and an empty tag means latest.
    pub fn parse(reference: &str) -> Self {
        let repo_start = reference.rfind('/').map(|i| i + 1).unwrap_or(0);
        match reference[repo_start..].rfind(':') {
            Some(i) => {
                let split = repo_start + i;
                let tag = &reference[split + 1..];
                let tag = if tag.is_empty() { Self::DEFAULT_TAG } else { tag };
                Self::new(&reference[..split], tag)
            }
            None => Self::new(reference, Self::DEFAULT_TAG),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        fn default_tag() -> String {
            ImageRef::DEFAULT_TAG.to_string()
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Short(String),
            Block {
                name: String,
                #[serde(default = "default_tag")]
                tag: String,
            },
        }

        match Helper::deserialize(deserializer)? {
            Helper::Short(reference) => Ok(ImageRef::parse(&reference)),
            Helper::Block { name, tag } => Ok(ImageRef { name, tag }),
        }
    }
}

/// Host path exposed inside the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindMount {
    pub host: String,
    pub container: String,
}

impl BindMount {
    pub fn new(host: impl Into<String>, container: impl Into<String>) -> Self {
        Self { host: host.into(), container: container.into() }
    }
}

impl fmt::Display for BindMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.container)
    }
}

/// Network link to another container, reachable under `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub container: String,
    pub alias: String,
}

impl Link {
    pub fn new(container: impl Into<String>, alias: impl Into<String>) -> Self {
        Self { container: container.into(), alias: alias.into() }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container, self.alias)
    }
}

/// Container port published on a host interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBinding {
    pub host_ip: String,
    pub host_port: u16,
    pub container_port: u16,
}

impl PortBinding {
    /// Publish on every host interface.
    pub const ALL_INTERFACES: &'static str = "0.0.0.0";

    pub fn new(host_ip: impl Into<String>, host_port: u16, container_port: u16) -> Self {
        Self { host_ip: host_ip.into(), host_port, container_port }
    }
}

impl fmt::Display for PortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.host_ip, self.host_port, self.container_port)
    }
}

/// A single container-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub image: ImageRef,
    /// Unique per creation call
    pub name: String,
    pub privileged: bool,
    /// PID namespace (`"host"` shares the host's process table)
    pub pid_mode: Option<String>,
    /// `KEY=VALUE` entries, sorted by key
    pub env: Vec<String>,
    pub binds: Vec<BindMount>,
    pub links: Vec<Link>,
    pub exposed_ports: BTreeSet<u16>,
    pub port_bindings: Vec<PortBinding>,
}

impl ContainerSpec {
    pub fn new(image: ImageRef, name: impl Into<String>) -> Self {
        Self {
            image,
            name: name.into(),
            privileged: false,
            pid_mode: None,
            env: Vec::new(),
            binds: Vec::new(),
            links: Vec::new(),
            exposed_ports: BTreeSet::new(),
            port_bindings: Vec::new(),
        }
    }

    crate::setters! {
        set { privileged: bool, env: Vec<String> }
        option { pid_mode: String }
    }

    pub fn bind(mut self, host: impl Into<String>, container: impl Into<String>) -> Self {
        self.binds.push(BindMount::new(host, container));
        self
    }

    pub fn link(mut self, container: impl Into<String>, alias: impl Into<String>) -> Self {
        self.links.push(Link::new(container, alias));
        self
    }

    pub fn expose(mut self, port: u16) -> Self {
        self.exposed_ports.insert(port);
        self
    }

    pub fn expose_all(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.exposed_ports.extend(ports);
        self
    }

    /// Publish `container_port` at `host_ip:host_port`. The container port is
    /// exposed as well.
    pub fn publish(
        mut self,
        host_ip: impl Into<String>,
        host_port: u16,
        container_port: u16,
    ) -> Self {
        self.exposed_ports.insert(container_port);
        self.port_bindings.push(PortBinding::new(host_ip, host_port, container_port));
        self
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
