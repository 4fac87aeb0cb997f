// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster configuration.
//!
//! Loaded from TOML; only the agent's connection settings are required:
//!
//! ```toml
//! [agent]
//! resources = "cpus(*):0.2;mem(*):256;ports(*):[9200-9200,9300-9300]"
//! port = 5051
//! zk_endpoint = "zk://172.17.0.2:2181/mesos"
//! master = "mini-mesos-master-1"
//!
//! [proxy]
//! published_port = 2376
//! ```

use mm_core::{AgentSettings, ImageRef};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{agent, docker_bin, proxy};

/// Errors from loading cluster configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid cluster config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the cluster-coordination agent container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentConfig {
    /// Resource descriptor offered by the agent (passed through verbatim)
    pub resources: String,
    /// Port the agent binds to; always exposed
    pub port: u16,
    /// Coordination endpoint (e.g. `zk://host:2181/mesos`)
    pub zk_endpoint: String,
    /// Name of the master container to link to
    pub master: String,
    /// Master address advertised to the agent; defaults to `zk_endpoint`
    #[serde(default)]
    pub master_address: Option<String>,
    #[serde(default = "default_agent_image")]
    pub image: ImageRef,
    #[serde(default)]
    pub settings: AgentSettings,
    #[serde(default)]
    pub extra_env: BTreeMap<String, String>,
    #[serde(default = "docker_bin::default_candidates")]
    pub docker_binary_candidates: Vec<PathBuf>,
}

impl AgentConfig {
    pub fn new(
        resources: impl Into<String>,
        port: u16,
        zk_endpoint: impl Into<String>,
        master: impl Into<String>,
    ) -> Self {
        Self {
            resources: resources.into(),
            port,
            zk_endpoint: zk_endpoint.into(),
            master: master.into(),
            master_address: None,
            image: default_agent_image(),
            settings: AgentSettings::default(),
            extra_env: BTreeMap::new(),
            docker_binary_candidates: docker_bin::default_candidates(),
        }
    }

    mm_core::setters! {
        into { resources: String, zk_endpoint: String, master: String }
        set {
            image: ImageRef,
            settings: AgentSettings,
            extra_env: BTreeMap<String, String>,
            docker_binary_candidates: Vec<PathBuf>,
        }
        option { master_address: String }
    }

    /// Address written to `MESOS_MASTER`.
    pub fn advertised_master(&self) -> &str {
        self.master_address.as_deref().unwrap_or(&self.zk_endpoint)
    }
}

/// Configuration for the forwarding-proxy container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub image: ImageRef,
    /// Port the proxy listens on inside its container
    pub proxy_port: u16,
    /// Host port the proxy is published on
    pub published_port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            image: default_proxy_image(),
            proxy_port: proxy::PROXY_PORT,
            published_port: proxy::DEFAULT_PUBLISHED_PORT,
        }
    }
}

impl ProxyConfig {
    pub fn new(published_port: u16) -> Self {
        Self { published_port, ..Self::default() }
    }
}

/// Full cluster configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterConfig {
    pub agent: AgentConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl ClusterConfig {
    /// Read a TOML file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&content)?.with_env_overrides();
        tracing::info!(
            path = %path.display(),
            agent_image = %config.agent.image,
            proxy_image = %config.proxy.image,
            "loaded cluster config"
        );
        Ok(config)
    }

    /// Parse TOML without consulting the environment.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace images with `MM_AGENT_IMAGE` / `MM_PROXY_IMAGE` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(image) = crate::env::agent_image() {
            self.agent.image = image;
        }
        if let Some(image) = crate::env::proxy_image() {
            self.proxy.image = image;
        }
        self
    }
}

fn default_agent_image() -> ImageRef {
    ImageRef::new(agent::AGENT_IMAGE, agent::AGENT_TAG)
}

fn default_proxy_image() -> ImageRef {
    ImageRef::new(proxy::PROXY_IMAGE, proxy::PROXY_TAG)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
