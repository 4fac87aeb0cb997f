// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Starts the cluster's containers through a [`ContainerRuntime`].

use mm_core::ContainerSpec;
use thiserror::Error;

use crate::config::{AgentConfig, ClusterConfig, ProxyConfig};
use crate::runtime::{ContainerId, ContainerRuntime, RuntimeError};
use crate::{agent, proxy};

/// Errors from starting cluster containers
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("container {name}: {source}")]
    Runtime {
        name: String,
        #[source]
        source: RuntimeError,
    },
}

/// A container that was created and started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedContainer {
    pub id: ContainerId,
    pub name: String,
}

pub struct Cluster<R: ContainerRuntime> {
    runtime: R,
}

impl<R: ContainerRuntime> Cluster<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub async fn start_agent(
        &self,
        config: &AgentConfig,
    ) -> Result<StartedContainer, ClusterError> {
        self.launch(agent::build_agent(config)).await
    }

    pub async fn start_proxy(
        &self,
        config: &ProxyConfig,
    ) -> Result<StartedContainer, ClusterError> {
        self.launch(proxy::build_proxy(config)).await
    }

    /// Start the agent, then the proxy. If the proxy fails the agent is
    /// removed before the error is returned.
    pub async fn start_all(
        &self,
        config: &ClusterConfig,
    ) -> Result<Vec<StartedContainer>, ClusterError> {
        let agent = self.start_agent(&config.agent).await?;
        let proxy = match self.start_proxy(&config.proxy).await {
            Ok(proxy) => proxy,
            Err(e) => {
                if let Err(remove_err) = self.runtime.remove(&agent.id).await {
                    tracing::warn!(
                        name = %agent.name,
                        id = %agent.id,
                        error = %remove_err,
                        "failed to remove agent after proxy failure"
                    );
                }
                return Err(e);
            }
        };
        Ok(vec![agent, proxy])
    }

    pub async fn stop(&self, container: &StartedContainer) -> Result<(), ClusterError> {
        self.runtime.remove(&container.id).await.map_err(|source| ClusterError::Runtime {
            name: container.name.clone(),
            source,
        })
    }

    async fn launch(&self, spec: ContainerSpec) -> Result<StartedContainer, ClusterError> {
        let start = std::time::Instant::now();
        let name = spec.name.clone();

        let id = match self.runtime.create(&spec).await {
            Ok(id) => id,
            Err(source) => {
                tracing::error!(%name, error = %source, "container create failed");
                return Err(ClusterError::Runtime { name, source });
            }
        };

        if let Err(source) = self.runtime.start(&id).await {
            tracing::error!(%name, %id, error = %source, "container start failed");
            // Don't leave a created-but-dead container behind
            if let Err(e) = self.runtime.remove(&id).await {
                tracing::warn!(%name, %id, error = %e, "failed to remove container");
            }
            return Err(ClusterError::Runtime { name, source });
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(%name, %id, elapsed_ms, "container started");
        Ok(StartedContainer { id, name })
    }
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
