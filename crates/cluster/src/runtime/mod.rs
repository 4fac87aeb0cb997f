// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container runtime adapters
//!
//! The [`ContainerRuntime`] trait is the only place container requests leave
//! the process. [`DockerCli`] drives the `docker` command line; images are
//! expected to be present already.

mod docker;

pub use docker::{create_args, DockerCli};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRuntime, RuntimeCall};

use async_trait::async_trait;
use mm_core::ContainerSpec;
use std::fmt;
use thiserror::Error;

/// Errors from container runtime operations
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Identifier the runtime assigned to a created container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(pub String);

impl ContainerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Adapter for submitting container requests
#[async_trait]
pub trait ContainerRuntime: Clone + Send + Sync + 'static {
    /// Create (but do not start) a container from the request
    async fn create(&self, spec: &ContainerSpec) -> Result<ContainerId, RuntimeError>;

    async fn start(&self, id: &ContainerId) -> Result<(), RuntimeError>;

    /// Force-remove a container, running or not
    async fn remove(&self, id: &ContainerId) -> Result<(), RuntimeError>;
}
