// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mm-cluster: provisions the mini-mesos agent and proxy containers
//!
//! # Module layout
//!
//! - [`agent`] / [`proxy`] — container requests for each cluster member
//! - [`config`] — TOML cluster configuration with environment overrides
//! - [`runtime`] — container runtime seam and the docker CLI implementation
//! - [`cluster`] — submits requests through a runtime

pub mod agent;
pub mod cluster;
pub mod config;
pub mod docker_bin;
pub mod env;
pub mod proxy;
pub mod runtime;

pub use agent::build_agent;
pub use cluster::{Cluster, ClusterError, StartedContainer};
pub use config::{AgentConfig, ClusterConfig, ConfigError, ProxyConfig};
pub use docker_bin::resolve_docker_binary;
pub use proxy::build_proxy;
#[cfg(any(test, feature = "test-support"))]
pub use runtime::{FakeRuntime, RuntimeCall};
pub use runtime::{ContainerId, ContainerRuntime, DockerCli, RuntimeError};

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test writer that collects formatted log lines in memory.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

#[cfg(test)]
impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return what it logged at
/// `warn` and above.
#[cfg(test)]
pub(crate) fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    (out, logs)
}
