// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Docker CLI runtime. Requests are rendered as `docker create` arguments.

use super::{ContainerId, ContainerRuntime, RuntimeError};
use async_trait::async_trait;
use mm_core::ContainerSpec;

/// Runtime that shells out to the docker CLI (or a compatible program).
#[derive(Clone, Debug)]
pub struct DockerCli {
    program: String,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerCli {
    /// Use the program named by `MM_DOCKER`, or `docker`.
    pub fn new() -> Self {
        Self { program: crate::env::docker_program() }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the CLI and return trimmed stdout on success.
    async fn run(&self, args: &[String]) -> Result<String, RuntimeError> {
        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| RuntimeError::Exec { program: self.program.clone(), source })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(RuntimeError::CommandFailed {
                command: format!("{} {}", self.program, args.first().map_or("", String::as_str)),
                stderr: stderr.trim().to_string(),
            })
        }
    }
}

/// `docker create` arguments for a request, image last.
pub fn create_args(spec: &ContainerSpec) -> Vec<String> {
    let mut args = vec!["create".to_string(), "--name".to_string(), spec.name.clone()];
    if spec.privileged {
        args.push("--privileged".to_string());
    }
    if let Some(ref pid) = spec.pid_mode {
        args.extend(["--pid".to_string(), pid.clone()]);
    }
    for entry in &spec.env {
        args.extend(["-e".to_string(), entry.clone()]);
    }
    for bind in &spec.binds {
        args.extend(["-v".to_string(), bind.to_string()]);
    }
    for link in &spec.links {
        args.extend(["--link".to_string(), link.to_string()]);
    }
    for port in &spec.exposed_ports {
        args.extend(["--expose".to_string(), port.to_string()]);
    }
    for binding in &spec.port_bindings {
        args.extend(["-p".to_string(), binding.to_string()]);
    }
    args.push(spec.image.to_string());
    args
}

#[async_trait]
impl ContainerRuntime for DockerCli {
    async fn create(&self, spec: &ContainerSpec) -> Result<ContainerId, RuntimeError> {
        tracing::info!(name = %spec.name, image = %spec.image, "creating container");
        let stdout = self.run(&create_args(spec)).await?;
        // docker prints the new container's ID as the last line
        let id = stdout.lines().last().unwrap_or_default().trim();
        if id.is_empty() {
            return Err(RuntimeError::CommandFailed {
                command: format!("{} create", self.program),
                stderr: "no container id in output".to_string(),
            });
        }
        Ok(ContainerId(id.to_string()))
    }

    async fn start(&self, id: &ContainerId) -> Result<(), RuntimeError> {
        tracing::info!(%id, "starting container");
        self.run(&["start".to_string(), id.0.clone()]).await.map(|_| ())
    }

    async fn remove(&self, id: &ContainerId) -> Result<(), RuntimeError> {
        tracing::info!(%id, "removing container");
        self.run(&["rm".to_string(), "-f".to_string(), id.0.clone()]).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
