// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake container runtime for testing

use super::{ContainerId, ContainerRuntime, RuntimeError};
use async_trait::async_trait;
use mm_core::ContainerSpec;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded runtime call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    Create(ContainerSpec),
    Start(ContainerId),
    Remove(ContainerId),
}

#[derive(Default)]
struct FakeRuntimeState {
    calls: Vec<RuntimeCall>,
    next_id: u64,
    /// Successful creates allowed before failing, and the stderr to fail with
    fail_create: Option<(u64, String)>,
    fail_start: Option<String>,
}

/// Fake runtime that records calls and hands out sequential IDs
#[derive(Clone, Default)]
pub struct FakeRuntime {
    inner: Arc<Mutex<FakeRuntimeState>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `create` fail with this stderr
    pub fn fail_create(&self, stderr: impl Into<String>) {
        self.fail_create_after(0, stderr);
    }

    /// Let `n` more creates succeed, then fail every one after that
    pub fn fail_create_after(&self, n: u64, stderr: impl Into<String>) {
        let mut state = self.inner.lock();
        let allowed = state.next_id + n;
        state.fail_create = Some((allowed, stderr.into()));
    }

    /// Make every subsequent `start` fail with this stderr
    pub fn fail_start(&self, stderr: impl Into<String>) {
        self.inner.lock().fail_start = Some(stderr.into());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.inner.lock().calls.clone()
    }

    /// Specs passed to `create`, in order
    pub fn created(&self) -> Vec<ContainerSpec> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                RuntimeCall::Create(spec) => Some(spec.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn create(&self, spec: &ContainerSpec) -> Result<ContainerId, RuntimeError> {
        let mut state = self.inner.lock();
        state.calls.push(RuntimeCall::Create(spec.clone()));
        if let Some((allowed, ref stderr)) = state.fail_create {
            if state.next_id >= allowed {
                return Err(RuntimeError::CommandFailed {
                    command: "fake create".to_string(),
                    stderr: stderr.clone(),
                });
            }
        }
        state.next_id += 1;
        Ok(ContainerId(format!("fake-{}", state.next_id)))
    }

    async fn start(&self, id: &ContainerId) -> Result<(), RuntimeError> {
        let mut state = self.inner.lock();
        state.calls.push(RuntimeCall::Start(id.clone()));
        match state.fail_start {
            Some(ref stderr) => Err(RuntimeError::CommandFailed {
                command: "fake start".to_string(),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn remove(&self, id: &ContainerId) -> Result<(), RuntimeError> {
        self.inner.lock().calls.push(RuntimeCall::Remove(id.clone()));
        Ok(())
    }
}
