// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment for the agent container.
//!
//! Output is sorted by key so the same configuration always renders the
//! same `KEY=VALUE` list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MESOS_ZK: &str = "MESOS_ZK";
pub const MESOS_PORT: &str = "MESOS_PORT";
pub const MESOS_MASTER: &str = "MESOS_MASTER";
pub const MESOS_GLOG_V: &str = "MESOS_GLOG_v";
pub const MESOS_EXECUTOR_REGISTRATION_TIMEOUT: &str = "MESOS_EXECUTOR_REGISTRATION_TIMEOUT";
pub const MESOS_CONTAINERIZERS: &str = "MESOS_CONTAINERIZERS";
pub const MESOS_ISOLATOR: &str = "MESOS_ISOLATOR";
pub const MESOS_LOG_DIR: &str = "MESOS_LOG_DIR";
pub const MESOS_RESOURCES: &str = "MESOS_RESOURCES";

/// Agent settings that are fixed for a test cluster unless overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub log_verbosity: String,
    pub executor_registration_timeout: String,
    pub containerizers: String,
    pub isolator: String,
    pub log_dir: String,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            log_verbosity: "1".to_string(),
            executor_registration_timeout: "5mins".to_string(),
            containerizers: "docker,mesos".to_string(),
            isolator: "cgroups/cpu,cgroups/mem".to_string(),
            log_dir: "/var/log".to_string(),
        }
    }
}

/// Inputs to the agent container's environment.
#[derive(Debug, Clone)]
pub struct AgentEnvironment<'a> {
    pub zk_endpoint: &'a str,
    pub port: u16,
    pub master: &'a str,
    pub resources: &'a str,
    pub settings: &'a AgentSettings,
    /// Additional pairs; a key repeated here replaces the fixed value
    pub extra: &'a [(String, String)],
}

impl AgentEnvironment<'_> {
    /// Render `KEY=VALUE` entries ordered by key.
    pub fn build(&self) -> Vec<String> {
        let port = self.port.to_string();
        let mut vars: BTreeMap<&str, &str> = BTreeMap::from([
            (MESOS_ZK, self.zk_endpoint),
            (MESOS_PORT, port.as_str()),
            (MESOS_MASTER, self.master),
            (MESOS_GLOG_V, self.settings.log_verbosity.as_str()),
            (
                MESOS_EXECUTOR_REGISTRATION_TIMEOUT,
                self.settings.executor_registration_timeout.as_str(),
            ),
            (MESOS_CONTAINERIZERS, self.settings.containerizers.as_str()),
            (MESOS_ISOLATOR, self.settings.isolator.as_str()),
            (MESOS_LOG_DIR, self.settings.log_dir.as_str()),
            (MESOS_RESOURCES, self.resources),
        ]);
        for (key, value) in self.extra {
            vars.insert(key.as_str(), value.as_str());
        }
        vars.into_iter().map(|(k, v)| format!("{}={}", k, v)).collect()
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
