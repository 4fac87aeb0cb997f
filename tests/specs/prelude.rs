//! Shared helpers for specs.

pub use mm_cluster::{
    build_agent, build_proxy, AgentConfig, Cluster, ClusterConfig, ContainerId, FakeRuntime,
    ProxyConfig, RuntimeCall,
};
pub use mm_core::{parse_ports, ContainerSpec, ResourceError};

pub const ZK: &str = "zk://172.17.0.2:2181/mesos";
pub const MASTER: &str = "mini-mesos-master-1";

pub fn agent_config(resources: &str) -> AgentConfig {
    AgentConfig::new(resources, 5051, ZK, MASTER)
}

pub fn exposed(spec: &ContainerSpec) -> Vec<u16> {
    spec.exposed_ports.iter().copied().collect()
}

/// Write a cluster config into a temp dir and return both.
pub fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("cluster.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
