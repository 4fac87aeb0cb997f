//! Proxy container specs

use crate::prelude::*;

#[test]
fn proxy_publishes_fixed_port_on_all_interfaces() {
    let spec = build_proxy(&ProxyConfig::new(9999));
    assert_eq!(exposed(&spec), vec![8888]);
    let bindings: Vec<String> = spec.port_bindings.iter().map(ToString::to_string).collect();
    assert_eq!(bindings, vec!["0.0.0.0:9999:8888"]);
}

#[tokio::test]
async fn proxy_start_failure_cleans_up() {
    let runtime = FakeRuntime::new();
    runtime.fail_start("port is already allocated");
    let cluster = Cluster::new(runtime);

    assert!(cluster.start_proxy(&ProxyConfig::new(9999)).await.is_err());
    assert_eq!(
        cluster.runtime().calls().last(),
        Some(&RuntimeCall::Remove(ContainerId("fake-1".to_string())))
    );
}

#[tokio::test]
async fn proxy_failure_during_start_all_removes_agent() {
    let runtime = FakeRuntime::new();
    runtime.fail_create_after(1, "no such image");
    let cluster = Cluster::new(runtime);
    let config =
        ClusterConfig { agent: agent_config("ports(*):[]"), proxy: ProxyConfig::default() };

    assert!(cluster.start_all(&config).await.is_err());
    assert_eq!(
        cluster.runtime().calls().last(),
        Some(&RuntimeCall::Remove(ContainerId("fake-1".to_string())))
    );
}
