//! Cluster config file specs

use crate::prelude::*;
use serial_test::serial;

const CLUSTER_TOML: &str = r#"
[agent]
resources = "cpus(*):0.2;mem(*):256;ports(*):[9200-9200]"
port = 5051
zk_endpoint = "zk://172.17.0.2:2181/mesos"
master = "mini-mesos-master-1"

[proxy]
published_port = 9999
"#;

#[tokio::test]
#[serial]
async fn cluster_starts_from_config_file() {
    std::env::remove_var("MM_AGENT_IMAGE");
    std::env::remove_var("MM_PROXY_IMAGE");
    let (_dir, path) = write_config(CLUSTER_TOML);
    let config = ClusterConfig::load(&path).unwrap();

    let cluster = Cluster::new(FakeRuntime::new());
    let started = cluster.start_all(&config).await.unwrap();
    assert_eq!(started.len(), 2);

    let created = cluster.runtime().created();
    assert_eq!(created[0].image.to_string(), "mesosphere/mesos-slave:0.23.0-1.0.ubuntu1404");
    assert_eq!(exposed(&created[0]), vec![5051, 9200]);
    assert_eq!(created[1].image.to_string(), "paintedfox/tinyproxy:latest");
    assert_eq!(created[1].port_bindings[0].host_port, 9999);
}

#[test]
#[serial]
fn image_override_from_environment() {
    let (_dir, path) = write_config(CLUSTER_TOML);
    std::env::set_var("MM_PROXY_IMAGE", "local/tinyproxy:test");
    let config = ClusterConfig::load(&path);
    std::env::remove_var("MM_PROXY_IMAGE");

    assert_eq!(config.unwrap().proxy.image.to_string(), "local/tinyproxy:test");
}
