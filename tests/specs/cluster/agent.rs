//! Agent container specs

use crate::prelude::*;

#[test]
fn agent_request_carries_sorted_environment() {
    let spec = build_agent(&agent_config("ports(*):[9200-9200,9300-9300]"));
    similar_asserts::assert_eq!(
        spec.env,
        vec![
            "MESOS_CONTAINERIZERS=docker,mesos".to_string(),
            "MESOS_EXECUTOR_REGISTRATION_TIMEOUT=5mins".to_string(),
            "MESOS_GLOG_v=1".to_string(),
            "MESOS_ISOLATOR=cgroups/cpu,cgroups/mem".to_string(),
            "MESOS_LOG_DIR=/var/log".to_string(),
            format!("MESOS_MASTER={}", ZK),
            "MESOS_PORT=5051".to_string(),
            "MESOS_RESOURCES=ports(*):[9200-9200,9300-9300]".to_string(),
            format!("MESOS_ZK={}", ZK),
        ]
    );
}

#[test]
fn agent_request_exposes_configured_and_declared_ports() {
    let spec = build_agent(&agent_config("ports(*):[9200-9200,9300-9300]"));
    assert_eq!(exposed(&spec), vec![5051, 9200, 9300]);
}

#[test]
fn malformed_descriptor_degrades_to_agent_port() {
    let spec = build_agent(&agent_config("ports(*):[9200-9200,8080]"));
    assert_eq!(exposed(&spec), vec![5051]);
    assert_eq!(spec.binds.len(), 4);
    assert_eq!(spec.links[0].to_string(), format!("{}:mini-mesos-master", MASTER));
}

#[tokio::test]
async fn agent_is_created_then_started() {
    let cluster = Cluster::new(FakeRuntime::new());
    let started = cluster.start_agent(&agent_config("ports(*):[9200-9200]")).await.unwrap();

    let calls = cluster.runtime().calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        RuntimeCall::Create(spec) => {
            assert_eq!(spec.name, started.name);
            assert!(spec.privileged);
        }
        other => panic!("expected create, got {:?}", other),
    }
    assert_eq!(calls[1], RuntimeCall::Start(started.id));
}
