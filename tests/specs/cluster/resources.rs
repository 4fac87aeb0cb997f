//! Resource descriptor port specs

use crate::prelude::*;

#[test]
fn ranges_collapse_to_start_ports_in_order() {
    let ports = parse_ports("cpus(*):0.2;mem(*):256;ports(*):[31000-32000,8080-8080,4000-4100]");
    assert_eq!(ports.unwrap(), vec![31000, 8080, 4000]);
}

#[test]
fn bare_port_is_malformed() {
    assert_eq!(
        parse_ports("ports(*):[8080]"),
        Err(ResourceError::MalformedPortToken("8080".to_string()))
    );
}

#[test]
fn descriptor_without_ports_yields_nothing() {
    assert_eq!(parse_ports("no ports here").unwrap(), Vec::<u16>::new());
}
