// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[yare::parameterized(
    single_range     = { "ports(*):[31000-32000]",                                &[31000] },
    two_ranges       = { "ports(*):[31000-32000,8080-8080]",                      &[31000, 8080] },
    full_descriptor  = { "cpus(*):0.2; mem(*):256; ports(*):[8081-8082, 8083-8084]", &[8081, 8083] },
    spaced_tokens    = { "ports(*):[ 9000-9001 ,  7000-7001 ]",                   &[9000, 7000] },
    named_role       = { "ports(marathon):[4000-4100]",                           &[4000] },
    open_upper_bound = { "ports(*):[5000-]",                                      &[5000] },
    no_ports_clause  = { "no ports here",                                         &[] },
    empty_list       = { "ports(*):[]",                                           &[] },
    blank_list       = { "ports(*):[  ]",                                         &[] },
    empty_input      = { "",                                                      &[] },
)]
fn parses_start_ports(input: &str, expected: &[u16]) {
    assert_eq!(parse_ports(input).unwrap(), expected);
}

#[yare::parameterized(
    bare_port       = { "ports(*):[8080]",                 "8080" },
    second_bare     = { "ports(*):[31000-32000, 8080]",    "8080" },
    trailing_comma  = { "ports(*):[31000-32000,]",         "" },
    word            = { "ports(*):[http]",                 "http" },
)]
fn rejects_tokens_without_dash(input: &str, token: &str) {
    assert_eq!(parse_ports(input), Err(ResourceError::MalformedPortToken(token.to_string())));
}

#[yare::parameterized(
    non_numeric  = { "ports(*):[abc-def]",   "abc-def" },
    missing_low  = { "ports(*):[-8080]",     "-8080" },
    out_of_range = { "ports(*):[70000-70001]", "70000-70001" },
)]
fn rejects_invalid_port_numbers(input: &str, token: &str) {
    match parse_ports(input) {
        Err(ResourceError::InvalidPortNumber { token: t, .. }) => assert_eq!(t, token),
        other => panic!("expected InvalidPortNumber, got {:?}", other),
    }
}

#[test]
fn error_message_names_offending_token() {
    let err = parse_ports("ports(*):[8080]").unwrap_err();
    assert!(err.to_string().contains("\"8080\""));
}

proptest! {
    #[test]
    fn ranges_collapse_to_start_in_order(
        ranges in prop::collection::vec((any::<u16>(), any::<u16>()), 1..20)
    ) {
        let list = ranges.iter().map(|(a, b)| format!("{}-{}", a, b)).collect::<Vec<_>>().join(",");
        let descriptor = format!("cpus(*):1;ports(*):[{}]", list);
        let starts: Vec<u16> = ranges.iter().map(|(a, _)| *a).collect();
        prop_assert_eq!(parse_ports(&descriptor).unwrap(), starts);
    }
}
