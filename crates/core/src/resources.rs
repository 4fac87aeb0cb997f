// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Port extraction from agent resource descriptors.
//!
//! A descriptor such as `cpus(*):0.5;mem(*):256;ports(*):[31000-32000,8080-8080]`
//! declares port ranges inside a `ports(role):[...]` clause. Each range
//! collapses to its start port.

use regex::Regex;
use std::num::ParseIntError;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches `ports(<role>):[<list>]` and captures the list.
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PORTS_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ports\([^)]+\):\[([^\]]*)\]").expect("constant regex pattern is valid")
});

/// Errors from parsing the `ports` clause of a resource descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("port binding {0:?} is incorrect: expected a start-end range")]
    MalformedPortToken(String),
    #[error("port binding {token:?} has an invalid port number: {source}")]
    InvalidPortNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Extract the start port of every range in the descriptor's `ports` clause.
///
/// Returns an empty list when there is no `ports` clause or it is empty.
/// A token without a `-` is rejected even if it is a valid port number.
pub fn parse_ports(resources: &str) -> Result<Vec<u16>, ResourceError> {
    let Some(list) = PORTS_CLAUSE.captures(resources).and_then(|c| c.get(1)) else {
        return Ok(Vec::new());
    };
    if list.as_str().trim().is_empty() {
        return Ok(Vec::new());
    }

    list.as_str().split(',').map(parse_range_start).collect()
}

fn parse_range_start(token: &str) -> Result<u16, ResourceError> {
    let token = token.trim();
    let Some((start, _end)) = token.split_once('-') else {
        return Err(ResourceError::MalformedPortToken(token.to_string()));
    };
    start
        .parse::<u16>()
        .map_err(|source| ResourceError::InvalidPortNumber { token: token.to_string(), source })
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
