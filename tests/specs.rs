//! Behavioral specs for mini-mesos cluster provisioning.
//!
//! Each spec drives the public API end to end against a fake container
//! runtime and asserts on the requests it receives.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/cluster/mod.rs"]
mod cluster;
