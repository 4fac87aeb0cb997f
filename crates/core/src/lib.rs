// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mm-core: container request types for the mini-mesos test cluster

pub mod macros;

pub mod container;
pub mod env;
pub mod name;
pub mod resources;

pub use container::{BindMount, ContainerSpec, ImageRef, Link, PortBinding};
pub use env::{AgentEnvironment, AgentSettings};
pub use name::generate_name;
pub use resources::{parse_ports, ResourceError};
