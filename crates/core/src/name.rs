// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container name generation

/// Generate a container name from a fixed prefix and a random v4 UUID.
///
/// Uniqueness is probabilistic; collisions are not checked.
pub fn generate_name(prefix: &str) -> String {
    format!("{}{}", prefix, uuid::Uuid::new_v4())
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
