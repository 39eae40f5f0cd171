// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.

use std::path::PathBuf;

use superlists_core::{Config, Superlists};
use tempfile::TempDir;

/// Opens a fresh instance on a private in-memory database.
pub async fn in_memory() -> Superlists {
    Superlists::in_memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Creates a configuration whose state directory lives inside `dir`.
#[must_use]
pub fn test_config(dir: &TempDir) -> Config {
    Config {
        state_dir: Some(state_dir(dir)),
    }
}

#[must_use]
pub fn state_dir(dir: &TempDir) -> PathBuf {
    dir.path().join("state")
}
