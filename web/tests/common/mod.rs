// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for HTTP tests.

use axum_test::TestServer;
use superlists_core::Superlists;
use superlists_web::router;

/// Starts an in-process server over a fresh in-memory database.
///
/// The returned core shares its database with the server, so tests can seed
/// and inspect data directly.
pub async fn test_server() -> (TestServer, Superlists) {
    let app = Superlists::in_memory()
        .await
        .expect("Failed to open in-memory database");
    let server = TestServer::new(router(app.clone())).expect("Failed to start test server");
    (server, app)
}
