// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Superlists - a minimal to-do list web application

use std::error::Error;

use superlists_web::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run().await
}
