// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

fn main() {
    // migrations are embedded by `sqlx::migrate!`, rebuild when the schema changes
    println!("cargo:rerun-if-changed=src/localdb/migrations");
}
