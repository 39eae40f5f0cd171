// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Superlists: to-do lists, their items, and the SQLite store behind them.

mod config;
mod error;
mod list;
mod localdb;
mod superlists;

pub use crate::config::{APP_NAME, Config};
pub use crate::error::{Error, Result};
pub use crate::list::{Item, ItemId, List, ListId, ParseListIdError};
pub use crate::superlists::Superlists;
