// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Identifier of a to-do list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct ListId(i64);

impl ListId {
    /// The raw database identifier.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Path of the page showing the list, e.g. `/lists/3/`.
    pub fn url(self) -> String {
        format!("/lists/{self}/")
    }
}

impl From<i64> for ListId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = ParseListIdError;

    /// Only plain decimal digits are accepted, no sign and no whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseListIdError(s.to_owned()));
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ParseListIdError(s.to_owned()))
    }
}

/// The string is not a valid list identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid list id: {0:?}")]
pub struct ParseListIdError(String);

/// Identifier of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// The raw database identifier.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do list. It carries nothing but its identity; the items point at it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct List {
    id: ListId,
}

impl List {
    pub(crate) fn new(id: ListId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    /// Path of the page showing this list, e.g. `/lists/3/`.
    pub fn url(&self) -> String {
        self.id.url()
    }
}

/// A single entry of a to-do list.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    id: ItemId,
    text: String,
    list_id: ListId,
}

impl Item {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The list this item belongs to.
    pub fn list_id(&self) -> ListId {
        self.list_id
    }
}

/// Rejects text that would render as an empty entry.
pub(crate) fn validate_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        Err(Error::EmptyItemText)
    } else {
        Ok(text)
    }
}
