// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::ListId;

/// Errors raised by the Superlists core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No list with the given identifier exists.
    #[error("List not found: {0}")]
    ListNotFound(ListId),

    /// Item text was empty or whitespace only.
    #[error("You can't have an empty list item")]
    EmptyItemText,

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migrations could not be applied.
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Invalid or unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure while preparing the state directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_))
    }
}

/// Result type used across the Superlists core.
pub type Result<T, E = Error> = std::result::Result<T, E>;
