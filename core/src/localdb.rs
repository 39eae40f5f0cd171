// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod items;
mod lists;

use std::path::Path;

use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::localdb::items::Items;
use crate::localdb::lists::Lists;
use crate::{Error, Item, List, ListId, Result};

#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub lists: Lists,
    pub items: Items,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self> {
        let pool = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
                .foreign_keys(true);

            SqlitePoolOptions::new().connect_with(options).await?
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            let options = SqliteConnectOptions::new()
                .in_memory(true)
                .foreign_keys(true);

            // every connection to `:memory:` is a distinct database, keep exactly one alive
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        };

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        tracing::debug!("ensuring tables in the database");
        let lists = Lists::new(pool.clone());
        let items = Items::new(pool.clone());
        Ok(LocalDb { pool, lists, items })
    }

    /// Creates a list together with its first item in one transaction.
    pub async fn insert_list_with_item(&self, text: &str) -> Result<(List, Item)> {
        let mut tx = self.pool.begin().await?;

        let (list_id,): (ListId,) = sqlx::query_as(lists::INSERT_SQL)
            .fetch_one(&mut *tx)
            .await?;

        let item = Items::insert_with(&mut *tx, list_id, text).await?;

        tx.commit().await?;
        Ok((List::new(list_id), item))
    }

    /// Inserts an item into a list that must already exist.
    ///
    /// A single statement, so concurrent writers only wait on the busy timeout.
    /// The foreign key decides whether the list exists.
    pub async fn insert_item(&self, list_id: ListId, text: &str) -> Result<Item> {
        match self.items.insert(list_id, text).await {
            Ok(item) => Ok(item),
            Err(sqlx::Error::Database(e)) if matches!(e.kind(), ErrorKind::ForeignKeyViolation) => {
                Err(Error::ListNotFound(list_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn close(self) {
        tracing::debug!("closing database connection");
        self.pool.close().await;
    }
}
