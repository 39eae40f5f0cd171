// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tokio::fs;

use crate::list::validate_text;
use crate::localdb::LocalDb;
use crate::{Config, Error, Item, List, ListId, Result};

/// Superlists application core.
///
/// Cheap to clone, every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct Superlists {
    db: LocalDb,
}

impl Superlists {
    /// Creates a new instance backed by the database in the configured state directory.
    pub async fn new(mut config: Config) -> Result<Self> {
        config.normalize()?;

        let path = config
            .database_path()
            .ok_or_else(|| Error::Config("No state directory available for the database".into()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let db = LocalDb::open(Some(&path)).await?;
        Ok(Self { db })
    }

    /// Creates a new instance backed by a private in-memory database.
    pub async fn in_memory() -> Result<Self> {
        let db = LocalDb::open(None).await?;
        Ok(Self { db })
    }

    /// Creates an empty list.
    pub async fn create_list(&self) -> Result<List> {
        Ok(self.db.lists.insert().await?)
    }

    /// Starts a new list whose first item has the given text.
    pub async fn new_list(&self, text: &str) -> Result<(List, Item)> {
        let text = validate_text(text)?;
        let (list, item) = self.db.insert_list_with_item(text).await?;
        tracing::info!(list = %list.id(), item = %item.id(), "new list started");
        Ok((list, item))
    }

    /// Looks up a list, failing with [`Error::ListNotFound`] if it does not exist.
    pub async fn get_list(&self, id: ListId) -> Result<List> {
        self.db
            .lists
            .get(id)
            .await?
            .ok_or(Error::ListNotFound(id))
    }

    /// Appends an item to an existing list.
    pub async fn add_item(&self, list_id: ListId, text: &str) -> Result<Item> {
        let text = validate_text(text)?;
        let item = self.db.insert_item(list_id, text).await?;
        tracing::info!(list = %list_id, item = %item.id(), "item added");
        Ok(item)
    }

    /// Items of the list in the order they were added.
    pub async fn items_of(&self, list_id: ListId) -> Result<Vec<Item>> {
        Ok(self.db.items.list_by(list_id).await?)
    }

    /// Every list, oldest first.
    pub async fn all_lists(&self) -> Result<Vec<List>> {
        Ok(self.db.lists.all().await?)
    }

    /// Every item of every list, oldest first.
    pub async fn all_items(&self) -> Result<Vec<Item>> {
        Ok(self.db.items.all().await?)
    }

    pub async fn count_lists(&self) -> Result<i64> {
        Ok(self.db.lists.count().await?)
    }

    pub async fn count_items(&self) -> Result<i64> {
        Ok(self.db.items.count().await?)
    }

    /// Close the database connections.
    pub async fn close(self) -> Result<()> {
        self.db.close().await;
        Ok(())
    }
}
