// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::{SqliteExecutor, SqlitePool};

use crate::{Item, ListId};

const INSERT_SQL: &str = "\
INSERT INTO items (text, list_id)
VALUES (?, ?)
RETURNING id, text, list_id;
";

#[derive(Debug, Clone)]
pub struct Items {
    pool: SqlitePool,
}

impl Items {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, list_id: ListId, text: &str) -> Result<Item, sqlx::Error> {
        Self::insert_with(&self.pool, list_id, text).await
    }

    /// Inserts on the given executor, so callers can run it inside a transaction.
    pub(super) async fn insert_with<'e, E>(
        executor: E,
        list_id: ListId,
        text: &str,
    ) -> Result<Item, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let item: Item = sqlx::query_as(INSERT_SQL)
            .bind(text)
            .bind(list_id)
            .fetch_one(executor)
            .await?;

        tracing::debug!(id = %item.id(), %list_id, "item created");
        Ok(item)
    }

    /// Items of one list, oldest first.
    pub async fn list_by(&self, list_id: ListId) -> Result<Vec<Item>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, text, list_id
FROM items
WHERE list_id = ?
ORDER BY id;
";

        sqlx::query_as(SQL)
            .bind(list_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn all(&self) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as("SELECT id, text, list_id FROM items ORDER BY id;")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items;")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::localdb::LocalDb;

    use super::*;

    async fn setup_test_db() -> LocalDb {
        LocalDb::open(None)
            .await
            .expect("Failed to create test database")
    }

    #[tokio::test]
    async fn items_insert_returns_stored_item() {
        // Arrange
        let db = setup_test_db().await;
        let list = db.lists.insert().await.unwrap();

        // Act
        let item = db.items.insert(list.id(), "Buy peacock feathers").await.unwrap();

        // Assert
        assert_eq!(item.text(), "Buy peacock feathers");
        assert_eq!(item.list_id(), list.id());
        assert_eq!(db.items.all().await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn items_insert_rejects_unknown_list() {
        // Arrange
        let db = setup_test_db().await;

        // Act
        let result = db.items.insert(ListId::from(7), "dangling").await;

        // Assert
        assert!(result.is_err());
        assert_eq!(db.items.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn items_list_by_filters_by_list() {
        // Arrange
        let db = setup_test_db().await;
        let correct = db.lists.insert().await.unwrap();
        db.items.insert(correct.id(), "itemey 1").await.unwrap();
        db.items.insert(correct.id(), "itemey 2").await.unwrap();

        let other = db.lists.insert().await.unwrap();
        db.items.insert(other.id(), "other list item 1").await.unwrap();
        db.items.insert(other.id(), "other list item 2").await.unwrap();

        // Act
        let items = db.items.list_by(correct.id()).await.unwrap();

        // Assert
        let texts: Vec<_> = items.iter().map(Item::text).collect();
        assert_eq!(texts, ["itemey 1", "itemey 2"]);
        assert!(items.iter().all(|a| a.list_id() == correct.id()));
        assert_eq!(db.items.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn items_list_by_keeps_insertion_order_across_lists() {
        // Arrange
        let db = setup_test_db().await;
        let a = db.lists.insert().await.unwrap();
        let b = db.lists.insert().await.unwrap();
        db.items.insert(a.id(), "a1").await.unwrap();
        db.items.insert(b.id(), "b1").await.unwrap();
        db.items.insert(a.id(), "a2").await.unwrap();

        // Act
        let items = db.items.list_by(a.id()).await.unwrap();

        // Assert
        let texts: Vec<_> = items.iter().map(Item::text).collect();
        assert_eq!(texts, ["a1", "a2"]);
    }
}
