// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::{List, ListId};

pub(super) const INSERT_SQL: &str = "INSERT INTO lists DEFAULT VALUES RETURNING id;";

const GET_SQL: &str = "SELECT id FROM lists WHERE id = ?;";

#[derive(Debug, Clone)]
pub struct Lists {
    pool: SqlitePool,
}

impl Lists {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self) -> Result<List, sqlx::Error> {
        let (id,): (ListId,) = sqlx::query_as(INSERT_SQL).fetch_one(&self.pool).await?;
        tracing::debug!(%id, "list created");
        Ok(List::new(id))
    }

    pub async fn get(&self, id: ListId) -> Result<Option<List>, sqlx::Error> {
        sqlx::query_as(GET_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn all(&self) -> Result<Vec<List>, sqlx::Error> {
        sqlx::query_as("SELECT id FROM lists ORDER BY id;")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists;")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
