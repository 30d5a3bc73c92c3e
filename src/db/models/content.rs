//! Content items displayed by kiosks. Created out-of-band; the scheduling
//! endpoints only reference them.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl Content {
    pub async fn get_by_id(db: &SqlitePool, id: &str) -> Result<Option<Content>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, title, description, created_at
            FROM contents
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &SqlitePool,
        id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Content, sqlx::Error> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO contents (id, title, description, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(&now)
        .execute(db)
        .await?;

        Self::get_by_id(db, id).await?.ok_or(sqlx::Error::RowNotFound)
    }
}
