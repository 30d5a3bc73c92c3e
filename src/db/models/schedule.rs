//! Content schedule model and scheduling DTOs.
//!
//! A content item has at most one schedule row. The upsert is a single
//! atomic statement over the UNIQUE content_id column, so two concurrent
//! scheduling requests for the same content item can never produce
//! duplicate rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentSchedule {
    pub id: String,
    pub content_id: String,
    pub start_at: String,
    pub end_at: Option<String>,
    pub active: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to schedule (or reschedule) a content item's display window.
#[derive(Debug, Deserialize)]
pub struct UpsertScheduleRequest {
    #[serde(rename = "contentId")]
    pub content_id: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

/// Echoes the requested window, not a read-after-write of the stored row.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertScheduleResponse {
    pub success: bool,
    #[serde(rename = "contentId")]
    pub content_id: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

/// One row of the scheduled-content listing (schedule joined with content).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduledContent {
    pub content_id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduledContentResponse {
    pub scheduled_contents: Vec<ScheduledContent>,
}

impl ContentSchedule {
    pub async fn find_by_content_id(
        db: &SqlitePool,
        content_id: &str,
    ) -> Result<Option<ContentSchedule>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, content_id, start_at, end_at, active, created_at, updated_at
            FROM content_schedules
            WHERE content_id = ?
            "#,
        )
        .bind(content_id)
        .fetch_optional(db)
        .await
    }

    /// Create a schedule row for a content item, or move its display window
    /// if one already exists. The create path activates the schedule; the
    /// update path leaves the active flag untouched.
    pub async fn upsert(
        db: &SqlitePool,
        content_id: &str,
        start: &DateTime<Utc>,
        end: Option<&DateTime<Utc>>,
    ) -> Result<ContentSchedule, sqlx::Error> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        let start_at = start.to_rfc3339();
        let end_at = end.map(|e| e.to_rfc3339());

        sqlx::query(
            r#"
            INSERT INTO content_schedules (id, content_id, start_at, end_at, active, created_at, updated_at)
            VALUES (?, ?, ?, ?, 1, ?, ?)
            ON CONFLICT(content_id) DO UPDATE
            SET start_at = excluded.start_at,
                end_at = excluded.end_at,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&id)
        .bind(content_id)
        .bind(&start_at)
        .bind(&end_at)
        .bind(&now)
        .bind(&now)
        .execute(db)
        .await?;

        Self::find_by_content_id(db, content_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// All active schedules joined with their content, for the kiosk display
    /// listing. Schedules whose content row is missing are excluded by the
    /// inner join.
    pub async fn list_active(db: &SqlitePool) -> Result<Vec<ScheduledContent>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT c.id AS content_id, c.title, c.description,
                   s.start_at AS start_date, s.end_at AS end_date
            FROM content_schedules s
            JOIN contents c ON c.id = s.content_id
            WHERE s.active = 1
            ORDER BY s.start_at ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
