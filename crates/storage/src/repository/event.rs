use async_trait::async_trait;

use super::EventRepository;
use crate::Database;
use crate::error::{Result, StorageError};
use crate::models::{Event, EventKey, NewEvent};

#[async_trait]
impl EventRepository for Database {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, event_name, gender, division, scheduled_at
            FROM events
            ORDER BY event_name, division, gender
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(events)
    }

    async fn find_event(&self, key: &EventKey) -> Result<Option<Event>> {
        // IS NOT DISTINCT FROM lets a NULL gender match the Mixed events
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, event_name, gender, division, scheduled_at
            FROM events
            WHERE event_name = $1
              AND division = $2
              AND gender IS NOT DISTINCT FROM $3
            ORDER BY event_id
            LIMIT 1
            "#,
        )
        .bind(key.event_name)
        .bind(key.division)
        .bind(key.gender)
        .fetch_optional(self.pool())
        .await?;

        Ok(event)
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<Event> {
        let stored = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (event_name, gender, division, scheduled_at)
            VALUES ($1, $2, $3, $4)
            RETURNING event_id, event_name, gender, division, scheduled_at
            "#,
        )
        .bind(event.event_name())
        .bind(event.gender())
        .bind(event.division())
        .bind(event.time())
        .fetch_one(self.pool())
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation("Event already exists".to_string())
            } else {
                e
            }
        })?;

        Ok(stored)
    }
}
