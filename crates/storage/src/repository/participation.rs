use async_trait::async_trait;
use sqlx::QueryBuilder;

use super::ParticipationRepository;
use crate::Database;
use crate::dto::roster::{RosterEntry, RosterFilter};
use crate::error::{Result, StorageError};
use crate::models::Participation;

#[async_trait]
impl ParticipationRepository for Database {
    async fn create_participation(
        &self,
        bowler_id: i32,
        event_id: i32,
        lane: i32,
    ) -> Result<Participation> {
        let participation = sqlx::query_as::<_, Participation>(
            r#"
            INSERT INTO participations (bowler_id, event_id, lane)
            VALUES ($1, $2, $3)
            RETURNING participation_id, bowler_id, event_id, lane, score
            "#,
        )
        .bind(bowler_id)
        .bind(event_id)
        .bind(lane)
        .fetch_one(self.pool())
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                StorageError::ConstraintViolation(
                    "Participation must reference an existing bowler and event".to_string(),
                )
            } else {
                e
            }
        })?;

        Ok(participation)
    }

    async fn roster(&self, filter: &RosterFilter) -> Result<Vec<RosterEntry>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT b.bowler_id, p.participation_id, b.name, b.gender, b.average,
                   p.lane, e.division
            FROM participations p
            INNER JOIN bowlers b ON p.bowler_id = b.bowler_id
            INNER JOIN events e ON p.event_id = e.event_id
            WHERE e.event_name = "#,
        );
        query.push_bind(filter.event_name);

        if !filter.divisions.is_empty() {
            query.push(" AND e.division = ANY(");
            query.push_bind(filter.divisions.clone());
            query.push(")");
        }

        // Mixed events have a NULL gender, so this filter leaves them empty
        if let Some(gender) = filter.gender {
            query.push(" AND e.gender = ");
            query.push_bind(gender);
        }

        query.push(" ORDER BY p.lane, p.participation_id");

        let entries = query
            .build_query_as::<RosterEntry>()
            .fetch_all(self.pool())
            .await?;

        Ok(entries)
    }
}
