use async_trait::async_trait;

use super::BowlerRepository;
use crate::Database;
use crate::error::Result;
use crate::models::{Bowler, NewBowler};

const BOWLER_COLUMNS: &str = "bowler_id, name, gender, average, is_senior, is_vet, \
                              is_in_all_events, is_in_senior_all_events";

#[async_trait]
impl BowlerRepository for Database {
    async fn list_bowlers(&self) -> Result<Vec<Bowler>> {
        let bowlers = sqlx::query_as::<_, Bowler>(&format!(
            "SELECT {BOWLER_COLUMNS} FROM bowlers ORDER BY bowler_id"
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(bowlers)
    }

    async fn find_bowler(&self, id: i32) -> Result<Option<Bowler>> {
        let bowler = sqlx::query_as::<_, Bowler>(&format!(
            "SELECT {BOWLER_COLUMNS} FROM bowlers WHERE bowler_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(bowler)
    }

    async fn find_bowler_by_name(&self, name: &str) -> Result<Option<Bowler>> {
        let bowler = sqlx::query_as::<_, Bowler>(&format!(
            "SELECT {BOWLER_COLUMNS} FROM bowlers WHERE name = $1 ORDER BY bowler_id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(bowler)
    }

    async fn upsert_bowler(&self, bowler: &NewBowler) -> Result<Bowler> {
        let mut tx = self.pool().begin().await?;

        let existing: Option<i32> = sqlx::query_scalar(
            "SELECT bowler_id FROM bowlers WHERE name = $1 ORDER BY bowler_id LIMIT 1 FOR UPDATE",
        )
        .bind(&bowler.name)
        .fetch_optional(&mut *tx)
        .await?;

        let stored = match existing {
            Some(id) => {
                sqlx::query_as::<_, Bowler>(&format!(
                    r#"
                    UPDATE bowlers
                    SET gender = $2,
                        average = $3,
                        is_senior = $4,
                        is_vet = $5,
                        is_in_all_events = $6,
                        is_in_senior_all_events = $7
                    WHERE bowler_id = $1
                    RETURNING {BOWLER_COLUMNS}
                    "#
                ))
                .bind(id)
                .bind(bowler.gender)
                .bind(bowler.average)
                .bind(bowler.is_senior)
                .bind(bowler.is_vet)
                .bind(bowler.is_in_all_events)
                .bind(bowler.is_in_senior_all_events)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as::<_, Bowler>(&format!(
                    r#"
                    INSERT INTO bowlers (name, gender, average, is_senior, is_vet,
                                         is_in_all_events, is_in_senior_all_events)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING {BOWLER_COLUMNS}
                    "#
                ))
                .bind(&bowler.name)
                .bind(bowler.gender)
                .bind(bowler.average)
                .bind(bowler.is_senior)
                .bind(bowler.is_vet)
                .bind(bowler.is_in_all_events)
                .bind(bowler.is_in_senior_all_events)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;

        Ok(stored)
    }
}
