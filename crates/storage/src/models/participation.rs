use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One bowler placed on a lane within one event instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participation {
    pub participation_id: i32,
    pub bowler_id: i32,
    pub event_id: i32,
    pub lane: i32,
    pub score: Option<i32>,
}
