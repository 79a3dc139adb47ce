use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Event, EventName, Gender};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i32,
    pub event_name: EventName,
    pub gender: Option<Gender>,
    pub division: i32,
    pub time: Option<NaiveDateTime>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.event_id,
            event_name: event.event_name,
            gender: event.gender,
            division: event.division,
            time: event.scheduled_at,
        }
    }
}
