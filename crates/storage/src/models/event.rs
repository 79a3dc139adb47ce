use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Gender;
use crate::error::{InvalidEnum, Result, StorageError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "event_name")]
pub enum EventName {
    Classic,
    Mixed,
    Team,
    Doubles,
    Singles,
}

const EVENT_NAMES: &[(&str, EventName)] = &[
    ("Classic", EventName::Classic),
    ("Mixed", EventName::Mixed),
    ("Team", EventName::Team),
    ("Doubles", EventName::Doubles),
    ("Singles", EventName::Singles),
];

impl EventName {
    pub const ALL: [EventName; 5] = [
        EventName::Classic,
        EventName::Mixed,
        EventName::Team,
        EventName::Doubles,
        EventName::Singles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Mixed => "Mixed",
            Self::Team => "Team",
            Self::Doubles => "Doubles",
            Self::Singles => "Singles",
        }
    }

    /// Mixed events are shared by both genders and never carry one.
    pub fn is_gendered(&self) -> bool {
        !matches!(self, Self::Mixed)
    }
}

impl FromStr for EventName {
    type Err = InvalidEnum;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        super::lookup(EVENT_NAMES, "event name", s)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: i32,
    pub event_name: EventName,
    pub gender: Option<Gender>,
    pub division: i32,
    pub scheduled_at: Option<NaiveDateTime>,
}

impl Event {
    pub fn key(&self) -> EventKey {
        EventKey {
            event_name: self.event_name,
            division: self.division,
            gender: self.gender,
        }
    }
}

/// Natural key of an event: `(name, division, gender)` for gendered events,
/// `(name, division)` with no gender for Mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub event_name: EventName,
    pub division: i32,
    pub gender: Option<Gender>,
}

impl EventKey {
    /// Key of the event a bowler of `gender` competes in; the bowler's gender
    /// selects the bracket unless the event is Mixed.
    pub fn for_bowler(event_name: EventName, division: i32, gender: Gender) -> Self {
        Self {
            event_name,
            division,
            gender: event_name.is_gendered().then_some(gender),
        }
    }
}

/// An event that has not been stored yet. Only constructible through
/// [`NewEvent::new`], which enforces the gender coupling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    event_name: EventName,
    gender: Option<Gender>,
    division: i32,
    scheduled_at: Option<NaiveDateTime>,
}

impl NewEvent {
    pub fn new(event_name: EventName, division: i32, gender: Option<Gender>) -> Result<Self> {
        if division <= 0 {
            return Err(StorageError::InvalidEvent(format!(
                "division must be positive, got {division}"
            )));
        }

        match (event_name.is_gendered(), gender) {
            (true, None) => Err(StorageError::InvalidEvent(format!(
                "{event_name} events require a gender"
            ))),
            (false, Some(g)) => Err(StorageError::InvalidEvent(format!(
                "{event_name} events cannot have a gender, got {g}"
            ))),
            _ => Ok(Self {
                event_name,
                gender,
                division,
                scheduled_at: None,
            }),
        }
    }

    pub fn scheduled_at(mut self, time: NaiveDateTime) -> Self {
        self.scheduled_at = Some(time);
        self
    }

    pub fn event_name(&self) -> EventName {
        self.event_name
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn division(&self) -> i32 {
        self.division
    }

    pub fn time(&self) -> Option<NaiveDateTime> {
        self.scheduled_at
    }

    pub fn key(&self) -> EventKey {
        EventKey {
            event_name: self.event_name,
            division: self.division,
            gender: self.gender,
        }
    }

    pub fn into_event(self, event_id: i32) -> Event {
        Event {
            event_id,
            event_name: self.event_name,
            gender: self.gender,
            division: self.division,
            scheduled_at: self.scheduled_at,
        }
    }
}
