use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::{EventName, Gender};

/// Raw roster query string: `?event=team&div=1&div=2&gender=m`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterQuery {
    /// Event name, case-insensitive
    pub event: String,
    /// Divisions to include; repeat the parameter for several
    #[serde(default)]
    pub div: Vec<i32>,
    /// `M` or `F`, case-insensitive; omit for every gender
    pub gender: Option<String>,
}

/// Parsed roster filter handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFilter {
    pub event_name: EventName,
    /// Empty means every division
    pub divisions: Vec<i32>,
    pub gender: Option<Gender>,
}

/// One bowler on the roster of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RosterEntry {
    pub bowler_id: i32,
    pub participation_id: i32,
    pub name: String,
    pub gender: Gender,
    pub average: i32,
    pub lane: i32,
    pub division: i32,
}
