//! Persistence seams. [`crate::Database`] implements them against PostgreSQL,
//! [`crate::memory::InMemoryStore`] against in-process tables.

use async_trait::async_trait;

use crate::dto::roster::{RosterEntry, RosterFilter};
use crate::error::Result;
use crate::models::{Bowler, Event, EventKey, NewBowler, NewEvent, Participation};

pub mod bowler;
pub mod event;
pub mod participation;

#[async_trait]
pub trait BowlerRepository: Send + Sync {
    async fn list_bowlers(&self) -> Result<Vec<Bowler>>;

    async fn find_bowler(&self, id: i32) -> Result<Option<Bowler>>;

    /// First bowler (lowest id) whose name matches exactly
    async fn find_bowler_by_name(&self, name: &str) -> Result<Option<Bowler>>;

    /// Replace every attribute of the bowler named `bowler.name`, or insert it
    async fn upsert_bowler(&self, bowler: &NewBowler) -> Result<Bowler>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>>;

    async fn find_event(&self, key: &EventKey) -> Result<Option<Event>>;

    async fn insert_event(&self, event: &NewEvent) -> Result<Event>;
}

#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    async fn create_participation(
        &self,
        bowler_id: i32,
        event_id: i32,
        lane: i32,
    ) -> Result<Participation>;

    /// Participations of the filtered events joined with their bowler, in no
    /// particular order
    async fn roster(&self, filter: &RosterFilter) -> Result<Vec<RosterEntry>>;
}

/// Everything the tournament services need from persistence.
pub trait TournamentStore: BowlerRepository + EventRepository + ParticipationRepository {}

impl<T> TournamentStore for T where T: BowlerRepository + EventRepository + ParticipationRepository {}
