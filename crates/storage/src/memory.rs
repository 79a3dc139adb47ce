//! In-process [`TournamentStore`](crate::TournamentStore) backed by plain
//! tables behind a `tokio` lock. Ids are assigned sequentially from 1.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::dto::roster::{RosterEntry, RosterFilter};
use crate::error::{Result, StorageError};
use crate::models::{Bowler, Event, EventKey, NewBowler, NewEvent, Participation};
use crate::repository::{BowlerRepository, EventRepository, ParticipationRepository};

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    bowlers: Vec<Bowler>,
    events: Vec<Event>,
    participations: Vec<Participation>,
}

fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `events`; duplicate keys are skipped.
    pub fn with_events(events: impl IntoIterator<Item = NewEvent>) -> Self {
        let mut tables = Tables::default();
        for event in events {
            if tables.events.iter().any(|e| e.key() == event.key()) {
                continue;
            }
            let id = next_id(tables.events.len());
            tables.events.push(event.into_event(id));
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl BowlerRepository for InMemoryStore {
    async fn list_bowlers(&self) -> Result<Vec<Bowler>> {
        Ok(self.tables.read().await.bowlers.clone())
    }

    async fn find_bowler(&self, id: i32) -> Result<Option<Bowler>> {
        let tables = self.tables.read().await;
        Ok(tables.bowlers.iter().find(|b| b.bowler_id == id).cloned())
    }

    async fn find_bowler_by_name(&self, name: &str) -> Result<Option<Bowler>> {
        let tables = self.tables.read().await;
        Ok(tables.bowlers.iter().find(|b| b.name == name).cloned())
    }

    async fn upsert_bowler(&self, bowler: &NewBowler) -> Result<Bowler> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables.bowlers.iter_mut().find(|b| b.name == bowler.name) {
            *existing = bowler.clone().into_bowler(existing.bowler_id);
            return Ok(existing.clone());
        }

        let stored = bowler.clone().into_bowler(next_id(tables.bowlers.len()));
        tables.bowlers.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let mut events = self.tables.read().await.events.clone();
        events.sort_by_key(|e| (e.event_name, e.division, e.gender));
        Ok(events)
    }

    async fn find_event(&self, key: &EventKey) -> Result<Option<Event>> {
        let tables = self.tables.read().await;
        Ok(tables.events.iter().find(|e| e.key() == *key).cloned())
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<Event> {
        let mut tables = self.tables.write().await;

        if tables.events.iter().any(|e| e.key() == event.key()) {
            return Err(StorageError::ConstraintViolation(
                "Event already exists".to_string(),
            ));
        }

        let stored = event.clone().into_event(next_id(tables.events.len()));
        tables.events.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryStore {
    async fn create_participation(
        &self,
        bowler_id: i32,
        event_id: i32,
        lane: i32,
    ) -> Result<Participation> {
        let mut tables = self.tables.write().await;

        let bowler_exists = tables.bowlers.iter().any(|b| b.bowler_id == bowler_id);
        let event_exists = tables.events.iter().any(|e| e.event_id == event_id);
        if !bowler_exists || !event_exists {
            return Err(StorageError::ConstraintViolation(
                "Participation must reference an existing bowler and event".to_string(),
            ));
        }

        let participation = Participation {
            participation_id: next_id(tables.participations.len()),
            bowler_id,
            event_id,
            lane,
            score: None,
        };
        tables.participations.push(participation.clone());
        Ok(participation)
    }

    async fn roster(&self, filter: &RosterFilter) -> Result<Vec<RosterEntry>> {
        let tables = self.tables.read().await;

        let entries = tables
            .participations
            .iter()
            .filter_map(|p| {
                let bowler = tables.bowlers.iter().find(|b| b.bowler_id == p.bowler_id)?;
                let event = tables.events.iter().find(|e| e.event_id == p.event_id)?;
                Some((p, bowler, event))
            })
            .filter(|(_, _, event)| event.event_name == filter.event_name)
            .filter(|(_, _, event)| {
                filter.divisions.is_empty() || filter.divisions.contains(&event.division)
            })
            .filter(|(_, _, event)| filter.gender.is_none() || event.gender == filter.gender)
            .map(|(p, bowler, event)| RosterEntry {
                bowler_id: bowler.bowler_id,
                participation_id: p.participation_id,
                name: bowler.name.clone(),
                gender: bowler.gender,
                average: bowler.average,
                lane: p.lane,
                division: event.division,
            })
            .collect();

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_events;
    use crate::models::{EventName, Gender};

    fn store() -> InMemoryStore {
        InMemoryStore::with_events(standard_events().unwrap())
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_replaces() {
        let store = store();

        let mut bowler = NewBowler::new("Ada Pin", Gender::F, 180);
        bowler.is_senior = true;
        bowler.is_in_all_events = true;
        let first = store.upsert_bowler(&bowler).await.unwrap();

        let replacement = NewBowler::new("Ada Pin", Gender::F, 195);
        let second = store.upsert_bowler(&replacement).await.unwrap();

        assert_eq!(first.bowler_id, second.bowler_id);
        assert_eq!(second.average, 195);
        assert!(!second.is_senior);
        assert!(!second.is_in_all_events);
        assert_eq!(store.list_bowlers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_event_matches_null_gender_for_mixed() {
        let store = store();

        let key = EventKey::for_bowler(EventName::Mixed, 2, Gender::M);
        let event = store.find_event(&key).await.unwrap().unwrap();
        assert_eq!(event.event_name, EventName::Mixed);
        assert_eq!(event.division, 2);
        assert_eq!(event.gender, None);
    }

    #[tokio::test]
    async fn test_insert_event_rejects_duplicate_key() {
        let store = store();
        let duplicate = NewEvent::new(EventName::Team, 1, Some(Gender::M)).unwrap();

        let result = store.insert_event(&duplicate).await;
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_participation_requires_existing_rows() {
        let store = store();

        let result = store.create_participation(99, 1, 4).await;
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_list_events_is_ordered() {
        let store = store();
        let events = store.list_events().await.unwrap();

        assert_eq!(events.len(), 54);
        assert_eq!(events[0].event_name, EventName::Classic);
        assert_eq!(events[0].division, 1);
        assert_eq!(events[0].gender, Some(Gender::M));
        assert_eq!(events.last().unwrap().event_name, EventName::Singles);
    }
}
