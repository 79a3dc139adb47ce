use storage::{
    TournamentStore,
    dto::roster::{RosterEntry, RosterFilter},
    error::Result,
    models::{Event, EventName, Gender},
};

/// List the seeded events
pub async fn list_events(store: &dyn TournamentStore) -> Result<Vec<Event>> {
    store.list_events().await
}

/// Roster of an event name, optionally narrowed to some divisions and one
/// gender, ordered by lane.
///
/// Names are matched case-insensitively and an unknown name or gender is an
/// error rather than an empty roster. Mixed events carry no gender, so a
/// gender filter on Mixed always yields an empty roster.
pub async fn roster_for(
    store: &dyn TournamentStore,
    event: &str,
    divisions: &[i32],
    gender: Option<&str>,
) -> Result<Vec<RosterEntry>> {
    let event_name: EventName = event.parse()?;
    let gender = gender
        .filter(|g| !g.is_empty())
        .map(str::parse::<Gender>)
        .transpose()?;

    let filter = RosterFilter {
        event_name,
        divisions: divisions.to_vec(),
        gender,
    };

    let mut entries = store.roster(&filter).await?;
    entries.sort_by_key(|entry| (entry.lane, entry.participation_id));

    Ok(entries)
}
