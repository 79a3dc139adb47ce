use storage::{
    StorageError, TournamentStore,
    error::Result,
    models::{EventKey, EventName},
};

/// Place the bowler named `bowler_name` on `lane` in the event selected by
/// `event_name`, `division` and the bowler's own gender (ignored for Mixed).
///
/// Returns the id of the new participation. Enrolling twice with the same
/// arguments creates two participations.
pub async fn enroll(
    store: &dyn TournamentStore,
    bowler_name: &str,
    event_name: EventName,
    division: i32,
    lane: i32,
) -> Result<i32> {
    let bowler = store
        .find_bowler_by_name(bowler_name)
        .await?
        .ok_or_else(|| {
            tracing::warn!(bowler_name, "Enrollment for unknown bowler");
            StorageError::NotFound("bowler")
        })?;

    let key = EventKey::for_bowler(event_name, division, bowler.gender);
    let event = store.find_event(&key).await?.ok_or_else(|| {
        tracing::warn!(%event_name, division, "Enrollment for unknown event");
        StorageError::NotFound("event")
    })?;

    let participation = store
        .create_participation(bowler.bowler_id, event.event_id, lane)
        .await?;

    tracing::info!(
        participation_id = participation.participation_id,
        bowler_id = bowler.bowler_id,
        event_id = event.event_id,
        lane,
        "Bowler enrolled"
    );

    Ok(participation.participation_id)
}
