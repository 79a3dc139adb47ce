use storage::{
    TournamentStore,
    dto::bowler::UpsertBowlerRequest,
    error::Result,
    models::Bowler,
};

/// List all bowlers
pub async fn list_bowlers(store: &dyn TournamentStore) -> Result<Vec<Bowler>> {
    store.list_bowlers().await
}

/// Get a bowler by id, `None` when it does not exist
pub async fn get_bowler(store: &dyn TournamentStore, id: i32) -> Result<Option<Bowler>> {
    store.find_bowler(id).await
}

/// Create the bowler, or overwrite every attribute of the bowler with the same name
pub async fn upsert_bowler(
    store: &dyn TournamentStore,
    request: &UpsertBowlerRequest,
) -> Result<Bowler> {
    let bowler = request.to_new_bowler()?;
    let stored = store.upsert_bowler(&bowler).await?;

    tracing::info!(
        bowler_id = stored.bowler_id,
        name = %stored.name,
        "Bowler upserted"
    );

    Ok(stored)
}
