use std::sync::Arc;

use axum::extract::FromRef;
use storage::TournamentStore;

use crate::mail::MailSender;

pub type Store = Arc<dyn TournamentStore>;
pub type Mailer = Arc<dyn MailSender>;

/// Shared handles injected into every request
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub mailer: Mailer,
}

impl AppState {
    pub fn new(
        store: impl TournamentStore + 'static,
        mailer: impl MailSender + 'static,
    ) -> Self {
        Self {
            store: Arc::new(store),
            mailer: Arc::new(mailer),
        }
    }
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Mailer {
    fn from_ref(state: &AppState) -> Self {
        state.mailer.clone()
    }
}
