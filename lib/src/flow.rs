use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::SnapConfig;
use crate::error::ConfigError;
use crate::service::CommonService;
use crate::state::{Outcome, UiState};

pub const OFFLINE_ADVISORY: &str = "You're in offline mode. Showing a locally picked mood and suggestions.";
pub const CANCELLED_MESSAGE: &str = "The request was cancelled before it finished.";


/// One MoodSnap session: the services plus the state they feed.
///
/// Cloning is cheap and every clone sees the same state, so a renderer can
/// watch `state()` while a fetch is suspended on the network.
#[derive(Debug, Clone)]
pub struct Session {
    service: CommonService,
    state: Arc<Mutex<UiState>>,
}

impl Session {
    pub fn new(config: &SnapConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_service(CommonService::new(config)?))
    }

    pub fn with_service(service: CommonService) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(UiState::default())),
        }
    }

    pub fn service(&self) -> &CommonService {
        &self.service
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub async fn fetch(&self) -> Outcome {
        self.fetch_with_cancel(&CancellationToken::new()).await
    }

    /// Runs one mood + suggestions cycle.
    ///
    /// Returns `Busy` without touching the state when another cycle is in
    /// flight. A cancelled cycle keeps whatever it already published.
    pub async fn fetch_with_cancel(&self, cancel: &CancellationToken) -> Outcome {
        let Some(_loading) = LoadingGuard::acquire(&self.state) else {
            debug!("Fetch ignored, previous fetch still in flight");
            return Outcome::Busy;
        };

        let span = info_span!("fetch", fetch_id = %Uuid::new_v4());
        async {
            let outcome = self.run(cancel).await;
            info!(?outcome, "Fetch finished");
            outcome
        }
        .instrument(span)
        .await
    }

    /// Offline prompt action: switch to offline and show local data.
    pub fn use_offline_mode(&self) -> Outcome {
        let Some(_loading) = LoadingGuard::acquire(&self.state) else {
            return Outcome::Busy;
        };
        self.state.lock().offline = true;
        self.publish_offline()
    }

    /// Offline prompt action: start over against the network.
    pub async fn retry(&self) -> Outcome {
        self.fetch().await
    }

    pub fn toggle_offline(&self) -> Outcome {
        let offline = !self.state.lock().offline;
        self.set_offline(offline)
    }

    /// Going offline publishes local data right away; going online only
    /// flips the toggle, the next fetch uses the network.
    pub fn set_offline(&self, offline: bool) -> Outcome {
        if offline {
            return self.use_offline_mode();
        }

        let mut state = self.state.lock();
        if state.loading {
            return Outcome::Busy;
        }
        state.offline = false;
        state.advisory = None;
        info!("Back online");
        Outcome::BackOnline
    }

    async fn run(&self, cancel: &CancellationToken) -> Outcome {
        if self.state.lock().offline {
            debug!("Offline toggle set, skipping network");
            return self.publish_offline();
        }

        let mood = tokio::select! {
            biased;
            _ = cancel.cancelled() => return self.publish_cancelled(),
            result = self.service.mood.get_mood() => result,
        };
        let mood = match mood {
            Ok(mood) => mood,
            Err(error) => {
                warn!(%error, "Mood request failed, offering offline mode");
                self.state.lock().show_offline_prompt = true;
                return Outcome::PartialFailureOffline;
            }
        };
        info!(%mood, "Mood received");
        self.state.lock().mood = Some(mood.clone());

        let suggestions = tokio::select! {
            biased;
            _ = cancel.cancelled() => return self.publish_cancelled(),
            result = self.service.suggestion.get_suggestions(&mood) => result,
        };
        match suggestions {
            Ok(suggestions) => {
                self.state.lock().suggestions = suggestions;
                Outcome::Success
            }
            Err(error) => {
                warn!(%error, %mood, "Suggestions request failed, using offline suggestions");
                let fallback = self.service.offline.suggestions_for(&mood);
                let mut state = self.state.lock();
                state.suggestions = fallback;
                state.advisory = Some(format!("{error}. Showing offline suggestions for {mood} instead."));
                Outcome::PartialFailureSuggestionsOnly
            }
        }
    }

    fn publish_offline(&self) -> Outcome {
        let (mood, suggestions) = self.service.offline.snap();
        info!(%mood, "Using offline mood");

        let mut state = self.state.lock();
        state.mood = Some(mood);
        state.suggestions = suggestions;
        state.advisory = Some(OFFLINE_ADVISORY.to_owned());
        Outcome::OfflineFallback
    }

    fn publish_cancelled(&self) -> Outcome {
        warn!("Fetch cancelled");
        self.state.lock().error = Some(CANCELLED_MESSAGE.to_owned());
        Outcome::Cancelled
    }
}


/// Holds the loading flag for one invocation and clears it on every exit
/// path, including the future being dropped.
struct LoadingGuard<'a> {
    state: &'a Mutex<UiState>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(state: &'a Mutex<UiState>) -> Option<Self> {
        let mut locked = state.lock();
        if locked.loading {
            return None;
        }
        locked.loading = true;
        locked.reset_for_fetch();
        Some(Self { state })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().loading = false;
    }
}
