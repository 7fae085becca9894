/// Per-session view state. Only the flow writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub mood: Option<String>,
    pub suggestions: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Non-error notice shown next to the results.
    pub advisory: Option<String>,
    pub offline: bool,
    pub show_offline_prompt: bool,
}

impl UiState {
    // the toggle survives, everything a fetch produces does not
    pub fn reset_for_fetch(&mut self) {
        self.mood = None;
        self.suggestions.clear();
        self.error = None;
        self.advisory = None;
        self.show_offline_prompt = false;
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}


/// How a single invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Mood and suggestions both came from the network.
    Success,
    /// The mood call failed; the offline prompt is showing.
    PartialFailureOffline,
    /// Mood came from the network, suggestions from the offline table.
    PartialFailureSuggestionsOnly,
    /// Offline toggle was set; nothing touched the network.
    OfflineFallback,
    /// Switched back to online; nothing was fetched.
    BackOnline,
    Cancelled,
    /// Refused because another invocation is still in flight.
    Busy,
}
