use chrono::{DateTime, Local};

use crate::config::Mode;
use crate::state::{Phase, UiState};
use crate::utilities::format_last_updated;

pub const TITLE: &str = "MoodSnap";
pub const SNAP_LABEL: &str = "Snap Mood & Activity";
pub const LOADING_LABEL: &str = "Loading...";
pub const OFFLINE_PROMPT: &str = "Couldn't reach the mood service. Use offline mode or try again?";


#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: Mode,
    /// Shown in the debug panel.
    pub now: DateTime<Local>,
}

impl RenderOptions {
    pub fn new(mode: Mode) -> Self {
        Self { mode, now: Local::now() }
    }
}


/// Plain-text view of `state`. Pure: the same inputs always give the same text.
pub fn render(state: &UiState, options: &RenderOptions) -> String {
    let label = match state.phase() {
        Phase::Loading => LOADING_LABEL,
        Phase::Idle => SNAP_LABEL,
    };
    let network = if state.offline { "offline" } else { "online" };
    let mut out = format!("{TITLE}\n[ {label} ]  ({network})\n");

    if let Some(error) = &state.error {
        out.push_str(&format!("\nError: {error}\n"));
    }

    if state.show_offline_prompt {
        out.push_str(&format!("\n{OFFLINE_PROMPT}\n[ Use offline mode ]  [ Retry ]\n"));
    }

    if let Some(advisory) = &state.advisory {
        out.push_str(&format!("\n{advisory}\n"));
    }

    if let Some(mood) = state.mood.as_deref().filter(|mood| !mood.is_empty()) {
        out.push_str(&format!("\nCurrent Mood: {mood}\n"));
    }

    if !state.suggestions.is_empty() {
        let items: String = state
            .suggestions
            .iter()
            .map(|suggestion| format!("  - {suggestion}\n"))
            .collect();
        out.push_str(&format!("\nSuggested Activities:\n{items}"));
    }

    if options.mode.is_development() {
        out.push_str(&format!(
            "\nDebug Info\nEnvironment: {}\nLast updated: {}\n",
            options.mode,
            format_last_updated(&options.now)
        ));
    }

    out
}


#[cfg(test)]
mod tests {
    use super::*;

    fn production() -> RenderOptions {
        RenderOptions::new(Mode::Production)
    }

    #[test]
    fn idle_view_is_just_the_button() {
        let text = render(&UiState::default(), &production());
        assert_eq!(text, "MoodSnap\n[ Snap Mood & Activity ]  (online)\n");
    }

    #[test]
    fn shows_mood_and_suggestions_in_order() {
        let state = UiState {
            mood: Some("happy".to_owned()),
            suggestions: vec!["Go for a walk".to_owned(), "Call a friend".to_owned()],
            ..UiState::default()
        };
        let text = render(&state, &production());

        assert!(text.contains("Current Mood: happy"));
        let walk = text.find("  - Go for a walk").unwrap();
        let call = text.find("  - Call a friend").unwrap();
        assert!(walk < call);
    }

    #[test]
    fn full_view_layout() {
        let state = UiState {
            mood: Some("sad".to_owned()),
            suggestions: vec!["nap".to_owned(), "drink tea".to_owned()],
            advisory: Some("using offline suggestions".to_owned()),
            ..UiState::default()
        };
        assert_eq!(
            render(&state, &production()),
            "MoodSnap\n[ Snap Mood & Activity ]  (online)\n\
             \nusing offline suggestions\n\
             \nCurrent Mood: sad\n\
             \nSuggested Activities:\n  - nap\n  - drink tea\n"
        );
    }

    #[test]
    fn loading_swaps_the_button_label() {
        let state = UiState {
            loading: true,
            ..UiState::default()
        };
        let text = render(&state, &production());
        assert!(text.contains(LOADING_LABEL));
        assert!(!text.contains(SNAP_LABEL));
    }

    #[test]
    fn prompt_replaces_the_error_panel() {
        let state = UiState {
            show_offline_prompt: true,
            ..UiState::default()
        };
        let text = render(&state, &production());
        assert!(text.contains(OFFLINE_PROMPT));
        assert!(!text.contains("Error:"));
        assert!(!text.contains("Current Mood"));
        assert!(!text.contains("Suggested Activities"));
    }

    #[test]
    fn debug_panel_only_in_development() {
        assert!(!render(&UiState::default(), &production()).contains("Debug Info"));

        let text = render(&UiState::default(), &RenderOptions::new(Mode::Development));
        assert!(text.contains("Debug Info"));
        assert!(text.contains("Environment: development"));
        assert!(text.contains("Last updated: "));
    }

    #[test]
    fn offline_state_is_labelled() {
        let state = UiState {
            offline: true,
            advisory: Some("offline notice".to_owned()),
            ..UiState::default()
        };
        let text = render(&state, &production());
        assert!(text.contains("(offline)"));
        assert!(text.contains("offline notice"));
    }
}
