use std::collections::HashMap;

use rand::Rng;

use crate::config::SnapConfig;
use crate::error::ConfigError;


/// Local stand-in for both endpoints.
#[derive(Debug, Clone)]
pub struct OfflineService {
    moods: Vec<String>,
    table: HashMap<String, Vec<String>>,
    default_suggestions: Vec<String>,
}

impl OfflineService {
    pub fn new(config: &SnapConfig) -> Result<Self, ConfigError> {
        let moods: Vec<String> = config
            .offline_moods
            .iter()
            .filter(|mood| !mood.trim().is_empty())
            .cloned()
            .collect();
        if moods.is_empty() {
            return Err(ConfigError::Empty("offline_moods"));
        }
        if config.default_suggestions.is_empty() {
            return Err(ConfigError::Empty("default_suggestions"));
        }

        Ok(Self {
            moods,
            table: config.offline_table.clone(),
            default_suggestions: config.default_suggestions.clone(),
        })
    }

    pub fn moods(&self) -> &[String] {
        &self.moods
    }

    pub fn pick_mood(&self) -> String {
        self.pick_mood_with(&mut rand::thread_rng())
    }

    // uniform over the configured set
    pub fn pick_mood_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let index = rng.gen_range(0..self.moods.len());
        self.moods[index].clone()
    }

    pub fn suggestions_for(&self, mood: &str) -> Vec<String> {
        self.table
            .get(mood)
            .cloned()
            .unwrap_or_else(|| self.default_suggestions.clone())
    }

    /// A random mood together with its local suggestions.
    pub fn snap(&self) -> (String, Vec<String>) {
        let mood = self.pick_mood();
        let suggestions = self.suggestions_for(&mood);
        (mood, suggestions)
    }
}


#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn mapped_moods_use_the_table() {
        let offline = OfflineService::new(&SnapConfig::default()).unwrap();
        assert_eq!(offline.suggestions_for("happy"), vec!["dance", "smile", "sing"]);
        assert_eq!(offline.suggestions_for("sad"), vec!["listen to music", "call a friend"]);
    }

    #[test]
    fn unmapped_moods_get_the_default_pair() {
        let offline = OfflineService::new(&SnapConfig::default()).unwrap();
        assert_eq!(offline.suggestions_for("bored"), vec!["take a deep breath", "go for a short walk"]);
        assert_eq!(offline.suggestions_for("Happy"), offline.suggestions_for("bored"));
    }

    #[test]
    fn picks_cover_the_whole_set() {
        let offline = OfflineService::new(&SnapConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen: HashMap<String, usize> = HashMap::new();
        for _ in 0..400 {
            *seen.entry(offline.pick_mood_with(&mut rng)).or_default() += 1;
        }

        assert_eq!(seen.len(), 4);
        for mood in offline.moods() {
            assert!(seen[mood] > 50, "{mood} picked only {} times", seen[mood]);
        }
    }

    #[test]
    fn snap_pairs_mood_with_its_suggestions() {
        let offline = OfflineService::new(&SnapConfig::default()).unwrap();
        let (mood, suggestions) = offline.snap();
        assert!(offline.moods().contains(&mood));
        assert_eq!(suggestions, offline.suggestions_for(&mood));
    }

    #[test]
    fn blank_moods_are_ignored() {
        let config = SnapConfig {
            offline_moods: vec![" ".to_owned(), "calm".to_owned()],
            ..SnapConfig::default()
        };
        let offline = OfflineService::new(&config).unwrap();
        assert_eq!(offline.moods(), ["calm".to_owned()]);
    }

    #[test]
    fn empty_sets_are_rejected() {
        let config = SnapConfig {
            offline_moods: vec![],
            ..SnapConfig::default()
        };
        assert!(matches!(OfflineService::new(&config), Err(ConfigError::Empty("offline_moods"))));
    }
}
