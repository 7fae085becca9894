use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::env_keys::{CONFIG_PATH, MOOD_ENDPOINT, RUN_MODE, SUGGESTION_ENDPOINT};
use crate::error::ConfigError;

const DEFAULT_MOOD_ENDPOINT: &str = "https://moodsnap-mood.onrender.com/mood";
const DEFAULT_SUGGESTION_ENDPOINT: &str = "https://moodsnap-suggestion.onrender.com/suggest";


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    pub fn is_development(&self) -> bool {
        *self == Mode::Development
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}


/// Everything the flow needs to know about the outside world.
///
/// Any key missing from a config file keeps its default, so a file only has
/// to name what it changes:
///
/// ```toml
/// mood_endpoint = "http://localhost:8080/mood"
///
/// [offline_table]
/// happy = ["dance", "smile", "sing"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub mood_endpoint: Url,
    /// Base url; the mood is appended as the last path segment.
    pub suggestion_endpoint: Url,
    pub offline_moods: Vec<String>,
    pub offline_table: HashMap<String, Vec<String>>,
    /// Used for moods with no entry in `offline_table`.
    pub default_suggestions: Vec<String>,
    pub mode: Mode,
}

impl Default for SnapConfig {
    fn default() -> Self {
        let offline_table = [
            ("happy", vec!["dance", "smile", "sing"]),
            ("sad", vec!["listen to music", "call a friend"]),
            ("excited", vec!["go for a walk", "plan adventure"]),
            ("tired", vec!["nap", "drink tea"]),
        ]
        .into_iter()
        .map(|(mood, suggestions)| (mood.to_owned(), suggestions.into_iter().map(str::to_owned).collect()))
        .collect();

        Self {
            mood_endpoint: Url::parse(DEFAULT_MOOD_ENDPOINT).expect("default mood endpoint is a valid url"),
            suggestion_endpoint: Url::parse(DEFAULT_SUGGESTION_ENDPOINT).expect("default suggestion endpoint is a valid url"),
            offline_moods: ["happy", "sad", "excited", "tired"].into_iter().map(str::to_owned).collect(),
            offline_table,
            default_suggestions: vec!["take a deep breath".to_owned(), "go for a short walk".to_owned()],
            mode: Mode::default(),
        }
    }
}

impl SnapConfig {
    /// Defaults, then the config file (`path`, or the one named by
    /// `MOODSNAP_CONFIG`), then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var(CONFIG_PATH).ok();
        let mut config = match path.or(env_path.as_deref().map(Path::new)) {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let conf_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Conf file read from {}", path.display());
        toml::from_str(&conf_str).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(conf_str: &str) -> Result<Self, ConfigError> {
        let config: SnapConfig = toml::from_str(conf_str).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the `MOODSNAP_*` overrides found through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MOOD_ENDPOINT) {
            self.mood_endpoint = parse_endpoint("mood_endpoint", &value)?;
        }
        if let Some(value) = lookup(SUGGESTION_ENDPOINT) {
            self.suggestion_endpoint = parse_endpoint("suggestion_endpoint", &value)?;
        }
        if let Some(value) = lookup(RUN_MODE) {
            self.mode = value.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_scheme("mood_endpoint", &self.mood_endpoint)?;
        check_scheme("suggestion_endpoint", &self.suggestion_endpoint)?;
        if self.offline_moods.iter().all(|mood| mood.trim().is_empty()) {
            return Err(ConfigError::Empty("offline_moods"));
        }
        if self.default_suggestions.is_empty() {
            return Err(ConfigError::Empty("default_suggestions"));
        }
        Ok(())
    }
}

fn parse_endpoint(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|_| ConfigError::InvalidEndpoint {
        key,
        value: value.to_owned(),
    })?;
    check_scheme(key, &url)?;
    Ok(url)
}

fn check_scheme(key: &'static str, url: &Url) -> Result<(), ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidEndpoint {
            key,
            value: url.to_string(),
        }),
    }
}
