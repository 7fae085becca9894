pub static CONFIG_PATH: &str = "MOODSNAP_CONFIG";

pub static MOOD_ENDPOINT: &str = "MOODSNAP_MOOD_ENDPOINT";
pub static SUGGESTION_ENDPOINT: &str = "MOODSNAP_SUGGESTION_ENDPOINT";

// development | production
pub static RUN_MODE: &str = "MOODSNAP_ENV";
