use std::fmt;

use thiserror::Error;


/// Which remote endpoint a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Mood,
    Suggestions,
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Api::Mood => write!(f, "Mood"),
            Api::Suggestions => write!(f, "Suggestions"),
        }
    }
}


/// Classified failure of a single remote call.
///
/// Every variant is caught at the flow boundary and turned into either the
/// offline prompt or an advisory; none of them escape a fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx HTTP status.
    #[error("{api} API error: {status_line}")]
    Http {
        api: Api,
        status: u16,
        status_line: String,
    },

    #[error("{api} API unreachable: {source}")]
    Transport {
        api: Api,
        #[source]
        source: reqwest::Error,
    },

    /// 2xx response whose body is not the expected JSON envelope.
    #[error("{api} API returned an unreadable body: {source}")]
    Decode {
        api: Api,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not an object envelope (e.g. a bare array).
    #[error("{api} API returned {found} where an object was expected")]
    NotAnObject {
        api: Api,
        found: &'static str,
    },

    /// JSON `status` other than "success". Carries the server `message`
    /// or a default text.
    #[error("{0}")]
    Application(String),
}

impl FetchError {
    pub(crate) fn http(api: Api, status: reqwest::StatusCode) -> Self {
        let status_line = format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or(""));
        FetchError::Http {
            api,
            status: status.as_u16(),
            status_line: status_line.trim_end().to_owned(),
        }
    }
}


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {key}: {value}")]
    InvalidEndpoint {
        key: &'static str,
        value: String,
    },

    #[error("unknown mode {0:?}, expected development or production")]
    UnknownMode(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_reads_like_a_status_line() {
        let error = FetchError::http(Api::Mood, reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error.to_string(), "Mood API error: 503 Service Unavailable");

        let error = FetchError::http(Api::Suggestions, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Suggestions API error: 500 Internal Server Error");
    }

    #[test]
    fn unknown_reason_phrase_is_dropped() {
        let status = reqwest::StatusCode::from_u16(599).unwrap();
        let error = FetchError::http(Api::Mood, status);
        assert_eq!(error.to_string(), "Mood API error: 599");
    }

    #[test]
    fn application_error_is_the_message() {
        let error = FetchError::Application("Failed to get mood".to_owned());
        assert_eq!(error.to_string(), "Failed to get mood");
    }
}
