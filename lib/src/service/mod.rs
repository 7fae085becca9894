pub mod common_structs;
pub mod mood_service;
pub mod offline_service;
pub mod suggestion_service;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::SnapConfig;
use crate::error::{Api, ConfigError, FetchError};


#[derive(Debug, Clone)]
pub struct CommonService {
    pub mood: mood_service::MoodService,
    pub suggestion: suggestion_service::SuggestionService,
    pub offline: offline_service::OfflineService,
}

impl CommonService {
    pub fn new(config: &SnapConfig) -> Result<Self, ConfigError> {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &SnapConfig, client: Client) -> Result<Self, ConfigError> {
        let api_client = ApiClient::new(client);

        Ok(Self {
            mood: mood_service::MoodService::new(&api_client, &config.mood_endpoint),
            suggestion: suggestion_service::SuggestionService::new(&api_client, &config.suggestion_endpoint),
            offline: offline_service::OfflineService::new(config)?,
        })
    }
}


/// Shared JSON GET plumbing for both remote endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(client: Client) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self { client, headers }
    }

    /// GETs `url` and decodes the body as `T`.
    ///
    /// The HTTP status is checked before the body is read, so an error page
    /// from a proxy is reported as `Http`, not `Decode`.
    pub async fn get_json<T: DeserializeOwned>(&self, api: Api, url: &str) -> Result<T, FetchError> {
        debug!(%url, "Fetching {} from {}", api, url);
        let response = self.client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport { api, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http(api, status));
        }

        let body_string = response.text().await.map_err(|source| FetchError::Transport { api, source })?;
        debug!(response_body = %body_string, "{} API response", api);
        let body = serde_json::from_str::<Value>(&body_string).map_err(|source| FetchError::Decode { api, source })?;
        decode_envelope(api, body)
    }
}

// Derived struct decoding would also fill fields from an array by position.
pub(crate) fn decode_envelope<T: DeserializeOwned>(api: Api, body: Value) -> Result<T, FetchError> {
    let found = match &body {
        Value::Object(_) => return serde_json::from_value::<T>(body).map_err(|source| FetchError::Decode { api, source }),
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    };
    Err(FetchError::NotAnObject { api, found })
}
