use url::Url;

use super::common_structs::{is_success, MoodResponse};
use super::ApiClient;
use crate::error::{Api, FetchError};

const DEFAULT_FAILURE_MESSAGE: &str = "Failed to get mood";


#[derive(Debug, Clone)]
pub struct MoodService {
    api_client: ApiClient,
    endpoint: Url,
}

impl MoodService {
    pub fn new(api_client: &ApiClient, endpoint: &Url) -> Self {
        Self {
            api_client: api_client.to_owned(),
            endpoint: endpoint.to_owned(),
        }
    }

    /// Asks the mood endpoint for the current mood.
    ///
    /// A "success" envelope without a non-empty `mood` is an application
    /// failure as well.
    pub async fn get_mood(&self) -> Result<String, FetchError> {
        let response: MoodResponse = self.api_client.get_json(Api::Mood, self.endpoint.as_str()).await?;
        let failure = |message: Option<String>| {
            FetchError::Application(message.unwrap_or(DEFAULT_FAILURE_MESSAGE.to_owned()))
        };

        if !is_success(&response.status) {
            return Err(failure(response.message));
        }

        match response.mood {
            Some(mood) if !mood.is_empty() => Ok(mood),
            _ => Err(failure(response.message)),
        }
    }
}
