use url::Url;

use super::common_structs::{is_success, SuggestionResponse};
use super::ApiClient;
use crate::error::{Api, FetchError};
use crate::utilities::encode_path_segment;

const DEFAULT_FAILURE_MESSAGE: &str = "Failed to get suggestions";


#[derive(Debug, Clone)]
pub struct SuggestionService {
    api_client: ApiClient,
    endpoint: Url,
}

impl SuggestionService {
    pub fn new(api_client: &ApiClient, endpoint: &Url) -> Self {
        Self {
            api_client: api_client.to_owned(),
            endpoint: endpoint.to_owned(),
        }
    }

    // <base>/<url encoded mood>
    pub fn suggestions_url(&self, mood: &str) -> String {
        format!("{}/{}", self.endpoint.as_str().trim_end_matches('/'), encode_path_segment(mood))
    }

    pub async fn get_suggestions(&self, mood: &str) -> Result<Vec<String>, FetchError> {
        let url = self.suggestions_url(mood);
        let response: SuggestionResponse = self.api_client.get_json(Api::Suggestions, &url).await?;

        if !is_success(&response.status) {
            return Err(FetchError::Application(
                response.message.unwrap_or(DEFAULT_FAILURE_MESSAGE.to_owned()),
            ));
        }

        Ok(response.suggestion_list())
    }
}
