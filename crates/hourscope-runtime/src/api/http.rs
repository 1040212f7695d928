use hourscope_types::{
    AnalysisResult, ErrorBody, SearchResponse, SubredditName, SubredditSuggestion,
};
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ApiError, ApiResult, SubredditApi};
use crate::error::Result;

/// [`SubredditApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl SubredditApi for HttpApi {
    async fn search(&self, query: &str) -> ApiResult<Vec<SubredditSuggestion>> {
        let response: SearchResponse = self.get_json("subreddit/search", &[("q", query)]).await?;
        Ok(response.results)
    }

    async fn analyze(
        &self,
        subreddit: &SubredditName,
        timezone: &str,
    ) -> ApiResult<AnalysisResult> {
        let path = format!("subreddit/{}/analysis", subreddit);
        self.get_json(&path, &[("timezone", timezone)]).await
    }
}
