use reqwest::header::ACCEPT;

use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::SubmitError;

/// Thin async wrapper over the `/search` endpoint. Posts the form snapshot
/// URL-encoded and decodes the JSON reply. Any failure to come back with a
/// well-formed JSON body over a 2xx status is a transport error; no
/// distinction is kept between connect failures, error statuses and parse
/// failures.
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> SearchClient {
        let base_url = base_url.into();
        SearchClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SubmitError> {
        let url = format!("{}/search", self.base_url);
        log::debug!("posting search to {url}");

        let res = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(request.fields())
            .send()
            .await
            .map_err(|e| {
                log::error!("search request failed, error: {:#}", e);
                SubmitError::Transport
            })?;

        if !res.status().is_success() {
            log::error!("search returned status {}", res.status());
            return Err(SubmitError::Transport);
        }

        res.json::<SearchResponse>().await.map_err(|e| {
            log::error!("error decoding search response, error: {:#}", e);
            SubmitError::Transport
        })
    }
}
