//! Recipe search API client.

use std::sync::Arc;

use url::Url;

use crate::config::ApiConfig;
use crate::error::{FetchError, SearchError};
use crate::http::{HttpClient, ReqwestClient};
use crate::rank::Query;
use crate::types::{Candidate, SearchResponse};

use super::genre::Genre;

/// Calls the keyword + category recipe search endpoint.
///
/// Returns whatever candidates the API sent back, possibly none. Ranking is
/// left to the caller.
pub struct RecipeSearchClient {
    http: Arc<dyn HttpClient>,
    config: ApiConfig,
}

impl RecipeSearchClient {
    pub fn new(http: Arc<dyn HttpClient>, config: ApiConfig) -> Self {
        Self { http, config }
    }

    /// Build a client backed by a [`ReqwestClient`] using the config's timeout.
    pub fn from_config(config: ApiConfig) -> Result<Self, SearchError> {
        let http = ReqwestClient::from_config(&config).map_err(FetchError::from)?;
        Ok(Self::new(Arc::new(http), config))
    }

    /// Request URL for a search: `keyword`, optional `categoryId`,
    /// `format=json`, and `applicationId` when a credential is configured.
    pub fn request_url(&self, query: &Query, genre: Option<Genre>) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.config.endpoint, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("keyword", &query.keyword());
            if let Some(genre) = genre {
                pairs.append_pair("categoryId", genre.category_id());
            }
            pairs.append_pair("format", "json");
            if let Some(credential) = &self.config.credential {
                pairs.append_pair("applicationId", credential);
            }
        }

        Ok(url)
    }

    /// Run one search call and return the raw candidate list.
    pub async fn search(
        &self,
        query: &Query,
        genre: Option<Genre>,
    ) -> Result<Vec<Candidate>, SearchError> {
        let url = self.request_url(query, genre)?;

        tracing::debug!(
            keyword = %query.keyword(),
            category = genre.map(|g| g.category_id()),
            "recipe search"
        );

        let body = self.http.get_text(url.as_str()).await?;
        let candidates = parse_search_response(&body)?;

        tracing::debug!(count = candidates.len(), "recipe search returned candidates");
        Ok(candidates)
    }
}

/// Parse a search response body into candidates.
///
/// A missing `result` key means no candidates. Anything that is not a JSON
/// object, or whose `result` is not an array of records, is malformed.
pub fn parse_search_response(body: &str) -> Result<Vec<Candidate>, SearchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SearchError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(SearchError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    let response: SearchResponse = serde_json::from_value(value)
        .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

    Ok(response.result)
}
