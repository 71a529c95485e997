//! Recipe search and re-ranking.
//!
//! One call to the search API, then client-side relevance filtering with
//! the selected [`Strategy`], then truncation.

mod client;
mod genre;

pub use client::{parse_search_response, RecipeSearchClient};
pub use genre::Genre;

use std::num::NonZeroUsize;

use crate::error::SearchError;
use crate::rank::{self, Query, Strategy, DEFAULT_RESULT_LIMIT};
use crate::types::Candidate;

/// Parameters of one user search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: Query,
    pub genre: Option<Genre>,
    pub strategy: Strategy,
    pub limit: NonZeroUsize,
}

impl SearchRequest {
    pub fn new(ingredients: &str) -> Self {
        Self {
            query: Query::parse(ingredients),
            genre: None,
            strategy: Strategy::default(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn genre(mut self, genre: Option<Genre>) -> Self {
        self.genre = genre;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Maximum number of results.
    pub fn limit(mut self, limit: NonZeroUsize) -> Self {
        self.limit = limit;
        self
    }
}

/// Search, filter and truncate.
///
/// Returns [`SearchError::EmptyResult`] when nothing survives. A blank
/// query can never match, so it short-circuits to `EmptyResult` without a
/// network call.
pub async fn find_recipes(
    client: &RecipeSearchClient,
    request: &SearchRequest,
) -> Result<Vec<Candidate>, SearchError> {
    if request.query.is_empty() {
        tracing::debug!("blank query, skipping recipe search");
        return Err(SearchError::EmptyResult);
    }

    let candidates = client.search(&request.query, request.genre).await?;
    let fetched = candidates.len();

    let matched = request.strategy.apply(candidates, &request.query);
    let results = rank::truncate(matched, request.limit.get());

    tracing::info!(
        strategy = request.strategy.name(),
        fetched,
        returned = results.len(),
        "recipe search finished"
    );

    if results.is_empty() {
        return Err(SearchError::EmptyResult);
    }
    Ok(results)
}
