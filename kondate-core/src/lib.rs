pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod menu;
pub mod rank;
pub mod search;
pub mod types;

pub use config::ApiConfig;
pub use error::{ConfigError, FetchError, MenuError, SearchError};
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient};
pub use llm::{create_provider_from_env, LlmError, LlmProvider};
pub use menu::{search_link, suggest_menu};
pub use rank::{rank, MatchScope, Query, Strategy, DEFAULT_RESULT_LIMIT};
pub use search::{find_recipes, Genre, RecipeSearchClient, SearchRequest};
pub use types::{Candidate, Dish, Menu, ScoredCandidate};
