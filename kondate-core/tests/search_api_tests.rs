//! Recipe search against a local HTTP server.
//!
//! Exercises the real reqwest client end to end: query parameters, status
//! handling, timeouts and response parsing.

use std::sync::Arc;
use std::time::Duration;

use kondate_core::http::ReqwestClient;
use kondate_core::{
    find_recipes, ApiConfig, FetchError, Genre, MatchScope, RecipeSearchClient, SearchError,
    SearchRequest, Strategy,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/services/api/Recipe/CategoryRanking/20170426";

fn recipes() -> serde_json::Value {
    json!({
        "result": [
            {
                "recipeTitle": "豚肉の生姜焼き",
                "recipeMaterial": ["豚肉", "生姜", "醤油"],
                "recipeUrl": "https://recipe.test/1",
                "recipeDescription": "ご飯がすすむ",
                "cookingTime": "約15分"
            },
            {
                "recipeTitle": "豚肉と玉ねぎの炒め物",
                "recipeMaterial": ["豚肉", "玉ねぎ"],
                "recipeUrl": "https://recipe.test/2",
                "recipeDescription": "簡単",
                "cookingTime": "約10分"
            },
            {
                "recipeTitle": "鯖の味噌煮",
                "recipeMaterial": ["鯖", "味噌"],
                "recipeUrl": "https://recipe.test/3",
                "recipeDescription": "定番",
                "cookingTime": "約30分"
            }
        ]
    })
}

fn search_client(server: &MockServer, timeout: Duration) -> RecipeSearchClient {
    let config = ApiConfig::new(format!("{}{}", server.uri(), SEARCH_PATH))
        .with_credential("test-app-id")
        .with_timeout(timeout);
    let http = ReqwestClient::builder()
        .rate_limit_ms(0)
        .timeout(timeout)
        .build()
        .unwrap();
    RecipeSearchClient::new(Arc::new(http), config)
}

#[tokio::test]
async fn test_search_sends_params_and_ranks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("keyword", "豚肉 玉ねぎ"))
        .and(query_param("categoryId", "31"))
        .and(query_param("format", "json"))
        .and(query_param("applicationId", "test-app-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipes()))
        .expect(1)
        .mount(&server)
        .await;

    let client = search_client(&server, Duration::from_secs(5));
    let request = SearchRequest::new("豚肉 玉ねぎ").genre(Some(Genre::Meat));
    let results = find_recipes(&client, &request).await.unwrap();

    let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["豚肉と玉ねぎの炒め物", "豚肉の生姜焼き"]);
    assert_eq!(results[0].cooking_time, "約10分");
}

#[tokio::test]
async fn test_strict_filter_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipes()))
        .mount(&server)
        .await;

    let client = search_client(&server, Duration::from_secs(5));
    let request = SearchRequest::new("豚肉 玉ねぎ")
        .strategy(Strategy::AllKeywords(MatchScope::Title));
    let results = find_recipes(&client, &request).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "豚肉と玉ねぎの炒め物");
}

#[tokio::test]
async fn test_empty_api_result_is_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .mount(&server)
        .await;

    let client = search_client(&server, Duration::from_secs(5));
    let err = find_recipes(&client, &SearchRequest::new("鶏肉"))
        .await
        .unwrap_err();
    assert!(err.is_empty_result());
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "wrong_parameter",
            "error_description": "specify valid applicationId"
        })))
        .mount(&server)
        .await;

    let client = search_client(&server, Duration::from_secs(5));
    let err = find_recipes(&client, &SearchRequest::new("鶏肉"))
        .await
        .unwrap_err();

    match err {
        SearchError::Network(FetchError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("wrong_parameter"));
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = search_client(&server, Duration::from_secs(5));
    let err = find_recipes(&client, &SearchRequest::new("鶏肉"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(recipes())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = search_client(&server, Duration::from_millis(100));
    let err = find_recipes(&client, &SearchRequest::new("豚肉"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::Network(FetchError::RequestFailed(_))
    ));
}
