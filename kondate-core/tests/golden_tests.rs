//! Golden file tests for recipe ranking.
//!
//! Each JSON file in `fixtures/ranking/` holds a query, a strategy, the raw
//! candidate records as the search API returns them, and the expected titles
//! in output order.

use kondate_core::rank::{MatchScope, Query, Strategy};
use kondate_core::Candidate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    #[allow(dead_code)]
    description: String,
    query: String,
    strategy: String,
    #[serde(default)]
    match_scope: Option<String>,
    candidates: Vec<Candidate>,
    expected: Vec<String>,
}

impl TestCase {
    fn parsed_strategy(&self) -> Strategy {
        match self.strategy.as_str() {
            "ranked" => Strategy::Ranked,
            "all-keywords" => {
                let scope: MatchScope = self
                    .match_scope
                    .as_deref()
                    .expect("all-keywords fixtures must set match_scope")
                    .parse()
                    .expect("invalid match_scope");
                Strategy::AllKeywords(scope)
            }
            other => panic!("unknown strategy {}", other),
        }
    }
}

/// Load all test cases from the fixtures directory
fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ranking");

    let mut cases = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).expect("Failed to read fixtures directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            let case: TestCase = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
            cases.push((name, case));
        }
    }

    assert!(
        !cases.is_empty(),
        "No test fixtures found in {:?}",
        fixtures_dir
    );
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn test_ranking_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {}", name);

        let query = Query::parse(&case.query);
        let results = case.parsed_strategy().apply(case.candidates.clone(), &query);
        let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();

        assert_eq!(titles, case.expected, "Result mismatch for {}", name);

        // Running the same inputs again must give the same answer.
        let again = case.parsed_strategy().apply(case.candidates.clone(), &query);
        assert_eq!(results, again, "Non-deterministic output for {}", name);
    }
}
