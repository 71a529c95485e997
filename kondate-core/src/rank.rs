//! Relevance scoring and filtering of recipe search results.
//!
//! Two policies are available:
//! - [`rank`]: score each candidate by how many query tokens appear in its
//!   title and materials, drop zero scores, sort by score descending.
//! - [`filter_all_keywords`]: keep only candidates containing every token,
//!   in their original order.
//!
//! Matching is a case-sensitive substring test. Tokens are not normalized.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::types::{Candidate, ScoredCandidate};

/// Number of results shown when the caller does not ask for a limit.
pub const DEFAULT_RESULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => panic!("default limit must be non-zero"),
};

/// Whitespace-separated keyword tokens from one user input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Split `text` on Unicode whitespace (this includes the ideographic space).
    /// Duplicates are kept.
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined with single spaces, as sent to the search API.
    pub fn keyword(&self) -> String {
        self.tokens.join(" ")
    }
}

/// The string a candidate is matched against: title followed by every material.
pub fn search_target(candidate: &Candidate) -> String {
    let mut target = candidate.title.clone();
    for material in &candidate.materials {
        target.push_str(material);
    }
    target
}

/// Number of query tokens contained in the candidate's search target.
pub fn score(candidate: &Candidate, query: &Query) -> usize {
    count_matches(&search_target(candidate), query)
}

fn count_matches(target: &str, query: &Query) -> usize {
    query
        .tokens
        .iter()
        .filter(|token| target.contains(token.as_str()))
        .count()
}

/// Pair every candidate with its score, in input order.
pub fn score_candidates(candidates: Vec<Candidate>, query: &Query) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|candidate| {
            let score = score(&candidate, query);
            ScoredCandidate { candidate, score }
        })
        .collect()
}

/// Scored candidates with score > 0, highest score first.
///
/// Equal scores keep their input order. An empty query yields nothing.
pub fn rank_scored(candidates: Vec<Candidate>, query: &Query) -> Vec<ScoredCandidate> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredCandidate> = score_candidates(candidates, query)
        .into_iter()
        .filter(|s| s.score > 0)
        .collect();
    // sort_by is stable; do not add a secondary key.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Ranked result set without the scores.
pub fn rank(candidates: Vec<Candidate>, query: &Query) -> Vec<Candidate> {
    rank_scored(candidates, query)
        .into_iter()
        .map(|s| s.candidate)
        .collect()
}

/// Which candidate fields the all-keywords filter looks at.
///
/// Product variants disagree here, so the caller has to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchScope {
    #[default]
    Title,
    TitleAndMaterials,
}

impl MatchScope {
    fn target(self, candidate: &Candidate) -> String {
        match self {
            MatchScope::Title => candidate.title.clone(),
            MatchScope::TitleAndMaterials => search_target(candidate),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchScope::Title => "title",
            MatchScope::TitleAndMaterials => "title-and-materials",
        }
    }
}

impl fmt::Display for MatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(MatchScope::Title),
            "title-and-materials" => Ok(MatchScope::TitleAndMaterials),
            other => Err(format!("unknown match scope: {}", other)),
        }
    }
}

/// Keep candidates that contain every query token, in input order.
///
/// An empty query yields nothing, same as [`rank`].
pub fn filter_all_keywords(
    candidates: Vec<Candidate>,
    query: &Query,
    scope: MatchScope,
) -> Vec<Candidate> {
    if query.is_empty() {
        return Vec::new();
    }

    candidates
        .into_iter()
        .filter(|candidate| {
            let target = scope.target(candidate);
            query.tokens.iter().all(|t| target.contains(t.as_str()))
        })
        .collect()
}

/// Selectable relevance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Score, drop zero scores, sort by score descending.
    #[default]
    Ranked,
    /// Require every token; no ranking.
    AllKeywords(MatchScope),
}

impl Strategy {
    pub fn apply(&self, candidates: Vec<Candidate>, query: &Query) -> Vec<Candidate> {
        match self {
            Strategy::Ranked => rank(candidates, query),
            Strategy::AllKeywords(scope) => filter_all_keywords(candidates, query, *scope),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Ranked => "ranked",
            Strategy::AllKeywords(_) => "all-keywords",
        }
    }
}

/// Keep at most `limit` leading results.
pub fn truncate(mut results: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.title.as_str()).collect()
    }

    fn sample() -> Vec<Candidate> {
        vec![
            Candidate::new("豚肉の生姜焼き", &["豚肉", "生姜"]),
            Candidate::new("野菜炒め", &["豚肉", "玉ねぎ"]),
        ]
    }

    #[test]
    fn test_query_parse() {
        let query = Query::parse("  豚肉 玉ねぎ\t豚肉　生姜 ");
        assert_eq!(query.tokens(), &["豚肉", "玉ねぎ", "豚肉", "生姜"]);
        assert_eq!(query.keyword(), "豚肉 玉ねぎ 豚肉 生姜");
        assert!(Query::parse("   ").is_empty());
    }

    #[test]
    fn test_rank_orders_by_score() {
        let query = Query::parse("豚肉 玉ねぎ");
        let scored = rank_scored(sample(), &query);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].candidate.title, "野菜炒め");
        assert_eq!(scored[0].score, 2);
        assert_eq!(scored[1].candidate.title, "豚肉の生姜焼き");
        assert_eq!(scored[1].score, 1);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(rank(sample(), &Query::parse("")).is_empty());
        assert!(filter_all_keywords(sample(), &Query::default(), MatchScope::Title).is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        assert!(rank(Vec::new(), &Query::parse("豚肉")).is_empty());
    }

    #[test]
    fn test_zero_scores_dropped() {
        let query = Query::parse("鮭");
        assert!(rank(sample(), &query).is_empty());

        let query = Query::parse("生姜 鶏肉");
        for scored in rank_scored(sample(), &query) {
            assert!(scored.score >= 1);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            Candidate::new("C", &["卵"]),
            Candidate::new("A", &["卵", "ねぎ"]),
            Candidate::new("B", &["卵"]),
            Candidate::new("D", &["卵"]),
        ];
        let ranked = rank(candidates, &Query::parse("卵 ねぎ"));
        assert_eq!(titles(&ranked), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let query = Query::parse("豚肉 玉ねぎ 生姜");
        assert_eq!(rank(sample(), &query), rank(sample(), &query));
    }

    #[test]
    fn test_duplicate_tokens_count_twice() {
        let candidate = Candidate::new("豚汁", &["豚肉"]);
        assert_eq!(score(&candidate, &Query::parse("豚肉 豚肉")), 2);
    }

    #[test]
    fn test_case_sensitive() {
        let candidate = Candidate::new("Tomato Pasta", &[]);
        assert_eq!(score(&candidate, &Query::parse("tomato")), 0);
        assert_eq!(score(&candidate, &Query::parse("Tomato")), 1);
    }

    #[test]
    fn test_missing_fields_degrade() {
        let no_materials = Candidate::new("鶏の照り焼き", &[]);
        assert_eq!(score(&no_materials, &Query::parse("鶏 醤油")), 1);

        let no_title = Candidate::new("", &["醤油", "みりん"]);
        assert_eq!(score(&no_title, &Query::parse("鶏 醤油")), 1);
    }

    #[test]
    fn test_match_spans_title_and_material_boundary() {
        // Title and materials are concatenated without a separator.
        let candidate = Candidate::new("サラダ", &["玉ねぎ"]);
        assert_eq!(search_target(&candidate), "サラダ玉ねぎ");
        assert_eq!(score(&candidate, &Query::parse("ダ玉")), 1);
    }

    #[test]
    fn test_strict_filter_title_only() {
        let candidates = vec![
            Candidate::new("豚肉の生姜焼き", &["豚肉", "玉ねぎ"]),
            Candidate::new("豚肉と玉ねぎの炒め物", &["豚肉"]),
        ];
        let kept = filter_all_keywords(candidates, &Query::parse("豚肉 玉ねぎ"), MatchScope::Title);
        assert_eq!(titles(&kept), vec!["豚肉と玉ねぎの炒め物"]);
    }

    #[test]
    fn test_strict_filter_with_materials() {
        let candidates = vec![
            Candidate::new("豚肉の生姜焼き", &["豚肉", "玉ねぎ"]),
            Candidate::new("豚肉と玉ねぎの炒め物", &["豚肉"]),
            Candidate::new("生姜焼き", &["生姜"]),
        ];
        let kept = filter_all_keywords(
            candidates,
            &Query::parse("豚肉 玉ねぎ"),
            MatchScope::TitleAndMaterials,
        );
        assert_eq!(titles(&kept), vec!["豚肉の生姜焼き", "豚肉と玉ねぎの炒め物"]);
    }

    #[test]
    fn test_strategy_apply() {
        let query = Query::parse("豚肉 玉ねぎ");
        let ranked = Strategy::Ranked.apply(sample(), &query);
        assert_eq!(titles(&ranked), vec!["野菜炒め", "豚肉の生姜焼き"]);

        let strict = Strategy::AllKeywords(MatchScope::TitleAndMaterials).apply(sample(), &query);
        assert_eq!(titles(&strict), vec!["野菜炒め"]);
    }

    #[test]
    fn test_truncate() {
        let many: Vec<Candidate> = (0..8).map(|i| Candidate::new(i.to_string(), &[])).collect();
        assert_eq!(truncate(many.clone(), DEFAULT_RESULT_LIMIT.get()).len(), 5);
        assert_eq!(truncate(many, 20).len(), 8);
    }

    #[test]
    fn test_match_scope_from_str() {
        assert_eq!("title".parse::<MatchScope>(), Ok(MatchScope::Title));
        assert_eq!(
            "title-and-materials".parse::<MatchScope>(),
            Ok(MatchScope::TitleAndMaterials)
        );
        assert!("materials".parse::<MatchScope>().is_err());
    }
}
