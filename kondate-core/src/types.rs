use serde::{Deserialize, Serialize};

/// One recipe record returned by the recipe search API.
///
/// Every field may be absent in the response; absent fields degrade to
/// empty values so scoring can still run on whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, rename = "recipeTitle")]
    pub title: String,
    #[serde(default, rename = "recipeMaterial")]
    pub materials: Vec<String>,
    #[serde(default, rename = "recipeUrl")]
    pub url: String,
    #[serde(default, rename = "recipeDescription")]
    pub description: String,
    #[serde(default)]
    pub cooking_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_indication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_cost: Option<String>,
}

impl Candidate {
    pub fn new(title: impl Into<String>, materials: &[&str]) -> Self {
        Self {
            title: title.into(),
            materials: materials.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }
}

/// A candidate paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: usize,
}

/// Body of a recipe search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub result: Vec<Candidate>,
}

/// One dish in a suggested menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Course type, e.g. "主菜" or "副菜".
    #[serde(rename = "type", default = "default_dish_type")]
    pub dish_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

fn default_dish_type() -> String {
    "一品".to_string()
}

/// A suggested menu: the dishes the model proposed, in its order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub menu: Vec<Dish>,
}

impl Menu {
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.menu
    }
}
