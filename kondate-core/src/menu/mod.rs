//! AI menu suggestion.
//!
//! Ingredients and an optional request go into a prompt, the model's answer
//! is stripped of code fences and parsed as a [`Menu`].

mod parse;
mod prompt;

pub use parse::{parse_menu, strip_code_fences};
pub use prompt::{render_menu_prompt, DEFAULT_REQUEST};

use url::form_urlencoded;

use crate::error::MenuError;
use crate::llm::LlmProvider;
use crate::types::Menu;

/// Search engine used for "find this dish on the web" links.
pub const WEB_SEARCH_URL: &str = "https://www.google.com/search";

/// Ask the model for a menu built from `ingredients`.
///
/// Blank ingredients are rejected before any call is made.
pub async fn suggest_menu(
    provider: &dyn LlmProvider,
    ingredients: &str,
    request: Option<&str>,
) -> Result<Menu, MenuError> {
    if ingredients.trim().is_empty() {
        return Err(MenuError::MissingIngredients);
    }

    let prompt = render_menu_prompt(ingredients, request);
    let response = provider
        .complete_checked(&prompt, &|text: &str| parse_menu(text).is_ok())
        .await?;
    let menu = parse_menu(&response)?;

    tracing::info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        dishes = menu.dishes().len(),
        "menu suggested"
    );

    Ok(menu)
}

/// Web search URL for "{dish_name} レシピ", spaces encoded as `+`.
pub fn search_link(dish_name: &str) -> String {
    let query = format!("{} レシピ", dish_name);
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}?q={}", WEB_SEARCH_URL, encoded)
}
