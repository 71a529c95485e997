//! Parsing of the model's menu response.

use crate::error::MenuError;
use crate::types::Menu;

/// Remove every "```json" and "```" marker, then trim.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a (possibly fenced) model response into a [`Menu`].
///
/// Dishes without a name are dropped.
pub fn parse_menu(text: &str) -> Result<Menu, MenuError> {
    let cleaned = strip_code_fences(text);
    let mut menu: Menu = serde_json::from_str(&cleaned)
        .map_err(|e| MenuError::MalformedResponse(e.to_string()))?;

    menu.menu.retain(|dish| !dish.name.trim().is_empty());
    Ok(menu)
}
