//! Menu suggestion prompt.

/// Request used when the user leaves the request field blank.
pub const DEFAULT_REQUEST: &str = "シェフのおまかせ（主菜と副菜を1品ずつ）";

/// Render the menu prompt for the given ingredients and optional request.
pub fn render_menu_prompt(ingredients: &str, request: Option<&str>) -> String {
    let request = request
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_REQUEST);

    format!(
        r#"あなたはレストランのシェフです。【食材】をできるだけ活かして、【ご要望】に合う献立を考えてください。
品数の指定がなければ、主菜1品と副菜1品にしてください。
回答は次の形式のJSONのみとし、説明や挨拶は書かないでください。
各料理には種類(type)、料理名(name)、材料と分量のリスト(materials)、手順のリスト(steps)を含めてください。

{{
  "menu": [
    {{"type": "主菜", "name": "料理名", "materials": ["材料 (分量)"], "steps": ["手順1", "手順2"]}},
    {{"type": "副菜", "name": "料理名", "materials": ["材料 (分量)"], "steps": ["手順1"]}}
  ]
}}

【ご要望】
{request}

【食材】
{ingredients}
"#,
        request = request,
        ingredients = ingredients.trim(),
    )
}
