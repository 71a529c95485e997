use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, Result};
use kondate_core::{
    find_recipes, ApiConfig, Candidate, Genre, RecipeSearchClient, SearchError, SearchRequest,
    Strategy,
};

pub struct SearchOptions {
    pub strategy: Strategy,
    pub genre: Option<Genre>,
    pub limit: NonZeroUsize,
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
    pub json: bool,
}

pub async fn search(ingredients: &str, options: SearchOptions) -> Result<()> {
    let mut config = ApiConfig::search_from_env().context("Invalid search configuration")?;
    if let Some(endpoint) = options.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = options.timeout {
        config.timeout = timeout;
    }

    tracing::debug!(endpoint = %config.endpoint, timeout = ?config.timeout, "search config");
    let client = RecipeSearchClient::from_config(config)?;
    let request = SearchRequest::new(ingredients)
        .genre(options.genre)
        .strategy(options.strategy)
        .limit(options.limit);

    let results = match find_recipes(&client, &request).await {
        Ok(results) => results,
        Err(SearchError::EmptyResult) => {
            if options.json {
                println!("[]");
            } else {
                println!("No matching recipes. Try fewer or different ingredients.");
            }
            return Ok(());
        }
        Err(e) => return Err(e).context("Recipe search failed"),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, recipe) in results.iter().enumerate() {
        print_recipe(i + 1, recipe);
    }

    Ok(())
}

fn print_recipe(position: usize, recipe: &Candidate) {
    let title = if recipe.title.is_empty() {
        "(untitled)"
    } else {
        recipe.title.as_str()
    };

    println!("{}. {}", position, title);
    if !recipe.cooking_time.is_empty() {
        println!("   Time: {}", recipe.cooking_time);
    }
    if !recipe.materials.is_empty() {
        println!("   Materials: {}", recipe.materials.join(", "));
    }
    if !recipe.url.is_empty() {
        println!("   {}", recipe.url);
    }
    println!();
}
