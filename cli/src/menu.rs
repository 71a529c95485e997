use anyhow::{Context, Result};
use kondate_core::{create_provider_from_env, search_link, suggest_menu, Menu};

pub async fn menu(ingredients: &str, request: Option<&str>) -> Result<()> {
    let provider = create_provider_from_env().context("Menu suggestion is not configured")?;

    let menu = suggest_menu(provider.as_ref(), ingredients, request)
        .await
        .context("The AI chef could not answer. Please try again.")?;

    if menu.is_empty() {
        println!("No menu could be suggested for that request. Try different conditions.");
        return Ok(());
    }

    print_menu(&menu);
    Ok(())
}

fn print_menu(menu: &Menu) {
    for dish in menu.dishes() {
        println!("{}: {}", dish.dish_type, dish.name);

        println!("  Materials:");
        for material in &dish.materials {
            println!("  - {}", material);
        }

        println!("  Steps:");
        for (i, step) in dish.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }

        println!("  More: {}", search_link(&dish.name));
        println!();
    }
}
