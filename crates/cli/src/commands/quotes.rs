use anyhow::Result;
use quotebook_core::CategorySelection;
use quotebook_service::SyncStatus;

use super::open_service;
use crate::config::Config;

const NO_QUOTES: &str = "No quotes found in this category.";

pub(crate) async fn run_list(config: &Config, category: Option<String>) -> Result<()> {
    let service = open_service(config).await?;
    let view = service.filtered(category.map(CategorySelection::from)).await;
    if view.is_empty() {
        println!("{NO_QUOTES}");
        return Ok(());
    }
    for quote in &view.quotes {
        println!("{quote}");
    }
    Ok(())
}

pub(crate) async fn run_random(config: &Config, category: Option<String>) -> Result<()> {
    let service = open_service(config).await?;
    match service.random(category.map(CategorySelection::from)).await? {
        Some(quote) => println!("{quote}"),
        None => println!("{NO_QUOTES}"),
    }
    Ok(())
}

pub(crate) async fn run_add(config: &Config, text: &str, category: &str) -> Result<()> {
    let service = open_service(config).await?;
    let outcome = service.add(text, category).await?;
    println!("Added {}", outcome.quote);
    match outcome.sync {
        SyncStatus::Synced => println!("Synced with remote."),
        SyncStatus::LocalOnly { error } => println!("Saved locally only: {error}"),
        SyncStatus::Disabled => {},
    }
    Ok(())
}

pub(crate) async fn run_categories(config: &Config) -> Result<()> {
    let service = open_service(config).await?;
    let view = service.categories().await;
    let marker = |selected: bool| if selected { "*" } else { " " };
    println!("{} {}", marker(view.selected.is_all()), CategorySelection::All);
    for category in &view.categories {
        let selected = matches!(&view.selected, CategorySelection::Category(name) if name == category);
        println!("{} {category}", marker(selected));
    }
    Ok(())
}

pub(crate) async fn run_select(config: &Config, category: &str) -> Result<()> {
    let service = open_service(config).await?;
    let selected = service.select(CategorySelection::from(category)).await?;
    println!("Selected category: {selected}");
    Ok(())
}
