//! CLI command for the provider catalog

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::error::OnboardResult;
use crate::providers::ProviderCatalog;

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Provider")]
    name: String,
}

/// List providers, or the suggestions for `query`
pub fn handle_providers_command(
    settings: &Settings,
    query: Option<String>,
    limit: usize,
) -> OnboardResult<()> {
    let catalog = ProviderCatalog::load(settings)?;
    let query = query.unwrap_or_default();
    let matches = catalog.suggest(&query, limit);

    if matches.is_empty() {
        println!("No providers match '{}'.", query);
        return Ok(());
    }

    let rows: Vec<ProviderRow> = matches
        .iter()
        .enumerate()
        .map(|(i, name)| ProviderRow {
            index: i + 1,
            name: name.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));
    println!("Showing {} of {} providers", matches.len(), catalog.len());
    Ok(())
}
