//! `jewel catalog`: show tracks and prize categories

use crate::catalog::Catalog;
use crate::error::Result;
use colored::Colorize;
use prettytable::{row, Table};

/// Prints the catalog as a table or as JSON
///
/// # Arguments
///
/// * `catalog` - Catalog to print
/// * `json` - Print pretty JSON instead of tables
///
/// # Errors
///
/// Returns error if JSON serialization fails
pub fn show_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", catalog_json(catalog)?);
        return Ok(());
    }

    println!("\n{}", "Tracks".bold());
    for track in catalog.tracks() {
        println!("  - {}", track);
    }

    println!("\n{}\n", "Prize categories".bold());
    prize_table(catalog).printstd();
    println!();
    Ok(())
}

/// Pretty JSON form of the catalog
pub fn catalog_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

fn prize_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Category", "Prize", "Description"]);
    for prize in catalog.prizes() {
        table.add_row(row![prize.name, prize.prize, prize.description]);
    }
    table
}
