//! Favorites commands

use anyhow::Result;
use clap::Subcommand;

use super::app::Session;
use super::listing::print_property;
use super::output::Output;

#[derive(Subcommand)]
pub enum FavCommands {
    /// Add a catalog property to favorites
    Add {
        /// 1-based catalog position
        position: usize,
    },

    /// List favorite properties
    List,
}

pub fn run(cmd: FavCommands, session: &Session, output: &Output) -> Result<()> {
    match cmd {
        FavCommands::Add { position } => add(session, output, position),
        FavCommands::List => list(session, output),
    }
}

fn add(session: &Session, output: &Output, position: usize) -> Result<()> {
    let mut store = session.open_store()?;
    let faved = store.favorite(position)?;

    if let Some(e) = faved.persist_error {
        output.warn(&format!("Favorites were not saved: {:#}", e));
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "position": position,
            "favorites": store.catalog().favorites_len(),
        }));
    } else {
        output.success("Property added to favorites.");
    }

    Ok(())
}

fn list(session: &Session, output: &Output) -> Result<()> {
    let store = session.open_store()?;
    let favorites: Vec<_> = store.catalog().favorites().collect();
    output.verbose_ctx("fav", &format!("{} favorites", favorites.len()));

    if output.is_json() {
        let items: Vec<_> = favorites
            .iter()
            .enumerate()
            .map(|(i, p)| super::listing::listing_json(i + 1, p))
            .collect();
        output.data(&items);
    } else if favorites.is_empty() {
        println!("No favorites added yet.");
    } else {
        for (i, property) in favorites.iter().enumerate() {
            print_property(i + 1, property);
        }
    }

    Ok(())
}
