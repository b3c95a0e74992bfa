//! Listing commands (list, show, add, buy)

use anyhow::{bail, Result};
use clap::Args;

use super::app::Session;
use super::output::Output;
use crate::domain::validate::{validate_address, validate_digit_count, validate_name};
use crate::domain::{Property, PRICE_DIGITS, SIZE_DIGITS};

/// Fields for a new listing.
#[derive(Args)]
pub struct AddArgs {
    /// Property name (letters only, max 3 words)
    #[arg(long)]
    pub name: String,

    /// Street address (house number followed by 2 words)
    #[arg(long)]
    pub address: String,

    /// Asking price (max 6 digits)
    #[arg(long)]
    pub price: u32,

    /// Size in square meters (max 3 digits)
    #[arg(long)]
    pub size: u32,

    /// Number of rooms
    #[arg(long)]
    pub rooms: u32,

    /// Number of bathrooms
    #[arg(long)]
    pub bathrooms: u32,

    /// Parking spot (1 or 0)
    #[arg(long)]
    pub parking: u8,
}

impl AddArgs {
    /// Applies the same checks the interactive flow would, then builds
    /// the record.
    fn into_property(self) -> Result<Property> {
        if !validate_name(&self.name) {
            bail!("Invalid name. Use only letters and max 3 words.");
        }
        if !validate_address(&self.address) {
            bail!("Invalid address. Start with a number followed by 2 words.");
        }
        if !validate_digit_count(self.price, PRICE_DIGITS) {
            bail!("Price must have at most {} digits.", PRICE_DIGITS);
        }
        if !validate_digit_count(self.size, SIZE_DIGITS) {
            bail!("Size must have at most {} digits.", SIZE_DIGITS);
        }
        let parking = match self.parking {
            0 => false,
            1 => true,
            _ => bail!("Parking must be 1 or 0."),
        };

        Ok(Property {
            name: self.name,
            address: self.address,
            price: self.price,
            size: self.size,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            parking,
        })
    }
}

pub fn list(session: &Session, output: &Output) -> Result<()> {
    let store = session.open_store()?;
    let listings: Vec<_> = store.catalog().listings().collect();
    output.verbose_ctx(
        "list",
        &format!("{} of {} slots occupied", listings.len(), store.catalog().capacity()),
    );

    if output.is_json() {
        let items: Vec<_> = listings
            .iter()
            .map(|(position, p)| listing_json(*position, p))
            .collect();
        output.data(&items);
    } else if listings.is_empty() {
        println!("No properties on the market.");
    } else {
        for (position, property) in listings {
            print_property(position, property);
        }
    }

    Ok(())
}

pub fn show(session: &Session, output: &Output, position: usize) -> Result<()> {
    let store = session.open_store()?;
    let Some(property) = store.catalog().get(position) else {
        bail!("Invalid selection.");
    };

    if output.is_json() {
        output.data(&listing_json(position, property));
    } else {
        print_property(position, property);
    }

    Ok(())
}

pub fn add(session: &Session, output: &Output, args: AddArgs) -> Result<()> {
    let property = args.into_property()?;
    let name = property.name.clone();

    let mut store = session.open_store()?;
    let added = store.add(property)?;
    output.verbose_ctx("add", &format!("Filled slot {}", added.position));

    if let Some(e) = added.persist_error {
        output.warn(&format!(
            "Property was not saved to {}: {:#}",
            store.path().display(),
            e
        ));
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "position": added.position,
            "name": name,
        }));
    } else {
        output.success(&format!(
            "Property added successfully at position {}.",
            added.position
        ));
    }

    Ok(())
}

pub fn buy(session: &Session, output: &Output, position: usize) -> Result<()> {
    let mut store = session.open_store()?;
    let purchased = store.purchase(position)?;

    if let Some(e) = purchased.persist_error {
        output.warn(&format!(
            "Listing file {} was not updated: {:#}",
            store.path().display(),
            e
        ));
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "position": position,
            "name": purchased.property.name,
        }));
    } else {
        output.success(&format!(
            "You have successfully purchased: {}",
            purchased.property.name
        ));
    }

    Ok(())
}

pub(super) fn print_property(position: usize, p: &Property) {
    println!("Property {}:", position);
    println!("  Name: {}", p.name);
    println!("  Address: {}", p.address);
    println!("  Price: ${}", p.price);
    println!("  Size: {} sq. meters", p.size);
    println!("  Rooms: {}", p.rooms);
    println!("  Bathrooms: {}", p.bathrooms);
    println!("  Parking: {}", if p.parking { "Yes" } else { "No" });
}

pub(super) fn listing_json(position: usize, p: &Property) -> serde_json::Value {
    serde_json::json!({
        "position": position,
        "name": p.name,
        "address": p.address,
        "price": p.price,
        "size": p.size,
        "rooms": p.rooms,
        "bathrooms": p.bathrooms,
        "parking": p.parking,
    })
}
