//! Property domain model

use serde::{Deserialize, Serialize};

/// Maximum stored length of a property name, in bytes.
pub const NAME_MAX: usize = 49;

/// Maximum stored length of an address, in bytes.
pub const ADDRESS_MAX: usize = 99;

/// Maximum decimal digits in a price.
pub const PRICE_DIGITS: u32 = 6;

/// Maximum decimal digits in a size.
pub const SIZE_DIGITS: u32 = 3;

/// A single real-estate listing.
///
/// Records are built from pre-validated input (see [`super::validate`]) or
/// parsed off disk, where only structural checks apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Listing name: 1-3 alphabetic words.
    pub name: String,

    /// Street address: a house number followed by exactly two words.
    pub address: String,

    /// Asking price, at most six digits.
    pub price: u32,

    /// Living area in square meters, at most three digits.
    pub size: u32,

    pub rooms: u32,

    pub bathrooms: u32,

    /// Whether the listing includes a parking spot.
    pub parking: bool,
}
