//! In-memory listing catalog
//!
//! A fixed-capacity slot collection plus a same-capacity favorites list.
//! Positions are stable 1-based slot indices: clearing a slot does not
//! re-pack the slots after it.

use thiserror::Error;

use super::property::Property;

/// Default catalog (and favorites) capacity.
pub const MAX_PROPERTIES: usize = 6;

/// User-facing catalog failures.
///
/// All variants are recoverable: the operation is aborted and no state
/// changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the property list is full")]
    CatalogFull,

    #[error("the favorites list is full")]
    FavoritesFull,

    #[error("invalid selection: {0}")]
    InvalidSelection(usize),
}

/// Fixed-capacity catalog of listings with a favorites side list.
///
/// Favorites hold copies, not references: purchasing a listing leaves any
/// favorite of it untouched.
#[derive(Debug, Clone)]
pub struct Catalog {
    slots: Vec<Option<Property>>,
    favorites: Vec<Option<Property>>,
}

impl Catalog {
    /// Creates an empty catalog with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_PROPERTIES)
    }

    /// Creates an empty catalog with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            favorites: Vec::with_capacity(capacity),
        }
    }

    /// Rebuilds a catalog from records loaded off disk, in file order.
    /// Records beyond capacity are dropped.
    pub fn from_records(records: Vec<Property>, capacity: usize) -> Self {
        let mut catalog = Self::with_capacity(capacity);
        for (slot, record) in catalog.slots.iter_mut().zip(records) {
            *slot = Some(record);
        }
        catalog
    }

    /// Replaces the favorites list with records loaded off disk,
    /// truncating at capacity.
    pub fn restore_favorites(&mut self, records: Vec<Property>) {
        let capacity = self.capacity();
        self.favorites = records.into_iter().take(capacity).map(Some).collect();
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns the listing at a 1-based position, if that slot is occupied.
    pub fn get(&self, position: usize) -> Option<&Property> {
        self.slots.get(position.checked_sub(1)?)?.as_ref()
    }

    /// Inserts a listing into the first empty slot and returns its 1-based
    /// position.
    ///
    /// Capacity is judged by the last slot alone: a catalog whose final
    /// slot is occupied is full even if earlier slots are empty.
    pub fn insert(&mut self, property: Property) -> Result<usize, CatalogError> {
        if matches!(self.slots.last(), Some(Some(_))) {
            return Err(CatalogError::CatalogFull);
        }

        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(CatalogError::CatalogFull)?;
        self.slots[slot] = Some(property);
        Ok(slot + 1)
    }

    /// Clears the slot at a 1-based position and returns the listing.
    pub fn remove(&mut self, position: usize) -> Result<Property, CatalogError> {
        let slot = self.slot_index(position)?;
        self.slots[slot]
            .take()
            .ok_or(CatalogError::InvalidSelection(position))
    }

    /// Copies the slot at a 1-based position into favorites.
    ///
    /// The copy is a snapshot: purchasing the listing later does not touch
    /// it. An empty slot can be favorited too; the entry consumes
    /// favorites capacity but renders nothing.
    pub fn favorite(&mut self, position: usize) -> Result<(), CatalogError> {
        if self.favorites.len() >= self.capacity() {
            return Err(CatalogError::FavoritesFull);
        }

        let slot = self.slot_index(position)?;
        self.favorites.push(self.slots[slot].clone());
        Ok(())
    }

    /// Occupied slots in slot order, with their 1-based positions.
    pub fn listings(&self) -> impl Iterator<Item = (usize, &Property)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (i + 1, p)))
    }

    /// Favorited listings in insertion order. Empty-slot favorites are
    /// skipped here but still count toward [`Catalog::favorites_len`].
    pub fn favorites(&self) -> impl Iterator<Item = &Property> {
        self.favorites.iter().flatten()
    }

    /// Number of favorites entries, including empty-slot copies.
    pub fn favorites_len(&self) -> usize {
        self.favorites.len()
    }

    fn slot_index(&self, position: usize) -> Result<usize, CatalogError> {
        position
            .checked_sub(1)
            .filter(|i| *i < self.slots.len())
            .ok_or(CatalogError::InvalidSelection(position))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
