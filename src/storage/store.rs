//! The record store: a catalog bound to its backing files
//!
//! `RecordStore` is the bridge between validated user input and persisted
//! state. Catalog mutations are applied first and stand even when the
//! write that follows fails; the write error travels back in the
//! operation outcome instead of rolling anything back.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::{Catalog, CatalogError, Property};

use super::flatfile::ListingFile;

/// Outcome of [`RecordStore::add`].
#[derive(Debug)]
pub struct Added {
    /// 1-based catalog position the listing landed in.
    pub position: usize,

    /// Error from the append step, if the file could not be written. The
    /// in-memory insert has happened either way.
    pub persist_error: Option<anyhow::Error>,
}

/// Outcome of [`RecordStore::purchase`].
#[derive(Debug)]
pub struct Purchased {
    /// The listing that was removed from the catalog.
    pub property: Property,

    /// Error from the rewrite step, if the file could not be written.
    pub persist_error: Option<anyhow::Error>,
}

/// Outcome of [`RecordStore::favorite`].
#[derive(Debug)]
pub struct Favorited {
    /// Error from the favorites rewrite, if the file could not be written.
    pub persist_error: Option<anyhow::Error>,
}

/// In-memory catalog bound to its listing file and favorites file.
pub struct RecordStore {
    catalog: Catalog,
    listings: ListingFile,
    favorites: ListingFile,
}

impl RecordStore {
    /// Opens the store, loading up to `capacity` records from each file.
    ///
    /// Missing files are not an error; they yield an empty catalog or an
    /// empty favorites list.
    pub fn open(
        listings_path: impl Into<PathBuf>,
        favorites_path: impl Into<PathBuf>,
        capacity: usize,
    ) -> Result<Self> {
        let listings = ListingFile::new(listings_path);
        let favorites = ListingFile::new(favorites_path);

        let mut catalog = Catalog::from_records(listings.read(capacity)?, capacity);
        catalog.restore_favorites(favorites.read(capacity)?);

        Ok(Self {
            catalog,
            listings,
            favorites,
        })
    }

    /// Returns the path of the listing file.
    pub fn path(&self) -> &Path {
        self.listings.path()
    }

    /// Returns the current catalog state.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds a validated listing: fills the first empty slot, then appends
    /// the record to the listing file.
    pub fn add(&mut self, property: Property) -> Result<Added, CatalogError> {
        let record = property.clone();
        let position = self.catalog.insert(property)?;
        let persist_error = self.listings.append(&record).err();

        Ok(Added {
            position,
            persist_error,
        })
    }

    /// Purchases (removes) the listing at a 1-based position, then
    /// rewrites the listing file from the remaining occupied slots.
    pub fn purchase(&mut self, position: usize) -> Result<Purchased, CatalogError> {
        let property = self.catalog.remove(position)?;
        let persist_error = self
            .listings
            .rewrite(self.catalog.listings().map(|(_, p)| p))
            .err();

        Ok(Purchased {
            property,
            persist_error,
        })
    }

    /// Copies the listing at a 1-based position into favorites, then
    /// rewrites the favorites file.
    ///
    /// Favorites are snapshots: they survive the purchase of their source
    /// listing.
    pub fn favorite(&mut self, position: usize) -> Result<Favorited, CatalogError> {
        self.catalog.favorite(position)?;
        let persist_error = self.favorites.rewrite(self.catalog.favorites()).err();

        Ok(Favorited { persist_error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_PROPERTIES;
    use std::fs;
    use tempfile::TempDir;

    fn make_property(name: &str) -> Property {
        Property {
            name: name.to_string(),
            address: "12 Ocean Drive".to_string(),
            price: 250_000,
            size: 120,
            rooms: 4,
            bathrooms: 2,
            parking: true,
        }
    }

    fn open_store(dir: &TempDir) -> RecordStore {
        RecordStore::open(
            dir.path().join("properties.txt"),
            dir.path().join("favorites.txt"),
            MAX_PROPERTIES,
        )
        .unwrap()
    }

    #[test]
    fn open_without_files_yields_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert!(store.catalog().is_empty());
        assert_eq!(store.catalog().favorites_len(), 0);
    }

    #[test]
    fn add_appends_one_serialized_line() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let added = store.add(make_property("Sea View Villa")).unwrap();
        assert_eq!(added.position, 1);
        assert!(added.persist_error.is_none());

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "Sea View Villa|12 Ocean Drive|250000|120|4|2|1\n");
    }

    #[test]
    fn purchase_rewrites_remaining_records() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add(make_property("First")).unwrap();
        store.add(make_property("Second")).unwrap();

        let purchased = store.purchase(1).unwrap();
        assert_eq!(purchased.property.name, "First");
        assert!(purchased.persist_error.is_none());

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "Second|12 Ocean Drive|250000|120|4|2|1\n");
    }

    #[test]
    fn add_then_purchase_leaves_an_empty_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.add(make_property("Only")).unwrap();
        store.purchase(1).unwrap();

        assert!(store.catalog().is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    }

    #[test]
    fn failed_purchase_leaves_the_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add(make_property("Only")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        assert_eq!(store.purchase(4).unwrap_err(), CatalogError::InvalidSelection(4));
        assert_eq!(store.purchase(9).unwrap_err(), CatalogError::InvalidSelection(9));

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn full_catalog_rejects_adds_without_touching_the_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        for i in 0..MAX_PROPERTIES {
            store.add(make_property(&format!("House {}", i))).unwrap();
        }
        let before = fs::read_to_string(store.path()).unwrap();

        assert_eq!(
            store.add(make_property("Late")).unwrap_err(),
            CatalogError::CatalogFull
        );
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn reopening_restores_catalog_state() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&dir);
            store.add(make_property("First")).unwrap();
            store.add(make_property("Second")).unwrap();
            store.purchase(1).unwrap();
        }

        let store = open_store(&dir);
        let names: Vec<_> = store.catalog().listings().map(|(_, p)| p.name.clone()).collect();
        assert_eq!(names, vec!["Second".to_string()]);
    }

    #[test]
    fn favorites_persist_and_survive_purchase() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&dir);
            store.add(make_property("Keeper")).unwrap();
            let faved = store.favorite(1).unwrap();
            assert!(faved.persist_error.is_none());
            store.purchase(1).unwrap();
        }

        let store = open_store(&dir);
        let favorites: Vec<_> = store.catalog().favorites().map(|p| p.name.clone()).collect();
        assert_eq!(favorites, vec!["Keeper".to_string()]);
        assert!(store.catalog().is_empty());
    }

    #[test]
    fn favorites_full_after_capacity_entries() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add(make_property("House")).unwrap();

        for _ in 0..MAX_PROPERTIES {
            store.favorite(1).unwrap();
        }
        assert_eq!(store.favorite(1).unwrap_err(), CatalogError::FavoritesFull);
    }

    #[test]
    fn load_stops_at_first_malformed_line() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("properties.txt"),
            "Villa|12 Ocean Drive|250000|120|4|2|1\ngarbage line\nCottage|3 Elm Grove|90000|60|2|1|0\n",
        )
        .unwrap();

        let store = open_store(&dir);
        assert_eq!(store.catalog().len(), 1);
        assert_eq!(store.catalog().get(1).unwrap().name, "Villa");
    }
}
