//! Estate CLI - A flat-file property-listing manager
//!
//! Estate keeps a small fixed-capacity catalog of real-estate listings in a
//! pipe-delimited text file. Listings can be browsed, favorited, purchased
//! (removed from the catalog), and added, with field validation on the way in.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Catalog, CatalogError, Property, MAX_PROPERTIES};
pub use storage::{ListingFile, RecordStore};
