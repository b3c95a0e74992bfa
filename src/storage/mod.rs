//! # Storage Layer
//!
//! Persistence for Estate CLI.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Listings | Pipe-delimited text, one record per line | `properties.txt` |
//! | Favorites | Same format | `favorites.txt` |
//! | Config | TOML | `estate.toml`, `<config-dir>/estate-cli/config.toml` |
//!
//! ## Write Discipline
//!
//! Adds append to the listing file; purchases rewrite it from the
//! surviving records through a temp file + atomic rename. Writes are
//! best-effort: catalog mutations stand even when the file cannot be
//! written, and the error is reported in the operation outcome instead of
//! rolled back.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - The catalog bound to its backing files
//! - [`ListingFile`] - Read/append/rewrite one delimited file
//! - [`Config`] - Global and per-directory configuration

pub mod codec;
mod config;
mod flatfile;
mod store;

pub use codec::CodecError;
pub use config::{
    Config, ConfigError, DefaultFormat, GlobalConfig, LocalConfig, DEFAULT_DATA_FILE,
    DEFAULT_FAVORITES_FILE, LOCAL_CONFIG_FILE,
};
pub use flatfile::ListingFile;
pub use store::{Added, Favorited, Purchased, RecordStore};
