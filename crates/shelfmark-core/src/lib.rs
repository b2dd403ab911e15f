//! Shelfmark Core - bookkeeping for a single-user personal library
//!
//! This crate provides the core functionality for the shelfmark book tracker:
//!
//! - **Book**: the book record with its fixed genre set and creation timestamp
//! - **Store**: the ordered in-memory library sequence, mirrored to a JSON
//!   file on every mutation
//! - **Stats**: derived totals and read-percentage over the sequence
//! - **Config**: library file location
//! - **Error**: typed validation and persistence errors; nothing is fatal
//!
//! # Architecture
//!
//! One process owns one [`LibraryStore`] at a time. The store is loaded once
//! at session start and held in memory until exit; every mutation rewrites
//! the whole library file. A failed flush keeps the in-memory mutation and
//! reports the error, so the front end can warn and keep going.

pub mod book;
pub mod config;
pub mod error;
pub mod stats;
pub mod store;

pub use book::{BookRecord, Genre, MAX_FIELD_LEN, MIN_PUBLICATION_YEAR};
pub use config::LibraryConfig;
pub use error::{PersistenceError, Result, ShelfmarkError, ValidationError};
pub use stats::LibraryStats;
pub use store::LibraryStore;
