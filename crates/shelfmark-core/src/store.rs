//! The library store: an in-memory book sequence mirrored to a JSON file.
//!
//! The store owns the sequence for the lifetime of the process. Every
//! mutation rewrites the whole file; a failed flush keeps the in-memory
//! mutation and reports the error, so the file catches up on the next
//! successful flush.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::book::{BookRecord, Genre};
use crate::error::{PersistenceError, Result, ValidationError};
use crate::stats::LibraryStats;

/// Store for the ordered book sequence and its durable mirror.
pub struct LibraryStore {
    path: PathBuf,
    books: Vec<BookRecord>,
}

impl LibraryStore {
    /// Create a store backed by the given library file. No I/O happens
    /// until [`load`](Self::load) or the first mutation.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            books: Vec::new(),
        }
    }

    /// Read the library file if present.
    ///
    /// A missing file yields an empty library. A file that cannot be read
    /// or parsed also yields an empty library, with the failure returned so
    /// the caller can surface a warning; the file itself is left untouched.
    pub fn load(&mut self) -> Result<()> {
        self.books.clear();

        if !self.path.exists() {
            debug!(path = %self.path.display(), "no library file, starting empty");
            return Ok(());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "library file unreadable");
            PersistenceError::Read(e.to_string())
        })?;

        match serde_json::from_str::<Vec<BookRecord>>(&contents) {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "library loaded");
                self.books = books;
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "library file malformed");
                Err(PersistenceError::Read(e.to_string()).into())
            }
        }
    }

    /// Validate, append, and flush a new book.
    ///
    /// The append stands regardless of the flush outcome; the returned
    /// `Result` reports the flush.
    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        publication_year: i32,
        genre: Genre,
        read_status: bool,
    ) -> Result<()> {
        let book = BookRecord::new(title, author, publication_year, genre, read_status)?;
        self.books.push(book);
        self.flush()
    }

    /// Remove the book at `index`, shifting later books down one position,
    /// then flush. An out-of-range index changes nothing.
    pub fn remove_book(&mut self, index: usize) -> Result<()> {
        if index >= self.books.len() {
            return Err(ValidationError::IndexOutOfBounds {
                index,
                len: self.books.len(),
            }
            .into());
        }

        self.books.remove(index);
        self.flush()
    }

    /// Rewrite the library file from the in-memory sequence.
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| PersistenceError::Write(e.to_string()))?;
            }
        }

        let json = serde_json::to_string(&self.books)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "library flush failed");
            PersistenceError::Write(e.to_string())
        })?;

        debug!(path = %self.path.display(), count = self.books.len(), "library flushed");
        Ok(())
    }

    /// Aggregate statistics over the current sequence.
    pub fn stats(&self) -> LibraryStats {
        LibraryStats::from_books(&self.books)
    }

    /// The books in insertion order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// Number of books in the library.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Path of the backing library file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfmarkError;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> LibraryStore {
        LibraryStore::new(dir.path().join("library.json"))
    }

    fn add(store: &mut LibraryStore, title: &str, read: bool) {
        store
            .add_book(
                title.to_string(),
                "Author".to_string(),
                2000,
                Genre::Fiction,
                read,
            )
            .unwrap();
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_malformed_file_reports_and_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = LibraryStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            ShelfmarkError::Persistence(PersistenceError::Read(_))
        ));
        assert!(store.is_empty());
        // The file itself is untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn add_appends_in_order_and_counts() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();

        for (i, title) in ["First", "Second", "Third"].iter().enumerate() {
            add(&mut store, title, false);
            assert_eq!(store.stats().total_books, i + 1);
        }
        let titles: Vec<_> = store.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn add_with_invalid_input_changes_nothing() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();

        let err = store
            .add_book(
                String::new(),
                "Author".to_string(),
                2000,
                Genre::Fiction,
                false,
            )
            .unwrap_err();
        assert!(matches!(err, ShelfmarkError::Validation(_)));
        assert!(store.is_empty());
        // nothing was flushed either
        assert!(!store.path().exists());
    }

    #[test]
    fn remove_shifts_later_books_down() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();
        add(&mut store, "A", false);
        add(&mut store, "B", false);
        add(&mut store, "C", false);

        // Removing index 0 twice removes A then B
        store.remove_book(0).unwrap();
        store.remove_book(0).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.books()[0].title, "C");
    }

    #[test]
    fn remove_out_of_range_is_rejected_without_state_change() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.load().unwrap();
        add(&mut store, "Only", false);

        let err = store.remove_book(1).unwrap_err();
        assert!(matches!(
            err,
            ShelfmarkError::Validation(ValidationError::IndexOutOfBounds { index: 1, len: 1 })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn flush_failure_keeps_in_memory_mutation() {
        let dir = tempdir().unwrap();
        // Writing to a path that is a directory fails
        let mut store = LibraryStore::new(dir.path());

        let err = store
            .add_book(
                "Kept".to_string(),
                "Author".to_string(),
                2000,
                Genre::Fiction,
                false,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ShelfmarkError::Persistence(PersistenceError::Write(_))
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.books()[0].title, "Kept");
    }

    #[test]
    fn flush_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("library.json");
        let mut store = LibraryStore::new(&path);
        store.load().unwrap();
        add(&mut store, "Nested", false);
        assert!(path.exists());
    }
}
