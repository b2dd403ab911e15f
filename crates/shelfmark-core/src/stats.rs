//! Aggregate statistics over the library sequence.

use serde::{Deserialize, Serialize};

use crate::book::BookRecord;

/// Derived statistics for a library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    /// Number of books on the shelf
    pub total_books: usize,
    /// Number of books marked read
    pub read_books: usize,
    /// Share of books read, in percent; 0.0 for an empty library
    pub percent_read: f64,
}

impl LibraryStats {
    /// Compute statistics from the current sequence.
    pub fn from_books(books: &[BookRecord]) -> Self {
        let total_books = books.len();
        let read_books = books.iter().filter(|b| b.read_status).count();
        let percent_read = if total_books > 0 {
            read_books as f64 / total_books as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_books,
            read_books,
            percent_read,
        }
    }
}
