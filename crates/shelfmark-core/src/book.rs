//! Book record and genre types.

use chrono::{Datelike, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of the title and author fields, in characters.
pub const MAX_FIELD_LEN: usize = 100;

/// Earliest accepted publication year.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// The fixed set of shelving genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Science,
    Technology,
    Romance,
    Poetry,
    #[serde(rename = "Self-help")]
    SelfHelp,
    Art,
    Religion,
    History,
}

impl Genre {
    /// Every genre, in display order.
    pub const ALL: [Genre; 10] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::Technology,
        Genre::Romance,
        Genre::Poetry,
        Genre::SelfHelp,
        Genre::Art,
        Genre::Religion,
        Genre::History,
    ];

    /// Canonical name, identical to the on-disk JSON string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Science => "Science",
            Genre::Technology => "Technology",
            Genre::Romance => "Romance",
            Genre::Poetry => "Poetry",
            Genre::SelfHelp => "Self-help",
            Genre::Art => "Art",
            Genre::Religion => "Religion",
            Genre::History => "History",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownGenre(s.to_string()))
    }
}

/// A single shelved book.
///
/// `added_date` is stamped once at construction and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
    pub read_status: bool,
    #[serde(with = "added_date_format")]
    pub added_date: NaiveDateTime,
}

impl BookRecord {
    /// Validate fields and build a record stamped with the current local time.
    pub fn new(
        title: String,
        author: String,
        publication_year: i32,
        genre: Genre,
        read_status: bool,
    ) -> std::result::Result<Self, ValidationError> {
        validate_text("title", &title)?;
        validate_text("author", &author)?;

        let current_year = Local::now().year();
        if publication_year < MIN_PUBLICATION_YEAR || publication_year > current_year {
            return Err(ValidationError::YearOutOfRange {
                year: publication_year,
                min: MIN_PUBLICATION_YEAR,
                max: current_year,
            });
        }

        Ok(Self {
            title,
            author,
            publication_year,
            genre,
            read_status,
            added_date: Local::now().naive_local(),
        })
    }
}

fn validate_text(field: &'static str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

/// Serde adapter for the `"YYYY-MM-DD HH:MM:SS"` on-disk timestamp format.
mod added_date_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
