//! Allow-list for column-restricted researcher search.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A researcher column that clients may search on.
///
/// Parsing is the only way to obtain a value, so anything outside the
/// allow-list is rejected before a query exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchColumn {
    Name,
    Grade,
    Status,
    Email,
}

impl SearchColumn {
    /// Every searchable column.
    pub const ALL: [Self; 4] = [Self::Name, Self::Grade, Self::Status, Self::Email];

    /// Column name as exposed on the wire and in the schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "chnom",
            Self::Grade => "grade",
            Self::Status => "statut",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for SearchColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSearchColumn(s.to_string()))
    }
}
