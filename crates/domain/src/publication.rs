//! Publication — an authored work linked to researchers through authorship.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::PublicationId;

/// A stored publication row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(rename = "pubno")]
    pub id: PublicationId,
    #[serde(flatten)]
    pub fields: PublicationFields,
}

/// Every column of a publication except its identifier. Also the create payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationFields {
    #[serde(rename = "titre")]
    pub title: Option<String>,
    pub theme: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub volume: Option<i64>,
    pub date: Option<NaiveDate>,
    /// Venue the work appeared in (journal, conference, …).
    #[serde(rename = "apparition")]
    pub venue: Option<String>,
    #[serde(rename = "editeur")]
    pub editor: Option<String>,
}
