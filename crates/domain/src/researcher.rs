//! Researcher — a person attached to a laboratory and a faculty, optionally
//! supervised by another researcher.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LabHubError, ValidationError};
use crate::id::{FacultyId, LaboratoryId, ResearcherId};

/// A stored researcher row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Researcher {
    #[serde(rename = "chno")]
    pub id: ResearcherId,
    #[serde(flatten)]
    pub fields: ResearcherFields,
}

/// Every column of a researcher except its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearcherFields {
    #[serde(rename = "chnom")]
    pub name: Option<String>,
    pub grade: Option<String>,
    #[serde(rename = "statut")]
    pub status: Option<String>,
    #[serde(rename = "daterecrut")]
    pub recruited_on: NaiveDate,
    #[serde(rename = "salaire")]
    pub salary: Option<f64>,
    #[serde(rename = "prime")]
    pub bonus: Option<f64>,
    pub email: Option<String>,
    /// `None` marks the top of a supervision tree.
    #[serde(rename = "supno")]
    pub supervisor_id: Option<ResearcherId>,
    #[serde(rename = "labno")]
    pub laboratory_id: Option<LaboratoryId>,
    #[serde(rename = "facno")]
    pub faculty_id: Option<FacultyId>,
}

impl ResearcherFields {
    /// Fields with only the mandatory recruitment date set.
    #[must_use]
    pub fn with_recruitment_date(recruited_on: NaiveDate) -> Self {
        Self {
            name: None,
            grade: None,
            status: None,
            recruited_on,
            salary: None,
            bonus: None,
            email: None,
            supervisor_id: None,
            laboratory_id: None,
            faculty_id: None,
        }
    }
}

/// Payload accepted by create and update, before presence checks.
///
/// An empty `daterecrut` string is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResearcherDraft {
    #[serde(rename = "chnom")]
    pub name: Option<String>,
    pub grade: Option<String>,
    #[serde(rename = "statut")]
    pub status: Option<String>,
    #[serde(rename = "daterecrut", default, deserialize_with = "blank_as_none")]
    pub recruited_on: Option<NaiveDate>,
    #[serde(rename = "salaire")]
    pub salary: Option<f64>,
    #[serde(rename = "prime")]
    pub bonus: Option<f64>,
    pub email: Option<String>,
    #[serde(rename = "supno")]
    pub supervisor_id: Option<ResearcherId>,
    #[serde(rename = "labno")]
    pub laboratory_id: Option<LaboratoryId>,
    #[serde(rename = "facno")]
    pub faculty_id: Option<FacultyId>,
}

impl ResearcherDraft {
    /// Check presence of mandatory fields and produce storable fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRecruitmentDate`] when `daterecrut`
    /// is absent.
    pub fn into_fields(self) -> Result<ResearcherFields, LabHubError> {
        let recruited_on = self
            .recruited_on
            .ok_or(ValidationError::MissingRecruitmentDate)?;
        Ok(ResearcherFields {
            name: self.name,
            grade: self.grade,
            status: self.status,
            recruited_on,
            salary: self.salary,
            bonus: self.bonus,
            email: self.email,
            supervisor_id: self.supervisor_id,
            laboratory_id: self.laboratory_id,
            faculty_id: self.faculty_id,
        })
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
