//! Laboratory — a research unit, and the supervision tree of its researchers.

use serde::{Deserialize, Serialize};

use crate::id::{FacultyId, LaboratoryId, ResearcherId};

/// A stored laboratory row. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laboratory {
    #[serde(rename = "labno")]
    pub id: LaboratoryId,
    #[serde(rename = "labnom")]
    pub name: Option<String>,
    #[serde(rename = "facno")]
    pub faculty_id: Option<FacultyId>,
}

/// One researcher in a laboratory's supervision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    #[serde(rename = "chno")]
    pub researcher_id: ResearcherId,
    #[serde(rename = "chnom")]
    pub name: Option<String>,
    pub grade: Option<String>,
    #[serde(rename = "supno")]
    pub supervisor_id: Option<ResearcherId>,
    #[serde(rename = "labno")]
    pub laboratory_id: Option<LaboratoryId>,
    /// Distance from the tree root; roots are at level 0.
    #[serde(rename = "niveau")]
    pub level: u32,
}
