//! Storage port — repository traits for persistence.
//!
//! Every method maps to exactly one statement against the backing store.
//! Update and delete return `None` when no row matched; turning that into a
//! not-found error is the service's job.

use std::future::Future;

use labhub_domain::error::LabHubError;
use labhub_domain::faculty::{Faculty, FacultyFields};
use labhub_domain::id::{FacultyId, LaboratoryId, ResearcherId};
use labhub_domain::laboratory::{HierarchyNode, Laboratory};
use labhub_domain::publication::{Publication, PublicationFields};
use labhub_domain::researcher::{Researcher, ResearcherFields};
use labhub_domain::search::SearchColumn;

/// Repository for persisting and querying [`Researcher`]s.
pub trait ResearcherRepository {
    /// Insert a researcher and return it with its generated identifier.
    fn create(
        &self,
        fields: ResearcherFields,
    ) -> impl Future<Output = Result<Researcher, LabHubError>> + Send;

    /// Get a researcher by identifier.
    fn get_by_id(
        &self,
        id: ResearcherId,
    ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send;

    /// Get all researchers.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send;

    /// Researchers whose name or email case-insensitively contains `term`.
    fn find_by_name_or_email(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send;

    /// Researchers whose `column` case-insensitively contains `value`.
    fn find_by_column(
        &self,
        column: SearchColumn,
        value: String,
    ) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send;

    /// Overwrite every column of a researcher.
    fn update(
        &self,
        id: ResearcherId,
        fields: ResearcherFields,
    ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send;

    /// Delete a researcher, returning the removed row.
    fn delete(
        &self,
        id: ResearcherId,
    ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send;
}

/// Repository for persisting and querying [`Faculty`] rows.
pub trait FacultyRepository {
    /// Insert a faculty and return it with its generated identifier.
    fn create(
        &self,
        fields: FacultyFields,
    ) -> impl Future<Output = Result<Faculty, LabHubError>> + Send;

    /// Get all faculties.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Faculty>, LabHubError>> + Send;

    /// Faculties whose name case-insensitively contains `term`.
    fn find_by_name(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Faculty>, LabHubError>> + Send;

    /// Overwrite every column of a faculty.
    fn update(
        &self,
        id: FacultyId,
        fields: FacultyFields,
    ) -> impl Future<Output = Result<Option<Faculty>, LabHubError>> + Send;

    /// Delete a faculty, returning the removed row.
    fn delete(
        &self,
        id: FacultyId,
    ) -> impl Future<Output = Result<Option<Faculty>, LabHubError>> + Send;
}

/// Repository for persisting and querying [`Publication`]s.
pub trait PublicationRepository {
    /// Insert a publication and return it with its generated identifier.
    fn create(
        &self,
        fields: PublicationFields,
    ) -> impl Future<Output = Result<Publication, LabHubError>> + Send;

    /// Get all publications.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Publication>, LabHubError>> + Send;

    /// Publications whose title case-insensitively contains `term`.
    fn find_by_title(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Publication>, LabHubError>> + Send;

    /// Publications linked to a researcher through authorship.
    fn find_by_author(
        &self,
        researcher_id: ResearcherId,
    ) -> impl Future<Output = Result<Vec<Publication>, LabHubError>> + Send;
}

/// Read-only repository for [`Laboratory`] rows and their supervision trees.
pub trait LaboratoryRepository {
    /// Get all laboratories.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Laboratory>, LabHubError>> + Send;

    /// Supervision tree rooted at the unsupervised researchers of a laboratory.
    fn hierarchy(
        &self,
        id: LaboratoryId,
    ) -> impl Future<Output = Result<Vec<HierarchyNode>, LabHubError>> + Send;
}
