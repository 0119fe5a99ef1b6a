//! Faculty service — use-cases for managing faculties.

use labhub_domain::error::{LabHubError, NotFoundError};
use labhub_domain::faculty::{Faculty, FacultyFields};
use labhub_domain::id::FacultyId;

use crate::ports::FacultyRepository;

/// Application service for faculty CRUD operations.
pub struct FacultyService<R> {
    repo: R,
}

fn not_found(id: FacultyId) -> LabHubError {
    NotFoundError {
        entity: "Faculty",
        id: id.to_string(),
    }
    .into()
}

impl<R: FacultyRepository> FacultyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List faculties, optionally filtered on name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_faculties(&self, search: Option<String>) -> Result<Vec<Faculty>, LabHubError> {
        match super::search_term(search) {
            Some(term) => self.repo.find_by_name(term).await,
            None => self.repo.get_all().await,
        }
    }

    /// Create a new faculty.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_faculty(&self, fields: FacultyFields) -> Result<Faculty, LabHubError> {
        self.repo.create(fields).await
    }

    /// Overwrite every column of an existing faculty.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::NotFound`] if no row matched, or a storage error.
    pub async fn update_faculty(
        &self,
        id: FacultyId,
        fields: FacultyFields,
    ) -> Result<Faculty, LabHubError> {
        self.repo
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a faculty, returning the removed row.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::NotFound`] if no row matched, or a storage error.
    pub async fn delete_faculty(&self, id: FacultyId) -> Result<Faculty, LabHubError> {
        self.repo.delete(id).await?.ok_or_else(|| not_found(id))
    }
}
