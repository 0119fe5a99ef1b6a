//! Publication service — listing, creation and authorship lookup.

use labhub_domain::error::LabHubError;
use labhub_domain::id::ResearcherId;
use labhub_domain::publication::{Publication, PublicationFields};

use crate::ports::PublicationRepository;

/// Application service for publications.
pub struct PublicationService<R> {
    repo: R,
}

impl<R: PublicationRepository> PublicationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List publications, optionally filtered on title.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_publications(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Publication>, LabHubError> {
        match super::search_term(search) {
            Some(term) => self.repo.find_by_title(term).await,
            None => self.repo.get_all().await,
        }
    }

    /// Create a new publication.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_publication(
        &self,
        fields: PublicationFields,
    ) -> Result<Publication, LabHubError> {
        self.repo.create(fields).await
    }

    /// Publications authored by a researcher.
    ///
    /// An unknown researcher simply has no publications.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_by_author(
        &self,
        researcher_id: ResearcherId,
    ) -> Result<Vec<Publication>, LabHubError> {
        self.repo.find_by_author(researcher_id).await
    }
}
