//! Laboratory service — read-only laboratory listing and hierarchy.

use labhub_domain::error::LabHubError;
use labhub_domain::id::LaboratoryId;
use labhub_domain::laboratory::{HierarchyNode, Laboratory};

use crate::ports::LaboratoryRepository;

/// Application service for laboratories.
pub struct LaboratoryService<R> {
    repo: R,
}

impl<R: LaboratoryRepository> LaboratoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all laboratories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_laboratories(&self) -> Result<Vec<Laboratory>, LabHubError> {
        self.repo.get_all().await
    }

    /// Supervision tree of a laboratory, roots first.
    ///
    /// An unknown or empty laboratory yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn hierarchy(&self, id: LaboratoryId) -> Result<Vec<HierarchyNode>, LabHubError> {
        let nodes = self.repo.hierarchy(id).await?;
        tracing::debug!(laboratory = %id, size = nodes.len(), "hierarchy resolved");
        Ok(nodes)
    }
}
