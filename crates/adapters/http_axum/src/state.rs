//! Shared application state for axum handlers.

use std::sync::Arc;

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_app::services::faculty_service::FacultyService;
use labhub_app::services::laboratory_service::LaboratoryService;
use labhub_app::services::publication_service::PublicationService;
use labhub_app::services::researcher_service::ResearcherService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<RR, FR, PR, LR> {
    /// Researcher CRUD and search service.
    pub researcher_service: Arc<ResearcherService<RR>>,
    /// Faculty CRUD service.
    pub faculty_service: Arc<FacultyService<FR>>,
    /// Publication listing and authorship service.
    pub publication_service: Arc<PublicationService<PR>>,
    /// Laboratory listing and hierarchy service.
    pub laboratory_service: Arc<LaboratoryService<LR>>,
}

impl<RR, FR, PR, LR> Clone for AppState<RR, FR, PR, LR> {
    fn clone(&self) -> Self {
        Self {
            researcher_service: Arc::clone(&self.researcher_service),
            faculty_service: Arc::clone(&self.faculty_service),
            publication_service: Arc::clone(&self.publication_service),
            laboratory_service: Arc::clone(&self.laboratory_service),
        }
    }
}

impl<RR, FR, PR, LR> AppState<RR, FR, PR, LR>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        researcher_service: ResearcherService<RR>,
        faculty_service: FacultyService<FR>,
        publication_service: PublicationService<PR>,
        laboratory_service: LaboratoryService<LR>,
    ) -> Self {
        Self {
            researcher_service: Arc::new(researcher_service),
            faculty_service: Arc::new(faculty_service),
            publication_service: Arc::new(publication_service),
            laboratory_service: Arc::new(laboratory_service),
        }
    }
}
