//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod faculties;
#[allow(clippy::missing_errors_doc)]
pub mod laboratories;
#[allow(clippy::missing_errors_doc)]
pub mod publications;
#[allow(clippy::missing_errors_doc)]
pub mod researchers;
#[allow(clippy::missing_errors_doc)]
pub mod search;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;
use serde::Deserialize;

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Optional free-text filter accepted by list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// Parse a path segment into a typed identifier.
fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(ValidationError::InvalidId(raw.to_string())))
}

/// Build the API router.
pub fn routes<RR, FR, PR, LR>() -> Router<AppState<RR, FR, PR, LR>>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    Router::new()
        // Researchers
        .route(
            "/chercheurs",
            get(researchers::list::<RR, FR, PR, LR>).post(researchers::create::<RR, FR, PR, LR>),
        )
        .route(
            "/chercheurs/{id}",
            get(researchers::get::<RR, FR, PR, LR>)
                .put(researchers::update::<RR, FR, PR, LR>)
                .delete(researchers::delete::<RR, FR, PR, LR>),
        )
        .route(
            "/chercheurs/{id}/publications",
            get(researchers::publications::<RR, FR, PR, LR>),
        )
        // Faculties
        .route(
            "/facultes",
            get(faculties::list::<RR, FR, PR, LR>).post(faculties::create::<RR, FR, PR, LR>),
        )
        .route(
            "/facultes/{id}",
            axum::routing::put(faculties::update::<RR, FR, PR, LR>)
                .delete(faculties::delete::<RR, FR, PR, LR>),
        )
        // Publications
        .route(
            "/publications",
            get(publications::list::<RR, FR, PR, LR>)
                .post(publications::create::<RR, FR, PR, LR>),
        )
        // Laboratories
        .route("/laboratoires", get(laboratories::list::<RR, FR, PR, LR>))
        .route(
            "/laboratoires/{id}/hierarchie",
            get(laboratories::hierarchy::<RR, FR, PR, LR>),
        )
        // Column-restricted search
        .route("/search/chercheur", get(search::researchers::<RR, FR, PR, LR>))
}
