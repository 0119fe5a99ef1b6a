//! JSON REST handlers for laboratories.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_domain::id::LaboratoryId;
use labhub_domain::laboratory::{HierarchyNode, Laboratory};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Laboratory>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the hierarchy endpoint.
pub enum HierarchyResponse {
    Ok(Json<Vec<HierarchyNode>>),
}

impl IntoResponse for HierarchyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /laboratoires`
pub async fn list<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
) -> Result<ListResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let labs = state.laboratory_service.list_laboratories().await?;
    Ok(ListResponse::Ok(Json(labs)))
}

/// `GET /laboratoires/:id/hierarchie`
pub async fn hierarchy<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Path(id): Path<String>,
) -> Result<HierarchyResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let id: LaboratoryId = parse_id(&id)?;
    let nodes = state.laboratory_service.hierarchy(id).await?;
    Ok(HierarchyResponse::Ok(Json(nodes)))
}
