//! JSON REST handlers for publications.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_domain::publication::{Publication, PublicationFields};

use super::ListQuery;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Publication>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Publication>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /publications?search=`
pub async fn list<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let publications = state
        .publication_service
        .list_publications(query.search)
        .await?;
    Ok(ListResponse::Ok(Json(publications)))
}

/// `POST /publications`
pub async fn create<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    JsonBody(fields): JsonBody<PublicationFields>,
) -> Result<CreateResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let created = state.publication_service.create_publication(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}
