//! JSON REST handlers for researchers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_domain::id::ResearcherId;
use labhub_domain::publication::Publication;
use labhub_domain::researcher::{Researcher, ResearcherDraft};

use super::{ListQuery, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Researcher>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single researcher.
pub enum ItemResponse {
    Ok(Json<Researcher>),
    Created(Json<Researcher>),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the publications endpoint.
pub enum PublicationsResponse {
    Ok(Json<Vec<Publication>>),
}

impl IntoResponse for PublicationsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /chercheurs?search=`
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
    let researchers = state
        .researcher_service
        .list_researchers(query.search)
        .await?;
    Ok(ListResponse::Ok(Json(researchers)))
}

/// `GET /chercheurs/:id`
pub async fn get<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let id: ResearcherId = parse_id(&id)?;
    let researcher = state.researcher_service.get_researcher(id).await?;
    Ok(ItemResponse::Ok(Json(researcher)))
}

/// `POST /chercheurs`
pub async fn create<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    JsonBody(draft): JsonBody<ResearcherDraft>,
) -> Result<ItemResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let created = state.researcher_service.create_researcher(draft).await?;
    Ok(ItemResponse::Created(Json(created)))
}

/// `PUT /chercheurs/:id`
pub async fn update<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<ResearcherDraft>,
) -> Result<ItemResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let id: ResearcherId = parse_id(&id)?;
    let updated = state.researcher_service.update_researcher(id, draft).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /chercheurs/:id` — responds with the deleted row.
pub async fn delete<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let id: ResearcherId = parse_id(&id)?;
    let deleted = state.researcher_service.delete_researcher(id).await?;
    Ok(ItemResponse::Ok(Json(deleted)))
}

/// `GET /chercheurs/:id/publications`
pub async fn publications<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Path(id): Path<String>,
) -> Result<PublicationsResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let id: ResearcherId = parse_id(&id)?;
    let publications = state.publication_service.list_by_author(id).await?;
    Ok(PublicationsResponse::Ok(Json(publications)))
}
