//! JSON REST handlers for faculties.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_domain::faculty::{Faculty, FacultyFields};
use labhub_domain::id::FacultyId;

use super::{ListQuery, parse_id};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Faculty>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single faculty.
pub enum ItemResponse {
    Ok(Json<Faculty>),
    Created(Json<Faculty>),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /facultes?search=`
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
    let faculties = state.faculty_service.list_faculties(query.search).await?;
    Ok(ListResponse::Ok(Json(faculties)))
}

/// `POST /facultes`
pub async fn create<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    JsonBody(fields): JsonBody<FacultyFields>,
) -> Result<ItemResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let created = state.faculty_service.create_faculty(fields).await?;
    Ok(ItemResponse::Created(Json(created)))
}

/// `PUT /facultes/:id`
pub async fn update<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<FacultyFields>,
) -> Result<ItemResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let id: FacultyId = parse_id(&id)?;
    let updated = state.faculty_service.update_faculty(id, fields).await?;
    Ok(ItemResponse::Ok(Json(updated)))
}

/// `DELETE /facultes/:id` — responds with the deleted row.
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
    let id: FacultyId = parse_id(&id)?;
    let deleted = state.faculty_service.delete_faculty(id).await?;
    Ok(ItemResponse::Ok(Json(deleted)))
}
