//! Column-restricted researcher search.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};
use labhub_domain::researcher::Researcher;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `/search/chercheur`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub column: Option<String>,
    pub value: Option<String>,
}

/// Possible responses from the search endpoint.
pub enum SearchResponse {
    Ok(Json<Vec<Researcher>>),
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /search/chercheur?column=&value=`
///
/// A missing `column` is rejected like any other column outside the
/// allow-list; a missing `value` matches every non-null cell.
pub async fn researchers<RR, FR, PR, LR>(
    State(state): State<AppState<RR, FR, PR, LR>>,
    Query(query): Query<SearchQuery>,
) -> Result<SearchResponse, ApiError>
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    let column = query.column.unwrap_or_default();
    let value = query.value.unwrap_or_default();
    let researchers = state
        .researcher_service
        .search_researchers(&column, value)
        .await?;
    Ok(SearchResponse::Ok(Json(researchers)))
}
