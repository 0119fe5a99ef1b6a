//! Axum router assembly.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use labhub_app::ports::{
    FacultyRepository, LaboratoryRepository, PublicationRepository, ResearcherRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes with a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR, FR, PR, LR>(state: AppState<RR, FR, PR, LR>) -> Router
where
    RR: ResearcherRepository + Send + Sync + 'static,
    FR: FacultyRepository + Send + Sync + 'static,
    PR: PublicationRepository + Send + Sync + 'static,
    LR: LaboratoryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer for the configured origins.
///
/// Returns `None` when no origin is configured, leaving CORS to whatever sits
/// in front of the service. A single `*` allows any origin. Origins that are
/// not valid header values are skipped.
#[must_use]
pub fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(allowed)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use labhub_app::services::faculty_service::FacultyService;
    use labhub_app::services::laboratory_service::LaboratoryService;
    use labhub_app::services::publication_service::PublicationService;
    use labhub_app::services::researcher_service::ResearcherService;
    use labhub_domain::error::LabHubError;
    use labhub_domain::faculty::{Faculty, FacultyFields};
    use labhub_domain::id::{FacultyId, LaboratoryId, ResearcherId};
    use labhub_domain::laboratory::{HierarchyNode, Laboratory};
    use labhub_domain::publication::{Publication, PublicationFields};
    use labhub_domain::researcher::{Researcher, ResearcherFields};
    use labhub_domain::search::SearchColumn;
    use tower::ServiceExt;

    struct StubResearcherRepo;
    struct StubFacultyRepo;
    struct StubPublicationRepo;
    struct StubLaboratoryRepo;

    fn stored(id: i64, fields: ResearcherFields) -> Researcher {
        Researcher {
            id: ResearcherId::new(id),
            fields,
        }
    }

    impl ResearcherRepository for StubResearcherRepo {
        async fn create(&self, fields: ResearcherFields) -> Result<Researcher, LabHubError> {
            Ok(stored(1, fields))
        }
        async fn get_by_id(&self, _id: ResearcherId) -> Result<Option<Researcher>, LabHubError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Researcher>, LabHubError> {
            Ok(vec![])
        }
        async fn find_by_name_or_email(
            &self,
            _term: String,
        ) -> Result<Vec<Researcher>, LabHubError> {
            Ok(vec![])
        }
        async fn find_by_column(
            &self,
            _column: SearchColumn,
            _value: String,
        ) -> Result<Vec<Researcher>, LabHubError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            _id: ResearcherId,
            _fields: ResearcherFields,
        ) -> Result<Option<Researcher>, LabHubError> {
            Ok(None)
        }
        async fn delete(&self, _id: ResearcherId) -> Result<Option<Researcher>, LabHubError> {
            Err(LabHubError::Storage(Box::new(std::io::Error::other(
                "database is locked",
            ))))
        }
    }

    impl FacultyRepository for StubFacultyRepo {
        async fn create(&self, fields: FacultyFields) -> Result<Faculty, LabHubError> {
            Ok(Faculty {
                id: FacultyId::new(1),
                fields,
            })
        }
        async fn get_all(&self) -> Result<Vec<Faculty>, LabHubError> {
            Ok(vec![])
        }
        async fn find_by_name(&self, _term: String) -> Result<Vec<Faculty>, LabHubError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            _id: FacultyId,
            _fields: FacultyFields,
        ) -> Result<Option<Faculty>, LabHubError> {
            Ok(None)
        }
        async fn delete(&self, _id: FacultyId) -> Result<Option<Faculty>, LabHubError> {
            Ok(None)
        }
    }

    impl PublicationRepository for StubPublicationRepo {
        async fn create(&self, _fields: PublicationFields) -> Result<Publication, LabHubError> {
            unimplemented!("not exercised")
        }
        async fn get_all(&self) -> Result<Vec<Publication>, LabHubError> {
            Ok(vec![])
        }
        async fn find_by_title(&self, _term: String) -> Result<Vec<Publication>, LabHubError> {
            Ok(vec![])
        }
        async fn find_by_author(
            &self,
            _researcher_id: ResearcherId,
        ) -> Result<Vec<Publication>, LabHubError> {
            Ok(vec![])
        }
    }

    impl LaboratoryRepository for StubLaboratoryRepo {
        async fn get_all(&self) -> Result<Vec<Laboratory>, LabHubError> {
            Ok(vec![])
        }
        async fn hierarchy(&self, _id: LaboratoryId) -> Result<Vec<HierarchyNode>, LabHubError> {
            Ok(vec![])
        }
    }

    fn app() -> Router {
        build(AppState::new(
            ResearcherService::new(StubResearcherRepo),
            FacultyService::new(StubFacultyRepo),
            PublicationService::new(StubPublicationRepo),
            LaboratoryService::new(StubLaboratoryRepo),
        ))
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_return_not_found_when_researcher_missing() {
        let (status, body) = send(get("/chercheurs/3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Researcher 3 not found");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_not_numeric() {
        let (status, body) = send(get("/chercheurs/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "invalid identifier: abc");
    }

    #[tokio::test]
    async fn should_return_created_with_generated_id() {
        let (status, body) = send(json(
            "POST",
            "/chercheurs",
            r#"{"chnom":"Ada","daterecrut":"2019-09-01"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: Researcher = serde_json::from_str(&body).unwrap();
        assert_eq!(created.id, ResearcherId::new(1));
        assert_eq!(
            created.fields.recruited_on,
            NaiveDate::from_ymd_opt(2019, 9, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn should_return_bad_request_when_recruitment_date_missing() {
        let (status, body) = send(json("POST", "/chercheurs", r#"{"chnom":"Ada"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "recruitment date is required");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_body_fields_have_wrong_shape() {
        for body in [
            r#"{"chnom":"Ada","daterecrut":"01/09/2019"}"#,
            r#"{"chnom":"Ada","daterecrut":20190901}"#,
            r#"{"chnom":"Ada","daterecrut":"2019-09-01","salaire":"beaucoup"}"#,
            r#"{"chnom":"Ada","#,
        ] {
            let (status, message) = send(json("POST", "/chercheurs", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert!(message.starts_with("invalid payload: "), "{message}");
        }
    }

    #[tokio::test]
    async fn should_return_bad_request_when_content_type_missing() {
        let request = Request::builder()
            .method("POST")
            .uri("/facultes")
            .body(Body::from(r#"{"facnom":"Sciences"}"#))
            .unwrap();
        let (status, message) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.starts_with("invalid payload: "), "{message}");

        let (status, _) = send(json("PUT", "/facultes/1", r#"{"facnom":4}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_internal_error_with_generic_body_when_storage_fails() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/chercheurs/1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "internal server error");
    }

    #[tokio::test]
    async fn should_reject_search_on_column_outside_allow_list() {
        let (status, _) = send(get("/search/chercheur?column=password&value=a")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(get("/search/chercheur?value=a")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_accept_search_on_allowed_column() {
        let (status, body) = send(get("/search/chercheur?column=email&value=a")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn should_return_not_found_when_faculty_missing() {
        let (status, _) = send(json("PUT", "/facultes/8", r#"{"facnom":"x"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_not_expose_single_faculty_get() {
        let (status, _) = send(get("/facultes/1")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_return_empty_hierarchy() {
        let (status, body) = send(get("/laboratoires/1/hierarchie")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[test]
    fn should_skip_cors_when_no_origin_configured() {
        assert!(cors_layer(&[]).is_none());
    }

    #[test]
    fn should_build_cors_for_wildcard_and_lists() {
        assert!(cors_layer(&["*".to_string()]).is_some());
        assert!(cors_layer(&["http://localhost:5173".to_string()]).is_some());
    }

    #[tokio::test]
    async fn should_answer_preflight_when_cors_enabled() {
        let layer = cors_layer(&["http://localhost:5173".to_string()]).unwrap();
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/chercheurs")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app().layer(layer).oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }
}
