//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LabHubError`]
//! via `From`. The HTTP adapter maps the three variants to 400, 404 and 500.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum LabHubError {
    /// The request violated an invariant owned by the application.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No row matched the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed. The source is only ever logged.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Presence checks and allow-list rejections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A researcher was submitted without `daterecrut`.
    #[error("recruitment date is required")]
    MissingRecruitmentDate,

    /// The search column is not part of the allow-list.
    #[error("invalid search column: {0}")]
    InvalidSearchColumn(String),

    /// A path identifier could not be parsed as an integer.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A request payload could not be read into the expected fields.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind, e.g. `"Researcher"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
