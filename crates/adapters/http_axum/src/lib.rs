//! # labhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** (`/chercheurs`, `/facultes`, `/publications`,
//!   `/laboratoires`, `/search/chercheur`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: JSON rows on success,
//!   plain-text messages on failure
//!
//! ## Dependency rule
//! Depends on `labhub-app` (for port traits and services) and `labhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
