//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod faculty_service;
pub mod laboratory_service;
pub mod publication_service;
pub mod researcher_service;

/// Normalise an optional free-text filter: blank terms mean "no filter".
pub(crate) fn search_term(search: Option<String>) -> Option<String> {
    search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
}
