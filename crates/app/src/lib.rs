//! # labhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ResearcherRepository` — CRUD, substring and column search for researchers
//!   - `FacultyRepository` — CRUD for faculties
//!   - `PublicationRepository` — list/create publications, authorship lookup
//!   - `LaboratoryRepository` — list laboratories, supervision hierarchy
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ResearcherService`, `FacultyService`, `PublicationService`, `LaboratoryService`
//! - Run presence checks and turn missing rows into not-found errors
//!
//! ## Dependency rule
//! Depends on `labhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
