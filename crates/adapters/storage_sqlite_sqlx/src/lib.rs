//! # labhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `labhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Every repository method issues exactly one statement. The laboratory
//! hierarchy is a single `WITH RECURSIVE` query evaluated by `SQLite`.
//!
//! ## Dependency rule
//! Depends on `labhub-app` (for port traits) and `labhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod faculty_repo;
mod laboratory_repo;
mod like;
mod pool;
mod publication_repo;
mod researcher_repo;

pub use error::StorageError;
pub use faculty_repo::SqliteFacultyRepository;
pub use laboratory_repo::SqliteLaboratoryRepository;
pub use pool::{Config, Database};
pub use publication_repo::SqlitePublicationRepository;
pub use researcher_repo::SqliteResearcherRepository;
