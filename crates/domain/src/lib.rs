//! # labhub-domain
//!
//! Pure domain model for the labhub academic directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Researchers** (people with grade, status, supervisor, affiliation)
//! - Define **Faculties** and **Laboratories** (organisational units)
//! - Define **Publications** (authored works, linked to researchers)
//! - Define the **search allow-list** for column-restricted researcher search
//! - Enforce the few invariants the application owns (mandatory recruitment date)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod faculty;
pub mod laboratory;
pub mod publication;
pub mod researcher;
pub mod search;
