//! Domain model for goals, projects, and transient UI pointers.
//!
//! # Responsibility
//! - Define the canonical records shared by stores, services, and views.
//! - Normalize raw form input (names, numeric fields) at one boundary.
//!
//! # Invariants
//! - Goals and projects have no identity beyond their list position.
//! - Stored names are trimmed and never blank.
//! - A missing contribution entry means zero, never an error.

pub mod goal;
pub mod input;
pub mod pointer;
pub mod project;
