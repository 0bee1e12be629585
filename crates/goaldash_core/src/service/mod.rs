//! Core use-case services.
//!
//! # Responsibility
//! - Apply user commands to dashboard state as single atomic steps.
//! - Derive per-goal totals and completion from current data.
//!
//! # Invariants
//! - A command either commits fully or leaves state unchanged, except that
//!   `SaveEdit` always clears the edit pointer.
//! - Derivations never mutate state.

pub mod aggregate;
pub mod command;
pub mod mutation;
