//! Flutter-facing bridge over `goaldash_core`.

pub mod api;
