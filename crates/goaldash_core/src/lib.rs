//! Core state and derivation rules for the goal-tracking dashboard.
//! This crate is the single source of truth for dashboard invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod store;
pub mod view;

pub use config::DashboardConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::goal::Goal;
pub use model::input::{parse_amount, FieldValue, SubmittedContributions, ValidationError};
pub use model::pointer::{EditPointer, FormPanel};
pub use model::project::{Contribution, Contributions, Project};
pub use service::aggregate::{
    achieved_fraction, gauge_state, goal_progress, total_contribution, GaugeState, GoalProgress,
};
pub use service::command::{first_active_row, Command, RowAction, RowSignal};
pub use service::mutation::{apply, CommandOutcome, CommandReport, DashboardError, DashboardService};
pub use state::DashboardState;
pub use store::goal_store::GoalStore;
pub use store::project_store::{NameUpdate, ProjectStore};
pub use store::IndexError;
pub use view::{build_view, BoardContent, DashboardView, GaugeView, ProjectEntry, ProjectList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
