//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the dashboard read and command APIs to Dart via FRB.
//! - Carry state across the boundary as JSON so the UI owns the snapshot.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every response carries a renderable `state_json`; on decode failure it
//!   falls back to the empty startup state.

use goaldash_core::{
    apply, build_view, core_version as core_version_inner, init_logging as init_logging_inner,
    Command, CommandOutcome, DashboardState,
};
use log::warn;
use std::path::Path;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), Path::new(log_dir.as_str())) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Response envelope shared by all dashboard calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    /// Whether the inputs were understood. `false` only on decode failure.
    pub ok: bool,
    /// One of `committed|rejected|ignored|none`.
    pub outcome: String,
    /// Updated state snapshot to hand back on the next call.
    pub state_json: String,
    /// Render-ready view of `state_json`.
    pub view_json: String,
    /// Human-readable diagnostics for UI/logs.
    pub message: String,
}

/// Returns the empty startup state and its view.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_initial() -> DashboardResponse {
    respond(true, "none", &DashboardState::new(), String::new())
}

/// Builds the view for a state snapshot without changing it.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_view(state_json: String) -> DashboardResponse {
    match decode_state(state_json.as_str()) {
        Ok(state) => respond(true, "none", &state, String::new()),
        Err(message) => respond(false, "none", &DashboardState::new(), message),
    }
}

/// Applies one JSON command to a JSON state snapshot.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
/// - Rejected commands return the input state unchanged with `ok = true`.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_apply(state_json: String, command_json: String) -> DashboardResponse {
    let state = match decode_state(state_json.as_str()) {
        Ok(state) => state,
        Err(message) => return respond(false, "none", &DashboardState::new(), message),
    };
    let command = match serde_json::from_str::<Command>(command_json.as_str()) {
        Ok(command) => command,
        Err(err) => {
            warn!("event=ffi_decode module=ffi status=error target=command");
            return respond(false, "none", &state, format!("invalid command: {err}"));
        }
    };

    let report = apply(state, command);
    let (outcome, message) = match &report.outcome {
        CommandOutcome::Committed => ("committed", String::new()),
        CommandOutcome::Rejected(err) => ("rejected", err.to_string()),
        CommandOutcome::Ignored => ("ignored", String::new()),
    };
    respond(true, outcome, &report.state, message)
}

fn decode_state(state_json: &str) -> Result<DashboardState, String> {
    if state_json.trim().is_empty() {
        return Ok(DashboardState::new());
    }
    serde_json::from_str::<DashboardState>(state_json).map_err(|err| {
        warn!("event=ffi_decode module=ffi status=error target=state");
        format!("invalid state: {err}")
    })
}

fn respond(ok: bool, outcome: &str, state: &DashboardState, message: String) -> DashboardResponse {
    match encode(state) {
        Ok((state_json, view_json)) => DashboardResponse {
            ok,
            outcome: outcome.to_string(),
            state_json,
            view_json,
            message,
        },
        Err(err) => DashboardResponse {
            ok: false,
            outcome: outcome.to_string(),
            state_json: String::new(),
            view_json: String::new(),
            message: format!("encode failed: {err}"),
        },
    }
}

fn encode(state: &DashboardState) -> Result<(String, String), serde_json::Error> {
    let state_json = serde_json::to_string(state)?;
    let view_json = serde_json::to_string(&build_view(state))?;
    Ok((state_json, view_json))
}
