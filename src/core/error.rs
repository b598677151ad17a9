use thiserror::Error;

use crate::core::distribution::ModuleType;

/// Central error type for the resolution core.
/// Every fallible operation returns `Result<T, DistroError>`.
#[derive(Debug, Error)]
pub enum DistroError {
    // ── Address ─────────────────────────────────────────
    #[error("Malformed address for server {server_id}: port must be an integer between 1 and 65535")]
    MalformedAddress { server_id: String },

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidMavenCoordinate(String),

    // ── Module ──────────────────────────────────────────
    #[error("Module {name} ({id}) of type {kind} requires a valid maven identifier")]
    MissingMavenIdentity {
        name: String,
        id: String,
        kind: ModuleType,
    },

    #[error("Module {name} ({id}) of type {kind} must declare an artifact path or a valid maven identifier")]
    AmbiguousFileModule {
        name: String,
        id: String,
        kind: ModuleType,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type DistroResult<T> = Result<T, DistroError>;
