use thiserror::Error;

/// Unified error type for the entire trip-stats-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Aggregation ─────────────────────────────────────────────────
    #[error("Category '{category}' is not in the active registry")]
    UnregisteredCategory { category: String },

    #[error("Category registry must contain at least one category")]
    EmptyRegistry,

    // ── Rendering ───────────────────────────────────────────────────
    #[error("Render surface '{0}' not found in the mounted markup")]
    MissingRenderSurface(String),

    #[error("Chart backend error ({backend}): {message}")]
    Backend { backend: String, message: String },

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
