use thiserror::Error;

/// Errors surfaced at engine boundaries. Everything else inside the
/// simulation resolves through documented default values instead of failing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller handed the engine structurally broken data: duplicate ids where
    /// uniqueness is required, a match between a team and itself, a side
    /// without any squad. The operation is aborted with no partial mutation.
    #[error("data integrity: {0}")]
    DataIntegrity(String),

    /// A user action failed validation (e.g. confirming a lineup without
    /// exactly 11 starters). The caller should re-prompt.
    #[error("validation: {0}")]
    Validation(String),

    /// The external persistence collaborator failed to load or save state.
    #[error("storage: {0}")]
    Storage(String),
}
