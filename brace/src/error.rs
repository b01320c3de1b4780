use thiserror::Error;

pub type EmitResult<T> = Result<T, EmitError>;

/// Failures surfaced by [`ScopeEmitter`](crate::emit::ScopeEmitter).
///
/// The scope variants are caller bugs (mismatched open/close calls). They are
/// reported immediately and are never worth retrying.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("close_scope called with no open scope")]
    ScopeUnderflow,

    #[error("{depth} scope(s) left open at end of emission")]
    UnclosedScopes { depth: usize },

    #[error("failed to write to output sink")]
    Io(#[from] std::io::Error),
}

impl EmitError {
    /// True for mismatched open/close usage, false for sink failures.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::ScopeUnderflow | Self::UnclosedScopes { .. })
    }
}
