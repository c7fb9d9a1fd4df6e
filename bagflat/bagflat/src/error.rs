//! Error type for struct flattening.

use bagflat_core::ResolveError;

/// Why a struct produced no output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The struct contains unbounded arrays of records and the caller's
    /// policy rejects partial results.
    #[error("unresolved unbounded array(s) at: {}", paths.join(", "))]
    UnresolvedUnbounded { paths: Vec<String> },
}
