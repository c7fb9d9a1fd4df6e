//! Error types for schema resolution.

/// Error returned by the resolver when a struct cannot be flattened.
///
/// Malformed type tokens are *not* represented here — they are recovered
/// locally by treating the token as an opaque primitive, so resolution output
/// is best-effort rather than failing the whole struct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A referenced record path is absent from the schema catalog.
    #[error("schema not found for record path '{record_path}'")]
    SchemaNotFound { record_path: String },

    /// A record path recurred on the active resolution path; the reachable
    /// type graph is cyclic and flattening cannot terminate.
    #[error("cyclic schema reference to '{record_path}' (resolution path: {chain})")]
    CyclicSchema { record_path: String, chain: String },
}
