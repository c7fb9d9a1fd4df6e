//! Special-type overrides for ambiguous terminal types.
//!
//! The domain treats `bool` and `string` leaves as potentially mis-typed
//! enumerations (a power state recorded as a bare bool, a cell name recorded
//! as a string). Reclassification is a pure policy boundary: the engine asks
//! an injected [`OverrideResolver`] and never blocks on console I/O.

use std::collections::HashMap;

use bagflat_core::{LeafField, ResolvedTree};

/// Terminal types eligible for reclassification.
const AMBIGUOUS_TYPES: [&str; 2] = ["bool", "string"];

/// Pure reclassification policy for ambiguous terminal types.
///
/// Implementations map `(original type, leaf path)` to a replacement type, or
/// `None` to keep the leaf unchanged. A leaf's identity (name/path) is never
/// altered, only its terminal type classification.
pub trait OverrideResolver: Sync {
    fn resolve(&self, ty: &str, path: &str) -> Option<String>;
}

/// Policy that keeps every leaf unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideResolver for NoOverrides {
    fn resolve(&self, _ty: &str, _path: &str) -> Option<String> {
        None
    }
}

/// Table-driven [`OverrideResolver`] keyed by `(type, path)`.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<(String, String), String>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map leaves of type `ty` at `path` to `new_ty`.
    pub fn set(
        &mut self,
        ty: impl Into<String>,
        path: impl Into<String>,
        new_ty: impl Into<String>,
    ) {
        self.entries
            .insert((ty.into(), path.into()), new_ty.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OverrideResolver for OverrideTable {
    fn resolve(&self, ty: &str, path: &str) -> Option<String> {
        self.entries
            .get(&(ty.to_string(), path.to_string()))
            .cloned()
    }
}

/// Apply `resolver` to every ambiguous leaf of `tree`, replacing terminal
/// types where the policy returns a new one.
pub fn apply_overrides(tree: ResolvedTree, resolver: &dyn OverrideResolver) -> ResolvedTree {
    match tree {
        ResolvedTree::Leaf(leaf) => ResolvedTree::Leaf(override_leaf(leaf, resolver)),
        ResolvedTree::Group(nodes) => ResolvedTree::Group(
            nodes
                .into_iter()
                .map(|n| apply_overrides(n, resolver))
                .collect(),
        ),
        ResolvedTree::Unbounded { path, nodes } => ResolvedTree::Unbounded {
            path,
            nodes: nodes
                .into_iter()
                .map(|n| apply_overrides(n, resolver))
                .collect(),
        },
    }
}

fn override_leaf(leaf: LeafField, resolver: &dyn OverrideResolver) -> LeafField {
    if !AMBIGUOUS_TYPES.contains(&leaf.ty.as_str()) {
        return leaf;
    }
    match resolver.resolve(&leaf.ty, &leaf.path) {
        Some(new_ty) => {
            tracing::debug!(path = %leaf.path, from = %leaf.ty, to = %new_ty, "type override applied");
            LeafField::new(leaf.path, new_ty)
        }
        None => leaf,
    }
}
