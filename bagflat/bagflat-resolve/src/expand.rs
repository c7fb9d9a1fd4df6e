//! Array expansion over resolved groups.

use bagflat_core::{Arity, LeafField, ResolvedTree};

/// Expand an ordered group of resolved nodes according to `arity`.
///
/// `group_path` is the dotted path of the array field itself — the path
/// segment that receives the ordinal suffix. For a primitive leaf this equals
/// the leaf's own path.
///
/// - [`Arity::Scalar`] returns `nodes` unchanged.
/// - [`Arity::Fixed`]`(n)` returns `n` deep copies laid out group-major (all
///   of copy 1, then all of copy 2, …); in copy `i` every descendant path has
///   its `group_path` segment rewritten to `{segment}_{i}`, 1-indexed.
/// - [`Arity::Unbounded`] wraps `nodes` in a single
///   [`ResolvedTree::Unbounded`] marker; the element count is unknown, so the
///   caller must decide how to surface the group.
pub fn expand(nodes: Vec<ResolvedTree>, arity: Arity, group_path: &str) -> Vec<ResolvedTree> {
    match arity {
        Arity::Scalar => nodes,
        Arity::Unbounded => vec![ResolvedTree::Unbounded {
            path: group_path.to_string(),
            nodes,
        }],
        Arity::Fixed(n) => (1..=n)
            .map(|ordinal| {
                ResolvedTree::Group(
                    nodes
                        .iter()
                        .map(|node| with_ordinal(node, group_path, ordinal))
                        .collect(),
                )
            })
            .collect(),
    }
}

/// Deep-copy `node` with every path that runs through `group_path` rewritten
/// to carry the `_{ordinal}` suffix on that segment.
fn with_ordinal(node: &ResolvedTree, group_path: &str, ordinal: usize) -> ResolvedTree {
    match node {
        ResolvedTree::Leaf(leaf) => ResolvedTree::Leaf(LeafField::new(
            reindex_path(&leaf.path, group_path, ordinal),
            leaf.ty.clone(),
        )),
        ResolvedTree::Group(children) => ResolvedTree::Group(
            children
                .iter()
                .map(|c| with_ordinal(c, group_path, ordinal))
                .collect(),
        ),
        ResolvedTree::Unbounded { path, nodes } => ResolvedTree::Unbounded {
            path: reindex_path(path, group_path, ordinal),
            nodes: nodes
                .iter()
                .map(|c| with_ordinal(c, group_path, ordinal))
                .collect(),
        },
    }
}

/// Rewrite the `group_path` segment inside `path`: `a.pos.x` with group path
/// `a.pos` and ordinal 2 becomes `a.pos_2.x`. Paths that do not run through
/// `group_path` are returned unchanged.
fn reindex_path(path: &str, group_path: &str, ordinal: usize) -> String {
    if path == group_path {
        return format!("{path}_{ordinal}");
    }
    match path.strip_prefix(group_path) {
        Some(rest) if rest.starts_with('.') => format!("{group_path}_{ordinal}{rest}"),
        _ => path.to_string(),
    }
}
