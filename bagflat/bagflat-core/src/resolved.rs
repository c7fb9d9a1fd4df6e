//! Resolution output: leaf fields and the resolved tree.

/// One terminal field produced by flattening: a dotted path built from
/// ancestor field names and the terminal type name the engine could not
/// decompose further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafField {
    pub path: String,
    pub ty: String,
}

impl LeafField {
    pub fn new(path: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ty: ty.into(),
        }
    }
}

/// Recursive resolution result for one field.
///
/// `Group` represents one unwrapping level or one array-expansion block;
/// `Unbounded` marks an array of records whose element count is unknown,
/// holding one representative element's resolution. Callers must decide
/// explicitly how to surface `Unbounded` nodes — they are never silently
/// flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTree {
    Leaf(LeafField),
    Group(Vec<ResolvedTree>),
    Unbounded {
        /// Dotted path of the unbounded array field itself.
        path: String,
        /// Resolution of a single representative element.
        nodes: Vec<ResolvedTree>,
    },
}

impl ResolvedTree {
    pub fn leaf(path: impl Into<String>, ty: impl Into<String>) -> Self {
        ResolvedTree::Leaf(LeafField::new(path, ty))
    }

    /// In-order traversal over every leaf, descending into `Unbounded`
    /// representative elements as well.
    pub fn leaves(&self) -> Vec<&LeafField> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a LeafField>) {
        match self {
            ResolvedTree::Leaf(leaf) => out.push(leaf),
            ResolvedTree::Group(nodes) | ResolvedTree::Unbounded { nodes, .. } => {
                for n in nodes {
                    n.collect_leaves(out);
                }
            }
        }
    }

    /// Paths of every `Unbounded` node in the tree, in traversal order.
    pub fn unresolved_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_unresolved(&mut out);
        out
    }

    fn collect_unresolved(&self, out: &mut Vec<String>) {
        match self {
            ResolvedTree::Leaf(_) => {}
            ResolvedTree::Group(nodes) => {
                for n in nodes {
                    n.collect_unresolved(out);
                }
            }
            ResolvedTree::Unbounded { path, nodes } => {
                out.push(path.clone());
                for n in nodes {
                    n.collect_unresolved(out);
                }
            }
        }
    }
}
