//! Recursive schema resolution.
//!
//! [`Resolver`] walks the type-reference graph reachable from a field or a
//! struct descriptor, consulting the catalog for every record reference and
//! expanding arrays at each recursion step. Resolution is a pure function of
//! its inputs and an immutable catalog snapshot: independent descriptors may
//! be resolved concurrently without locking.

use bagflat_core::{
    Arity, FieldDef, ResolveError, ResolvedTree, SchemaSource, StructDescriptor, TypeRef,
};

use crate::expand::expand;
use crate::type_token::parse_type_token;

/// Base type name of the record-system time primitive.
const TIME_TYPE: &str = "time";

/// Terminal type emitted for the `header.stamp` timestamp field.
const ROSTIME_TYPE: &str = "rostime";

/// The recursive resolution core, borrowing a read-only schema catalog.
pub struct Resolver<'a> {
    source: &'a dyn SchemaSource,
}

impl<'a> Resolver<'a> {
    pub fn new(source: &'a dyn SchemaSource) -> Self {
        Self { source }
    }

    /// Resolve one declared field into a tree of terminal leaves.
    ///
    /// `current_dir` is the namespace of the record the field was declared
    /// in; `prefix` is the dotted ancestor path (empty, or ending in `'.'`).
    ///
    /// # Errors
    ///
    /// [`ResolveError::SchemaNotFound`] if a referenced record is absent from
    /// the catalog; [`ResolveError::CyclicSchema`] if a record recurs on the
    /// active resolution path.
    pub fn resolve_field(
        &self,
        field: &FieldDef,
        current_dir: &str,
        prefix: &str,
    ) -> Result<ResolvedTree, ResolveError> {
        let mut active = Vec::new();
        self.resolve_inner(field, current_dir, prefix, &mut active)
    }

    /// Resolve a struct descriptor's root record into the full resolved tree.
    ///
    /// Root fields carry no struct-name prefix: a root record with a `header`
    /// field yields paths like `header.stamp`. Array arity on a root token is
    /// not meaningful for a struct descriptor and is ignored with a warning.
    pub fn resolve_root(&self, descriptor: &StructDescriptor) -> Result<ResolvedTree, ResolveError> {
        let ty = parse_type_token(&descriptor.root_type, "", self.source);
        if !ty.is_record_path() {
            return Err(ResolveError::SchemaNotFound {
                record_path: ty.base,
            });
        }
        if ty.arity.is_array() {
            tracing::warn!(
                struct_name = %descriptor.struct_name,
                root_type = %descriptor.root_type,
                "ignoring array arity on root type"
            );
        }

        let record = self
            .source
            .load(&ty.base)
            .ok_or_else(|| ResolveError::SchemaNotFound {
                record_path: ty.base.clone(),
            })?;
        tracing::debug!(struct_name = %descriptor.struct_name, root = %ty.base, "resolving struct");

        let mut active = vec![ty.base.clone()];
        let mut nodes = Vec::with_capacity(record.fields.len());
        for child in &record.fields {
            nodes.push(self.resolve_inner(child, record.dir(), "", &mut active)?);
        }
        Ok(ResolvedTree::Group(nodes))
    }

    fn resolve_inner(
        &self,
        field: &FieldDef,
        current_dir: &str,
        prefix: &str,
        active: &mut Vec<String>,
    ) -> Result<ResolvedTree, ResolveError> {
        let ty = parse_type_token(&field.ty, current_dir, self.source);
        let path = format!("{prefix}{}", field.name);

        // Timestamp special case, before the general branches: the header
        // stamp collapses to a single `rostime` leaf instead of expanding
        // the time record.
        if ty.base == TIME_TYPE && path == "header.stamp" {
            return Ok(ResolvedTree::leaf(path, ROSTIME_TYPE));
        }

        if ty.is_record_path() {
            self.resolve_record(&ty, &path, active)
        } else {
            Ok(resolve_primitive(&ty, path))
        }
    }

    fn resolve_record(
        &self,
        ty: &TypeRef,
        path: &str,
        active: &mut Vec<String>,
    ) -> Result<ResolvedTree, ResolveError> {
        if active.iter().any(|p| p == &ty.base) {
            return Err(ResolveError::CyclicSchema {
                record_path: ty.base.clone(),
                chain: active.join(" -> "),
            });
        }

        let record = self
            .source
            .load(&ty.base)
            .ok_or_else(|| ResolveError::SchemaNotFound {
                record_path: ty.base.clone(),
            })?;

        active.push(ty.base.clone());
        let child_prefix = format!("{path}.");
        let mut nodes = Vec::with_capacity(record.fields.len());
        for child in &record.fields {
            nodes.push(self.resolve_inner(child, record.dir(), &child_prefix, active)?);
        }
        active.pop();

        // The arity applies to the entire collected group: an array of
        // records duplicates the whole nested block, group-major.
        Ok(ResolvedTree::Group(expand(nodes, ty.arity, path)))
    }
}

/// Emit a terminal leaf for a primitive-typed field.
///
/// Unbounded arrays of primitives are terminal and never expanded — the leaf
/// keeps the `[]` marker on its type so downstream consumers can tell
/// `uint8[]` from `uint8`. Fixed arrays duplicate the single leaf with
/// ordinal suffixes.
fn resolve_primitive(ty: &TypeRef, path: String) -> ResolvedTree {
    match ty.arity {
        Arity::Unbounded => ResolvedTree::leaf(path, format!("{}[]", ty.base)),
        Arity::Scalar => ResolvedTree::leaf(path, ty.base.clone()),
        Arity::Fixed(_) => {
            let leaf = ResolvedTree::leaf(path.clone(), ty.base.clone());
            ResolvedTree::Group(expand(vec![leaf], ty.arity, &path))
        }
    }
}
