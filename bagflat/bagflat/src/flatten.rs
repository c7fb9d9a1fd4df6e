//! Catalog-level flattening driver.

use std::collections::BTreeMap;

use rayon::prelude::*;

use bagflat_core::{
    FinalStructDict, LeafField, SchemaSource, StructDescriptor, TopicCatalog,
};
use bagflat_resolve::{apply_overrides, build_struct_dict, OverrideResolver, Resolver};

use crate::error::FlattenError;

/// How to surface unbounded arrays of records, whose element count is
/// unknown at schema-definition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnboundedPolicy {
    /// Fail the struct with [`FlattenError::UnresolvedUnbounded`].
    Reject,
    /// Keep one representative element's leaves and report the affected
    /// paths in [`StructOutput::unresolved`] as a caveat.
    Representative,
}

/// Everything produced for one successfully flattened struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructOutput {
    pub struct_name: String,
    /// Every resolved terminal field in resolution order (diagnostic output).
    pub leaves: Vec<LeafField>,
    /// Final path-keyed definitions for the persistence layer.
    pub entries: FinalStructDict,
    /// Paths of unbounded record arrays represented by a single element;
    /// empty unless the policy is [`UnboundedPolicy::Representative`].
    pub unresolved: Vec<String>,
}

/// One struct that produced no output, with the namespace it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructFailure {
    pub namespace: String,
    pub struct_name: String,
    pub error: FlattenError,
}

/// Per-namespace outputs plus the structs that could not be flattened.
#[derive(Debug, Clone, Default)]
pub struct CatalogOutput {
    /// Namespace → outputs, in catalog order within each namespace.
    pub structs: BTreeMap<String, Vec<StructOutput>>,
    pub failures: Vec<StructFailure>,
}

impl CatalogOutput {
    pub fn get(&self, namespace: &str, struct_name: &str) -> Option<&StructOutput> {
        self.structs
            .get(namespace)?
            .iter()
            .find(|s| s.struct_name == struct_name)
    }
}

/// Flatten one struct descriptor: resolve, apply overrides, build the final
/// definitions. On any error no partial output is produced for the struct.
pub fn flatten_struct(
    descriptor: &StructDescriptor,
    source: &dyn SchemaSource,
    overrides: &dyn OverrideResolver,
    policy: UnboundedPolicy,
) -> Result<StructOutput, FlattenError> {
    let resolver = Resolver::new(source);
    let tree = resolver.resolve_root(descriptor)?;
    let tree = apply_overrides(tree, overrides);

    let unresolved = tree.unresolved_paths();
    if !unresolved.is_empty() {
        match policy {
            UnboundedPolicy::Reject => {
                return Err(FlattenError::UnresolvedUnbounded { paths: unresolved });
            }
            UnboundedPolicy::Representative => {
                tracing::warn!(
                    struct_name = %descriptor.struct_name,
                    paths = ?unresolved,
                    "unbounded arrays represented by a single element"
                );
            }
        }
    }

    let leaves: Vec<LeafField> = tree.leaves().into_iter().cloned().collect();
    let entries = build_struct_dict(&leaves);
    Ok(StructOutput {
        struct_name: descriptor.struct_name.clone(),
        leaves,
        entries,
        unresolved,
    })
}

/// Flatten every descriptor of `catalog` across a rayon thread pool.
///
/// Failures never abort the run: each failed struct is recorded in
/// [`CatalogOutput::failures`] and contributes nothing to
/// [`CatalogOutput::structs`].
pub fn flatten_catalog(
    catalog: &TopicCatalog,
    source: &dyn SchemaSource,
    overrides: &dyn OverrideResolver,
    policy: UnboundedPolicy,
) -> CatalogOutput {
    let jobs: Vec<(&str, &StructDescriptor)> = catalog
        .namespaces()
        .flat_map(|(ns, descriptors)| descriptors.iter().map(move |d| (ns, d)))
        .collect();

    let results: Vec<(&str, &StructDescriptor, Result<StructOutput, FlattenError>)> = jobs
        .into_par_iter()
        .map(|(ns, descriptor)| {
            let result = flatten_struct(descriptor, source, overrides, policy);
            (ns, descriptor, result)
        })
        .collect();

    let mut output = CatalogOutput::default();
    for (ns, descriptor, result) in results {
        match result {
            Ok(out) => output.structs.entry(ns.to_string()).or_default().push(out),
            Err(error) => {
                tracing::debug!(
                    namespace = ns,
                    struct_name = %descriptor.struct_name,
                    %error,
                    "struct not flattened"
                );
                output.failures.push(StructFailure {
                    namespace: ns.to_string(),
                    struct_name: descriptor.struct_name.clone(),
                    error,
                });
            }
        }
    }
    output
}
