//! Flattening of ROS bag message schemas into struct definitions.
//!
//! Given a [`TopicCatalog`] of struct descriptors and a [`SchemaSource`],
//! this crate resolves every descriptor into a flat list of terminal fields
//! addressed by dotted path and builds the final path-keyed definitions the
//! downstream persistence layer serializes.
//!
//! # Pipeline
//!
//! ```text
//! TopicCatalog + SchemaSource
//!   └─ flatten_catalog          – one parallel flatten_struct per descriptor
//!       └─ Resolver::resolve_root   – recursive schema resolution
//!           └─ apply_overrides      – bool/string reclassification policy
//!               └─ build_struct_dict – FlaggedDouble convention, final map
//! ```
//!
//! Resolution is pure and the catalog is a read-only snapshot, so independent
//! descriptors are resolved across a rayon thread pool without locking.

mod error;
mod flatten;

pub use error::FlattenError;
pub use flatten::{
    flatten_catalog, flatten_struct, CatalogOutput, StructFailure, StructOutput, UnboundedPolicy,
};

pub use bagflat_core::{
    Arity, FieldDef, FinalEntry, FinalStructDict, LeafField, MemorySchemaSource, RecordSchema,
    ResolveError, ResolvedTree, SchemaSource, StructDescriptor, TopicCatalog, TypeRef,
};
pub use bagflat_resolve::{NoOverrides, OverrideResolver, OverrideTable, Resolver};

#[cfg(feature = "rosmsg")]
pub use bagflat_rosmsg::{parse_msg, FsSchemaSource};
