//! Core types and collaborator contracts for `bagflat`.
//!
//! This crate is I/O-free: it defines the schema data model
//! ([`RecordSchema`] / [`FieldDef`]), the resolution output types
//! ([`ResolvedTree`] / [`LeafField`] / [`FinalStructDict`]), and the
//! [`SchemaSource`] trait through which the resolver consults a schema
//! catalog without knowing anything about on-disk layout.

mod catalog;
mod entry;
mod error;
mod resolved;
mod schema;
mod source;
mod type_ref;

pub use catalog::{StructDescriptor, TopicCatalog};
pub use entry::{FinalEntry, FinalStructDict};
pub use error::ResolveError;
pub use resolved::{LeafField, ResolvedTree};
pub use schema::{FieldDef, RecordSchema, NAMESPACE_SEP};
pub use source::{MemorySchemaSource, SchemaSource};
pub use type_ref::{Arity, TypeRef};
