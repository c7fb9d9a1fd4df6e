//! Schema flattening engine for `bagflat`.
//!
//! Given a [`SchemaSource`](bagflat_core::SchemaSource) catalog and a struct
//! descriptor, this crate resolves the descriptor's root record into a flat
//! sequence of terminal fields addressed by dotted path.
//!
//! Key components:
//! - [`parse_type_token`] — raw type token → [`TypeRef`](bagflat_core::TypeRef)
//! - [`expand`] — fixed-array duplication with ordinal path suffixes
//! - [`Resolver`] — the recursive resolution core
//! - [`apply_overrides`] / [`OverrideResolver`] — pure reclassification of
//!   ambiguous terminal types
//! - [`build_struct_dict`] — resolved leaves → final path-keyed definitions
//!
//! # Pipeline
//!
//! ```text
//! StructDescriptor
//!   └─ Resolver::resolve_root   – catalog lookups, recursion, array expansion
//!       └─ apply_overrides      – bool/string reclassification
//!           └─ build_struct_dict – FlaggedDouble convention, last-write-wins map
//! ```

mod builder;
mod expand;
mod overrides;
mod resolver;
mod type_token;

pub use builder::{build_struct_dict, FLAGGED_ALIAS};
pub use expand::expand;
pub use overrides::{apply_overrides, NoOverrides, OverrideResolver, OverrideTable};
pub use resolver::Resolver;
pub use type_token::{parse_type_token, DEFAULT_HEADER_TYPE, HEADER_ALIAS};
