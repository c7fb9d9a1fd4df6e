//! The [`SchemaSource`] catalog contract and an in-memory implementation.

use std::collections::HashMap;

use crate::schema::{RecordSchema, NAMESPACE_SEP};

/// Read-only schema catalog consulted during resolution.
///
/// Concrete sources decide where record definitions live (an on-disk message
/// tree, a preloaded map, …); the resolver only ever asks these two
/// questions. A source must behave as an immutable snapshot for the duration
/// of a run so that independent structs may be resolved concurrently.
pub trait SchemaSource: Sync {
    /// Fetch the record definition for a qualified path such as
    /// `"geometry_msgs/Vector3"`. `None` means the catalog has no such record.
    fn load(&self, record_path: &str) -> Option<RecordSchema>;

    /// Qualify a bare type name against `current_dir`, returning the
    /// qualified record path if one is known. `None` means the name does not
    /// denote a record reachable from `current_dir` and should be treated as
    /// a primitive.
    fn locate(&self, base: &str, current_dir: &str) -> Option<String>;
}

/// HashMap-backed [`SchemaSource`] for preloaded catalogs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySchemaSource {
    records: HashMap<String, RecordSchema>,
}

impl MemorySchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `schema` under its own qualified name.
    pub fn insert(&mut self, schema: RecordSchema) {
        self.records.insert(schema.full_name.clone(), schema);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SchemaSource for MemorySchemaSource {
    fn load(&self, record_path: &str) -> Option<RecordSchema> {
        self.records.get(record_path).cloned()
    }

    /// Exact `{current_dir}/{base}` match first, then a unique-suffix search
    /// over all registered paths. An ambiguous suffix (more than one match)
    /// yields `None`.
    fn locate(&self, base: &str, current_dir: &str) -> Option<String> {
        if !current_dir.is_empty() {
            let qualified = format!("{current_dir}{NAMESPACE_SEP}{base}");
            if self.records.contains_key(&qualified) {
                return Some(qualified);
            }
        }

        let suffix = format!("{NAMESPACE_SEP}{base}");
        let mut found: Option<&str> = None;
        for key in self.records.keys() {
            if key.ends_with(&suffix) {
                if found.is_some() {
                    return None;
                }
                found = Some(key.as_str());
            }
        }
        found.map(ToString::to_string)
    }
}
