//! Filesystem-backed schema source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bagflat_core::{RecordSchema, SchemaSource, NAMESPACE_SEP};

use crate::parser::parse_msg;

/// [`SchemaSource`] over one or more on-disk message trees.
///
/// Roots are searched in order, so a workspace tree can shadow a system-wide
/// install (`/opt/ros/<distro>/share`). A record path `"pkg/Type"` maps to
/// `{root}/pkg/msg/Type.msg`. Parsed schemas are cached per path, misses
/// included, so repeated references during resolution do not re-read files.
pub struct FsSchemaSource {
    roots: Vec<PathBuf>,
    cache: Mutex<HashMap<String, Option<RecordSchema>>>,
}

impl FsSchemaSource {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn single_root(root: impl Into<PathBuf>) -> Self {
        Self::new(vec![root.into()])
    }

    fn msg_path(root: &Path, record_path: &str) -> Option<PathBuf> {
        let (pkg, ty) = record_path.split_once(NAMESPACE_SEP)?;
        Some(root.join(pkg).join("msg").join(format!("{ty}.msg")))
    }

    fn read_schema(&self, record_path: &str) -> Option<RecordSchema> {
        for root in &self.roots {
            let Some(path) = Self::msg_path(root, record_path) else {
                return None;
            };
            if !path.is_file() {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(text) => return Some(parse_msg(record_path, &text)),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to read message definition");
                    return None;
                }
            }
        }
        None
    }
}

impl SchemaSource for FsSchemaSource {
    fn load(&self, record_path: &str) -> Option<RecordSchema> {
        if let Some(cached) = self.cache.lock().expect("cache poisoned").get(record_path) {
            return cached.clone();
        }
        let loaded = self.read_schema(record_path);
        self.cache
            .lock()
            .expect("cache poisoned")
            .insert(record_path.to_string(), loaded.clone());
        loaded
    }

    fn locate(&self, base: &str, current_dir: &str) -> Option<String> {
        if current_dir.is_empty() {
            return None;
        }
        let qualified = format!("{current_dir}{NAMESPACE_SEP}{base}");
        for root in &self.roots {
            if Self::msg_path(root, &qualified).is_some_and(|p| p.is_file()) {
                return Some(qualified);
            }
        }
        None
    }
}
