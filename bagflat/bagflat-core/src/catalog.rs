//! Topic catalog: the set of top-level structs selected for flattening.

use std::collections::BTreeMap;

/// One unit of flattening: a struct name and the raw root type token it
/// resolves from, e.g. `("Gyro", "ds_sensor_msgs/Gyro")`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StructDescriptor {
    pub struct_name: String,
    pub root_type: String,
}

impl StructDescriptor {
    pub fn new(struct_name: impl Into<String>, root_type: impl Into<String>) -> Self {
        Self {
            struct_name: struct_name.into(),
            root_type: root_type.into(),
        }
    }
}

/// Mapping from namespace to the descriptors discovered under it.
///
/// The excluded log-scanning subsystem supplies the `(topic, type)` listings;
/// this type only derives descriptors from them: the struct name is the
/// capitalized last topic segment, and duplicate descriptors within a
/// namespace are dropped.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    namespaces: BTreeMap<String, Vec<StructDescriptor>>,
}

impl TopicCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `(topic, type)` pair under `namespace`, deriving the struct
    /// name from the topic's last `/`-separated segment. Duplicates within
    /// the namespace are ignored.
    pub fn add_topic(&mut self, namespace: &str, topic: &str, root_type: &str) {
        let last = topic.rsplit('/').next().unwrap_or(topic);
        let descriptor = StructDescriptor::new(capitalize(last), root_type);
        let entries = self.namespaces.entry(namespace.to_string()).or_default();
        if !entries.contains(&descriptor) {
            entries.push(descriptor);
        }
    }

    /// Register an explicit descriptor under `namespace`.
    pub fn add_descriptor(&mut self, namespace: &str, descriptor: StructDescriptor) {
        let entries = self.namespaces.entry(namespace.to_string()).or_default();
        if !entries.contains(&descriptor) {
            entries.push(descriptor);
        }
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &[StructDescriptor])> {
        self.namespaces
            .iter()
            .map(|(ns, ds)| (ns.as_str(), ds.as_slice()))
    }

    /// All descriptors across every namespace, in namespace order.
    pub fn descriptors(&self) -> impl Iterator<Item = &StructDescriptor> {
        self.namespaces.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.values().all(Vec::is_empty)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
