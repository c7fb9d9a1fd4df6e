//! Record schema types as they appear in message definition files.

/// Separator between the namespace (package) and type components of a
/// qualified record path, e.g. `"std_msgs/Header"`.
pub const NAMESPACE_SEP: char = '/';

/// One declared field of a record, carrying its *raw* type token.
///
/// Tokens are kept unparsed (`"float64[3]"`, `"Header"`, `"std_msgs/Header"`)
/// because qualifying a bare name against the current directory requires
/// catalog access; the resolver parses tokens into
/// [`TypeRef`](crate::TypeRef)s at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub ty: String,
    pub name: String,
}

impl FieldDef {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// An ordered record definition identified by its qualified path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Qualified path, e.g. `"geometry_msgs/Vector3"`.
    pub full_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    pub fn new(full_name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            full_name: full_name.into(),
            fields,
        }
    }

    /// The namespace component of [`full_name`](Self::full_name), used as the
    /// current directory when resolving this record's own fields.
    /// Returns an empty string for an unqualified name.
    pub fn dir(&self) -> &str {
        match self.full_name.rfind(NAMESPACE_SEP) {
            Some(i) => &self.full_name[..i],
            None => "",
        }
    }
}
