use crate::schema::NAMESPACE_SEP;

/// Array arity of a field type as declared in a message definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Plain scalar field.
    Scalar,
    /// `T[]` — element count unknown at schema-definition time.
    Unbounded,
    /// `T[n]` — fixed-length array of exactly `n` elements.
    Fixed(usize),
}

impl Arity {
    pub fn is_array(&self) -> bool {
        !matches!(self, Arity::Scalar)
    }
}

/// A structured type reference: base type name plus array arity.
///
/// `base` is either a primitive name (`"float64"`, `"bool"`) or a
/// namespace-qualified record path (`"geometry_msgs/Vector3"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub base: String,
    pub arity: Arity,
}

impl TypeRef {
    pub fn new(base: impl Into<String>, arity: Arity) -> Self {
        Self {
            base: base.into(),
            arity,
        }
    }

    pub fn scalar(base: impl Into<String>) -> Self {
        Self::new(base, Arity::Scalar)
    }

    /// Whether the base names another record (contains a namespace separator)
    /// rather than a primitive.
    pub fn is_record_path(&self) -> bool {
        self.base.contains(NAMESPACE_SEP)
    }
}
