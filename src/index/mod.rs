// Read-only view over the types known to a project.
// The engine only ever asks two questions: what is this type, and is it a map/list.

pub mod catalog;

pub use catalog::*;

use crate::types::names;
use std::sync::Arc;

/// What the index knows about a resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeInfo {
    pub enumerated: bool,
    /// Enum constant names in declaration order. Empty for non-enums.
    pub constants: Vec<String>,
}

impl TypeInfo {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn enumeration<I, S>(constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enumerated: true,
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }
}

/// Supertypes the classifier tests assignability against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    KeyedCollection,
    OrderedSequence,
}

impl Capability {
    pub fn type_name(&self) -> &'static str {
        match self {
            Capability::KeyedCollection => names::MAP,
            Capability::OrderedSequence => names::LIST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("Type lookup failed for '{erasure}': {message}")]
    Lookup { erasure: String, message: String },
    #[error("Type index unavailable: {0}")]
    Unavailable(String),
}

/// Source of type information. Lookups may be slow or fail; callers in this
/// crate treat every failure as "unknown".
pub trait TypeIndex {
    fn find(&self, erasure: &str) -> Result<Option<TypeInfo>, IndexError>;

    fn is_assignable_to(&self, erasure: &str, capability: Capability) -> Result<bool, IndexError>;
}

impl<T: TypeIndex + ?Sized> TypeIndex for &T {
    fn find(&self, erasure: &str) -> Result<Option<TypeInfo>, IndexError> {
        (**self).find(erasure)
    }

    fn is_assignable_to(&self, erasure: &str, capability: Capability) -> Result<bool, IndexError> {
        (**self).is_assignable_to(erasure, capability)
    }
}

impl<T: TypeIndex + ?Sized> TypeIndex for Box<T> {
    fn find(&self, erasure: &str) -> Result<Option<TypeInfo>, IndexError> {
        (**self).find(erasure)
    }

    fn is_assignable_to(&self, erasure: &str, capability: Capability) -> Result<bool, IndexError> {
        (**self).is_assignable_to(erasure, capability)
    }
}

impl<T: TypeIndex + ?Sized> TypeIndex for Arc<T> {
    fn find(&self, erasure: &str) -> Result<Option<TypeInfo>, IndexError> {
        (**self).find(erasure)
    }

    fn is_assignable_to(&self, erasure: &str, capability: Capability) -> Result<bool, IndexError> {
        (**self).is_assignable_to(erasure, capability)
    }
}
