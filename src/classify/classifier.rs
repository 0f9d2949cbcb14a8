use crate::index::{Capability, TypeIndex, TypeInfo};
use crate::types::names;
use crate::types::TypeDescriptor;
use tracing::warn;

/// Answers how a declared property type should be treated when editing
/// `a.b[2].c` style keys. Every query is a pure function of the descriptor and
/// the (read-only) index, so a resolver can be shared freely when `I` is `Sync`.
pub struct TypeResolver<I> {
    index: I,
}

impl<I: TypeIndex> TypeResolver<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Map-like: supports `name.<key>` and `name[<key>]`.
    pub fn is_keyed_collection(&self, t: &TypeDescriptor) -> bool {
        self.is_assignable(t, Capability::KeyedCollection)
    }

    /// List-like: supports `name[<index>]`. Native arrays don't qualify.
    pub fn is_indexable_collection(&self, t: &TypeDescriptor) -> bool {
        self.is_assignable(t, Capability::OrderedSequence)
    }

    pub fn is_enumerated(&self, t: &TypeDescriptor) -> bool {
        self.lookup(t.erasure())
            .map(|info| info.enumerated)
            .unwrap_or(false)
    }

    /// Whether `.` notation may navigate into the type. Strings and boxed
    /// primitives are leaves; everything else is assumed to have properties.
    pub fn is_navigable(&self, t: &TypeDescriptor) -> bool {
        !names::is_simple(t.erasure())
    }

    /// Whether a value can be written to the property as-is.
    pub fn is_directly_assignable(&self, t: &TypeDescriptor) -> bool {
        names::ASSIGNABLE_TYPES.contains(t.erasure())
            || self.is_indexable_collection(t)
            || self.is_enumerated(t)
    }

    /// Index lookup with failures logged and folded into "not found".
    pub(crate) fn lookup(&self, erasure: &str) -> Option<TypeInfo> {
        match self.index.find(erasure) {
            Ok(info) => info,
            Err(e) => {
                warn!(erasure, error = %e, "type lookup failed");
                None
            }
        }
    }

    fn is_assignable(&self, t: &TypeDescriptor, capability: Capability) -> bool {
        match self.index.is_assignable_to(t.erasure(), capability) {
            Ok(assignable) => assignable,
            Err(e) => {
                warn!(
                    erasure = t.erasure(),
                    capability = capability.type_name(),
                    error = %e,
                    "assignability check failed"
                );
                false
            }
        }
    }
}

/// First generic parameter (map key).
pub fn key_type(t: &TypeDescriptor) -> Option<&TypeDescriptor> {
    t.key_type()
}

/// Last generic parameter: list element or map value.
pub fn domain_type(t: &TypeDescriptor) -> Option<&TypeDescriptor> {
    t.domain_type()
}
