use crate::classify::classifier::TypeResolver;
use crate::index::TypeIndex;
use crate::types::TypeDescriptor;
use crate::values::registry::allowed_value_override;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Closed set of legal textual values for a type.
///
/// `Known(vec![])` is not the same as `Unknown`: it means the type is an
/// enumeration with no constants, so every assignment is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedValues {
    Unknown,
    Known(Vec<String>),
}

impl AllowedValues {
    pub fn is_known(&self) -> bool {
        matches!(self, AllowedValues::Known(_))
    }

    pub fn values(&self) -> Option<&[String]> {
        match self {
            AllowedValues::Known(values) => Some(values),
            AllowedValues::Unknown => None,
        }
    }

    /// Known and non-empty.
    pub fn has_elements(&self) -> bool {
        self.values().is_some_and(|v| !v.is_empty())
    }
}

// Unknown -> null, Known -> array (possibly empty)
impl Serialize for AllowedValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AllowedValues::Unknown => serializer.serialize_none(),
            AllowedValues::Known(values) => serializer.collect_seq(values),
        }
    }
}

impl<I: TypeIndex> TypeResolver<I> {
    /// Resolution order: built-in overrides, then enum constants from the
    /// index, otherwise unknown. Index failures resolve to unknown.
    pub fn get_allowed_values(&self, t: &TypeDescriptor) -> AllowedValues {
        if let Some(values) = allowed_value_override(t.erasure()) {
            return AllowedValues::Known(values.iter().map(|v| v.to_string()).collect());
        }

        match self.lookup(t.erasure()) {
            Some(info) if info.enumerated => {
                debug!(erasure = t.erasure(), count = info.constants.len(), "enum constants");
                AllowedValues::Known(info.constants)
            }
            _ => AllowedValues::Unknown,
        }
    }
}
