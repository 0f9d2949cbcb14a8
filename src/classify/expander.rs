use crate::classify::allowed::AllowedValues;
use crate::classify::classifier::TypeResolver;
use crate::index::TypeIndex;
use crate::types::{TypeDescriptor, TypedProperty};

impl<I: TypeIndex> TypeResolver<I> {
    /// Child properties implied by the type alone: one per key of a map whose
    /// key type is a non-empty closed set, each typed by the map's value type.
    pub fn expand(&self, t: &TypeDescriptor) -> Vec<TypedProperty> {
        if !self.is_keyed_collection(t) {
            return Vec::new();
        }
        let (Some(key_type), Some(value_type)) = (t.key_type(), t.domain_type()) else {
            return Vec::new();
        };

        match self.get_allowed_values(key_type) {
            AllowedValues::Known(keys) => keys
                .into_iter()
                .map(|key| TypedProperty::new(key, value_type.clone()))
                .collect(),
            AllowedValues::Unknown => Vec::new(),
        }
    }
}
