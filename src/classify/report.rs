use crate::classify::allowed::AllowedValues;
use crate::classify::classifier::TypeResolver;
use crate::index::TypeIndex;
use crate::types::{short_type_name, TypeDescriptor, TypedProperty};
use serde::Serialize;

/// Everything the resolver can say about one type, in serializable form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReport {
    #[serde(rename = "type")]
    pub type_: TypeDescriptor,
    pub display_name: String,
    pub short_name: String,
    pub keyed_collection: bool,
    pub indexable_collection: bool,
    pub enumerated: bool,
    pub navigable: bool,
    pub directly_assignable: bool,
    pub allowed_values: AllowedValues,
    pub key_type: Option<TypeDescriptor>,
    pub domain_type: Option<TypeDescriptor>,
    pub properties: Vec<TypedProperty>,
}

impl<I: TypeIndex> TypeResolver<I> {
    pub fn report(&self, t: &TypeDescriptor) -> TypeReport {
        TypeReport {
            type_: t.clone(),
            display_name: self.format(t),
            short_name: short_type_name(t.erasure()).to_string(),
            keyed_collection: self.is_keyed_collection(t),
            indexable_collection: self.is_indexable_collection(t),
            enumerated: self.is_enumerated(t),
            navigable: self.is_navigable(t),
            directly_assignable: self.is_directly_assignable(t),
            allowed_values: self.get_allowed_values(t),
            key_type: t.key_type().cloned(),
            domain_type: t.domain_type().cloned(),
            properties: self.expand(t),
        }
    }
}
