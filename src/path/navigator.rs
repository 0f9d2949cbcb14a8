use crate::classify::{AllowedValues, TypeResolver};
use crate::index::TypeIndex;
use crate::path::parser::{PathError, PropertyPath, Segment};
use crate::types::TypeDescriptor;
use tracing::debug;

impl<I: TypeIndex> TypeResolver<I> {
    /// Type reached by following `path` from a value of type `root`.
    ///
    /// `Ok(None)` means the path is plausible but its type can't be determined
    /// from type information alone (a property of an arbitrary object, or a
    /// raw collection without parameters).
    pub fn navigate(
        &self,
        root: &TypeDescriptor,
        path: &PropertyPath,
    ) -> Result<Option<TypeDescriptor>, PathError> {
        let mut current = root.clone();

        for (i, segment) in path.segments().iter().enumerate() {
            let next = match segment {
                Segment::Index(_) => {
                    if !self.is_indexable_collection(&current) {
                        return Err(PathError::NotIndexable {
                            path: path.prefix(i + 1),
                            type_name: self.format(&current),
                        });
                    }
                    current.domain_type()
                }
                Segment::Name(name) => {
                    if self.is_keyed_collection(&current) {
                        self.check_key(&current, name, || path.prefix(i + 1))?;
                        current.domain_type()
                    } else if !self.is_navigable(&current) {
                        return Err(PathError::NotNavigable {
                            path: path.prefix(i + 1),
                            type_name: self.format(&current),
                        });
                    } else {
                        debug!(property = %name, owner = %current, "no metadata for bean property");
                        return Ok(None);
                    }
                }
            };

            match next {
                Some(t) => current = t.clone(),
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }

    fn check_key(
        &self,
        map: &TypeDescriptor,
        key: &str,
        path: impl FnOnce() -> String,
    ) -> Result<(), PathError> {
        let Some(key_type) = map.key_type() else {
            return Ok(());
        };
        match self.get_allowed_values(key_type) {
            AllowedValues::Known(keys) if !keys.iter().any(|k| k == key) => {
                Err(PathError::UnknownKey {
                    path: path(),
                    key: key.to_string(),
                    allowed: keys,
                })
            }
            _ => Ok(()),
        }
    }
}
