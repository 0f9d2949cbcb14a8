// In-memory type index loaded from TOML
//
//   [types."com.acme.Color"]
//   constants = ["RED", "GREEN", "BLUE"]
//
//   [types."com.acme.ColorMap"]
//   supertypes = ["java.util.HashMap"]

use crate::index::{Capability, IndexError, TypeIndex, TypeInfo};
use crate::types::names;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read type catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid type catalog: {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TypeCatalog {
    #[serde(default)]
    pub types: HashMap<String, TypeEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TypeEntry {
    // Present (even if empty) only for enumerations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,
}

const PLATFORM_MAPS: &[(&str, &str)] = &[
    ("java.util.SortedMap", names::MAP),
    ("java.util.NavigableMap", "java.util.SortedMap"),
    ("java.util.AbstractMap", names::MAP),
    ("java.util.HashMap", "java.util.AbstractMap"),
    ("java.util.LinkedHashMap", "java.util.HashMap"),
    ("java.util.TreeMap", "java.util.NavigableMap"),
    ("java.util.EnumMap", "java.util.AbstractMap"),
    ("java.util.concurrent.ConcurrentHashMap", names::MAP),
    ("java.util.Hashtable", names::MAP),
    ("java.util.Properties", "java.util.Hashtable"),
];

const PLATFORM_LISTS: &[(&str, &str)] = &[
    ("java.util.AbstractList", names::LIST),
    ("java.util.ArrayList", "java.util.AbstractList"),
    ("java.util.LinkedList", "java.util.AbstractList"),
    ("java.util.Vector", "java.util.AbstractList"),
    ("java.util.concurrent.CopyOnWriteArrayList", names::LIST),
];

impl TypeCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard map and list types. Native arrays are deliberately absent.
    pub fn platform() -> Self {
        let mut catalog = Self::empty();
        catalog.declare_type(names::MAP, Vec::<String>::new());
        catalog.declare_type(names::LIST, Vec::<String>::new());
        for (name, supertype) in PLATFORM_MAPS.iter().chain(PLATFORM_LISTS) {
            catalog.declare_type(*name, [*supertype]);
        }
        catalog
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: TypeCatalog = toml::from_str(content)?;
        Ok(catalog)
    }

    /// Entries in `other` replace same-named entries here.
    pub fn merge(&mut self, other: TypeCatalog) {
        self.types.extend(other.types);
    }

    pub fn declare_type<I, S>(&mut self, name: impl Into<String>, supertypes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.insert(
            name.into(),
            TypeEntry {
                constants: None,
                supertypes: supertypes.into_iter().map(Into::into).collect(),
            },
        );
    }

    pub fn declare_enum<I, S>(&mut self, name: impl Into<String>, constants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.insert(
            name.into(),
            TypeEntry {
                constants: Some(constants.into_iter().map(Into::into).collect()),
                supertypes: Vec::new(),
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn list_types(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.types.keys().collect();
        names.sort();
        names
    }

    fn is_subtype_of(&self, name: &str, target: &str) -> bool {
        // Walk declared supertypes; `seen` keeps cyclic declarations finite
        let mut pending = vec![name];
        let mut seen = HashSet::new();

        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(entry) = self.types.get(current) {
                pending.extend(entry.supertypes.iter().map(String::as_str));
            }
        }
        false
    }
}

impl TypeIndex for TypeCatalog {
    fn find(&self, erasure: &str) -> Result<Option<TypeInfo>, IndexError> {
        Ok(self.types.get(erasure).map(|entry| match &entry.constants {
            Some(constants) => TypeInfo::enumeration(constants.iter().cloned()),
            None => TypeInfo::plain(),
        }))
    }

    fn is_assignable_to(&self, erasure: &str, capability: Capability) -> Result<bool, IndexError> {
        if !self.types.contains_key(erasure) {
            return Ok(false);
        }
        Ok(self.is_subtype_of(erasure, capability.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"
[types."com.acme.Color"]
constants = ["RED", "GREEN", "BLUE"]

[types."com.acme.Nothing"]
constants = []

[types."com.acme.ColorMap"]
supertypes = ["java.util.LinkedHashMap"]

[types."com.acme.Settings"]
"#;

    fn catalog() -> TypeCatalog {
        let mut catalog = TypeCatalog::platform();
        catalog.merge(TypeCatalog::load_from_str(CATALOG).unwrap());
        catalog
    }

    #[test]
    fn test_find_enum_preserves_declaration_order() {
        let info = catalog().find("com.acme.Color").unwrap().unwrap();
        assert!(info.enumerated);
        assert_eq!(info.constants, vec!["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn test_find_enum_without_constants() {
        let info = catalog().find("com.acme.Nothing").unwrap().unwrap();
        assert!(info.enumerated);
        assert!(info.constants.is_empty());
    }

    #[test]
    fn test_find_plain_and_unknown() {
        let catalog = catalog();
        assert_eq!(catalog.find("com.acme.Settings").unwrap(), Some(TypeInfo::plain()));
        assert_eq!(catalog.find("com.acme.Missing").unwrap(), None);
    }

    #[test]
    fn test_assignability_is_transitive() {
        let catalog = catalog();
        assert!(catalog
            .is_assignable_to("com.acme.ColorMap", Capability::KeyedCollection)
            .unwrap());
        assert!(catalog
            .is_assignable_to("java.util.TreeMap", Capability::KeyedCollection)
            .unwrap());
        assert!(catalog
            .is_assignable_to("java.util.ArrayList", Capability::OrderedSequence)
            .unwrap());
        assert!(!catalog
            .is_assignable_to("java.util.ArrayList", Capability::KeyedCollection)
            .unwrap());
    }

    #[test]
    fn test_capability_types_are_assignable_to_themselves() {
        let catalog = TypeCatalog::platform();
        assert!(catalog.is_assignable_to("java.util.Map", Capability::KeyedCollection).unwrap());
        assert!(catalog.is_assignable_to("java.util.List", Capability::OrderedSequence).unwrap());
    }

    #[test]
    fn test_arrays_and_unknown_types_are_not_assignable() {
        let catalog = catalog();
        assert!(!catalog
            .is_assignable_to("java.lang.String[]", Capability::OrderedSequence)
            .unwrap());
        assert!(!catalog
            .is_assignable_to("com.acme.Missing", Capability::KeyedCollection)
            .unwrap());
    }

    #[test]
    fn test_cyclic_supertypes_terminate() {
        let mut catalog = TypeCatalog::empty();
        catalog.declare_type("a.A", ["a.B"]);
        catalog.declare_type("a.B", ["a.A"]);
        assert!(!catalog.is_assignable_to("a.A", Capability::KeyedCollection).unwrap());
    }

    #[test]
    fn test_merge_overrides_entries() {
        let mut catalog = TypeCatalog::platform();
        let mut user = TypeCatalog::empty();
        user.declare_enum("java.util.HashMap", ["X"]);
        catalog.merge(user);
        assert!(catalog.find("java.util.HashMap").unwrap().unwrap().enumerated);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let catalog = TypeCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.list_types().len(), 4);
        assert!(catalog.contains("com.acme.Color"));
    }

    #[test]
    fn test_demo_catalog_loads() {
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("demos")
            .join("catalog.toml");
        let mut catalog = TypeCatalog::platform();
        catalog.merge(TypeCatalog::load_from_file(path).unwrap());
        assert!(catalog
            .is_assignable_to("com.acme.ServerRegistry", Capability::KeyedCollection)
            .unwrap());
        assert_eq!(
            catalog.find("com.acme.Unreachable").unwrap(),
            Some(TypeInfo::enumeration(Vec::<String>::new()))
        );
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            TypeCatalog::load_from_str("types = 3"),
            Err(CatalogError::Format(_))
        ));
        assert!(matches!(
            TypeCatalog::load_from_file("/nonexistent/catalog.toml"),
            Err(CatalogError::Io(_))
        ));
    }
}
