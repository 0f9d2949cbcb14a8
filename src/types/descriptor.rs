use crate::types::parser::{parse_type, TypeSyntaxError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declared type of a configuration property: an erasure name plus its
/// generic parameters, e.g. `java.util.Map<java.lang.String,com.acme.Color>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    erasure: String,
    params: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Non-generic type. Fails on an empty erasure.
    pub fn new(erasure: impl Into<String>) -> Result<Self, TypeSyntaxError> {
        Self::generic(erasure, Vec::new())
    }

    pub fn generic(
        erasure: impl Into<String>,
        params: Vec<TypeDescriptor>,
    ) -> Result<Self, TypeSyntaxError> {
        let erasure = erasure.into();
        if erasure.trim().is_empty() {
            return Err(TypeSyntaxError::Empty);
        }
        Ok(Self { erasure, params })
    }

    /// Parse the textual form used by configuration metadata.
    pub fn parse(text: &str) -> Result<Self, TypeSyntaxError> {
        parse_type(text)
    }

    pub fn erasure(&self) -> &str {
        &self.erasure
    }

    pub fn params(&self) -> &[TypeDescriptor] {
        &self.params
    }

    pub fn is_generic(&self) -> bool {
        !self.params.is_empty()
    }

    /// First generic parameter: the key of a map.
    pub fn key_type(&self) -> Option<&TypeDescriptor> {
        self.params.first()
    }

    /// Last generic parameter: the element of a list, or the value of a map.
    pub fn domain_type(&self) -> Option<&TypeDescriptor> {
        self.params.last()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.erasure)?;
        if !self.params.is_empty() {
            f.write_str("<")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", param)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for TypeDescriptor {
    type Err = TypeSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

// Serialized as its text form so reports stay readable
impl Serialize for TypeDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_type(&text).map_err(serde::de::Error::custom)
    }
}

/// A child property synthesized from type information alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedProperty {
    name: String,
    #[serde(rename = "type")]
    type_: TypeDescriptor,
}

impl TypedProperty {
    pub(crate) fn new(name: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_(&self) -> &TypeDescriptor {
        &self.type_
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(erasure: &str) -> TypeDescriptor {
        TypeDescriptor::new(erasure).unwrap()
    }

    fn generic(erasure: &str, params: Vec<TypeDescriptor>) -> TypeDescriptor {
        TypeDescriptor::generic(erasure, params).unwrap()
    }

    fn map_of(key: &str, value: &str) -> TypeDescriptor {
        generic("java.util.Map", vec![simple(key), simple(value)])
    }

    #[test]
    fn test_key_and_domain_of_map() {
        let t = map_of("com.acme.Color", "java.lang.Integer");
        assert_eq!(t.key_type().unwrap().erasure(), "com.acme.Color");
        assert_eq!(t.domain_type().unwrap().erasure(), "java.lang.Integer");
    }

    #[test]
    fn test_domain_of_list() {
        let t = generic("java.util.List", vec![simple("a.B")]);
        assert_eq!(t.domain_type().unwrap().erasure(), "a.B");
        assert_eq!(t.key_type(), t.domain_type());
    }

    #[test]
    fn test_non_generic_has_no_key_or_domain() {
        let t = simple("java.lang.String");
        assert!(!t.is_generic());
        assert!(t.key_type().is_none());
        assert!(t.domain_type().is_none());
    }

    #[test]
    fn test_empty_erasure_is_rejected() {
        assert_eq!(TypeDescriptor::new(""), Err(TypeSyntaxError::Empty));
        assert_eq!(
            TypeDescriptor::generic("  ", vec![simple("a.B")]),
            Err(TypeSyntaxError::Empty)
        );
    }

    #[test]
    fn test_display_nested() {
        let t = generic(
            "java.util.Map",
            vec![
                simple("java.lang.String"),
                generic("java.util.List", vec![simple("a.B")]),
            ],
        );
        assert_eq!(
            t.to_string(),
            "java.util.Map<java.lang.String,java.util.List<a.B>>"
        );
    }

    #[test]
    fn test_serde_as_text() {
        let t = map_of("java.lang.String", "java.lang.Long");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"java.util.Map<java.lang.String,java.lang.Long>\"");
        let back: TypeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_typed_property_serializes_type_field() {
        let p = TypedProperty::new("RED", simple("java.lang.Integer"));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["name"], "RED");
        assert_eq!(json["type"], "java.lang.Integer");
    }
}
