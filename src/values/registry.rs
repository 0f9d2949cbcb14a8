// Process-wide tables, built once and never mutated

use crate::types::names;
use crate::values::parser::LeafParser;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Erasure -> strict parser for built-in leaf types.
    static ref LEAF_PARSERS: HashMap<&'static str, LeafParser> = {
        let mut m = HashMap::new();
        m.insert(names::SHORT, LeafParser::Short);
        m.insert(names::INTEGER, LeafParser::Integer);
        m.insert(names::LONG, LeafParser::Long);
        m.insert(names::FLOAT, LeafParser::Float);
        m.insert(names::DOUBLE, LeafParser::Double);
        m.insert(names::BOOLEAN, LeafParser::Boolean);
        m
    };

    /// Erasure -> allowed values, for types that are not enums but still closed.
    static ref ALLOWED_VALUE_OVERRIDES: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert(names::BOOLEAN, &["true", "false"]);
        m
    };
}

pub fn leaf_parser(erasure: &str) -> Option<LeafParser> {
    LEAF_PARSERS.get(erasure).copied()
}

pub fn allowed_value_override(erasure: &str) -> Option<&'static [&'static str]> {
    ALLOWED_VALUE_OVERRIDES.get(erasure).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_parsers_registered() {
        assert_eq!(leaf_parser("java.lang.Integer"), Some(LeafParser::Integer));
        assert_eq!(leaf_parser("java.lang.Boolean"), Some(LeafParser::Boolean));
        assert_eq!(leaf_parser("java.lang.String"), None);
        // primitive keywords are not erasures
        assert_eq!(leaf_parser("int"), None);
    }

    #[test]
    fn test_boolean_override() {
        assert_eq!(
            allowed_value_override("java.lang.Boolean"),
            Some(&["true", "false"][..])
        );
        assert_eq!(allowed_value_override("java.lang.Integer"), None);
    }
}
