// Well-known platform type names

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

pub const JAVA_LANG_PREFIX: &str = "java.lang.";

pub const STRING: &str = "java.lang.String";
pub const BOOLEAN: &str = "java.lang.Boolean";
pub const CHARACTER: &str = "java.lang.Character";
pub const SHORT: &str = "java.lang.Short";
pub const INTEGER: &str = "java.lang.Integer";
pub const LONG: &str = "java.lang.Long";
pub const DOUBLE: &str = "java.lang.Double";
pub const FLOAT: &str = "java.lang.Float";

pub const STRING_ARRAY: &str = "java.lang.String[]";
pub const INET_ADDRESS: &str = "java.net.InetAddress";

pub const MAP: &str = "java.util.Map";
pub const LIST: &str = "java.util.List";

lazy_static! {
    /// Boxed primitive name -> primitive keyword.
    pub static ref PRIMITIVE_TYPE_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(BOOLEAN, "boolean");
        m.insert(INTEGER, "int");
        m.insert(LONG, "long");
        m.insert(SHORT, "short");
        m.insert(DOUBLE, "double");
        m.insert(FLOAT, "float");
        m.insert(CHARACTER, "char");
        m
    };

    /// Leaf erasures a property value can be assigned to without navigating further.
    pub static ref ASSIGNABLE_TYPES: HashSet<&'static str> = [
        BOOLEAN,
        STRING,
        SHORT,
        INTEGER,
        LONG,
        DOUBLE,
        FLOAT,
        CHARACTER,
        LIST,
        INET_ADDRESS,
        STRING_ARRAY,
    ]
    .into_iter()
    .collect();
}

/// Strings and boxed primitives are leaves; nothing lives behind a `.` on them.
pub fn is_simple(erasure: &str) -> bool {
    erasure == STRING || PRIMITIVE_TYPE_NAMES.contains_key(erasure)
}

/// Short form of a type name for listings: primitive keyword for boxed
/// primitives, otherwise the name without a leading `java.lang.`.
pub fn short_type_name(erasure: &str) -> &str {
    if let Some(primitive) = PRIMITIVE_TYPE_NAMES.get(erasure) {
        return *primitive;
    }
    erasure.strip_prefix(JAVA_LANG_PREFIX).unwrap_or(erasure)
}
