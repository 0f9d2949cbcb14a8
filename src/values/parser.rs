use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

/// Why a raw property value was rejected. Carries enough context to build a
/// message without looking at the type again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("'{raw}' is not a valid {expected}")]
    InvalidNumber { raw: String, expected: &'static str },
    #[error("'{raw}' is out of range for {expected}")]
    OutOfRange { raw: String, expected: &'static str },
    #[error("Value should be 'true' or 'false', got '{raw}'")]
    InvalidBoolean { raw: String },
    #[error(
        "'{raw}' is not a valid value for {type_name}; expected one of: {}",
        .allowed.join(", ")
    )]
    NotAllowed {
        raw: String,
        type_name: String,
        allowed: Vec<String>,
    },
    #[error("'{raw}' is not valid: {type_name} has no valid values")]
    NoValidValues { raw: String, type_name: String },
}

impl ParseError {
    pub fn raw(&self) -> &str {
        match self {
            ParseError::InvalidNumber { raw, .. }
            | ParseError::OutOfRange { raw, .. }
            | ParseError::InvalidBoolean { raw }
            | ParseError::NotAllowed { raw, .. }
            | ParseError::NoValidValues { raw, .. } => raw,
        }
    }
}

/// A successfully validated property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Enum(String),
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Short(v) => write!(f, "{}", v),
            ParsedValue::Integer(v) => write!(f, "{}", v),
            ParsedValue::Long(v) => write!(f, "{}", v),
            ParsedValue::Float(v) => write!(f, "{}", v),
            ParsedValue::Double(v) => write!(f, "{}", v),
            ParsedValue::Boolean(v) => write!(f, "{}", v),
            ParsedValue::Enum(v) => f.write_str(v),
        }
    }
}

/// Strict parser for one of the built-in leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafParser {
    Short,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
}

impl LeafParser {
    /// Name used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            LeafParser::Short => "short",
            LeafParser::Integer => "int",
            LeafParser::Long => "long",
            LeafParser::Float => "float",
            LeafParser::Double => "double",
            LeafParser::Boolean => "boolean",
        }
    }

    pub fn parse(&self, raw: &str) -> Result<ParsedValue, ParseError> {
        match self {
            LeafParser::Short => parse_int(raw, self.expected()).map(ParsedValue::Short),
            LeafParser::Integer => parse_int(raw, self.expected()).map(ParsedValue::Integer),
            LeafParser::Long => parse_int(raw, self.expected()).map(ParsedValue::Long),
            LeafParser::Float => parse_float(raw, self.expected()).map(ParsedValue::Float),
            LeafParser::Double => parse_float(raw, self.expected()).map(ParsedValue::Double),
            LeafParser::Boolean => parse_boolean(raw).map(ParsedValue::Boolean),
        }
    }
}

fn parse_int<T>(raw: &str, expected: &'static str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
            raw: raw.to_string(),
            expected,
        },
        _ => ParseError::InvalidNumber {
            raw: raw.to_string(),
            expected,
        },
    })
}

fn parse_float<T>(raw: &str, expected: &'static str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseFloatError>,
{
    let invalid = || ParseError::InvalidNumber {
        raw: raw.to_string(),
        expected,
    };

    // Named values are spelled exactly "NaN" or "Infinity"; `str::parse` would
    // also take "inf", "nan" and any casing of them
    let body = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if body.starts_with(|c: char| c.is_ascii_alphabetic()) && !matches!(body, "NaN" | "Infinity") {
        return Err(invalid());
    }

    raw.parse::<T>().map_err(|_| invalid())
}

// Only "true"/"false" in any case; anything else is an error rather than false
fn parse_boolean(raw: &str) -> Result<bool, ParseError> {
    match raw.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidBoolean {
            raw: raw.to_string(),
        }),
    }
}

/// Accepts exactly one of a closed set of values (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueParser {
    type_name: String,
    values: Vec<String>,
}

impl EnumValueParser {
    pub fn new(type_name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            type_name: type_name.into(),
            values,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn parse(&self, raw: &str) -> Result<ParsedValue, ParseError> {
        if self.values.iter().any(|v| v == raw) {
            return Ok(ParsedValue::Enum(raw.to_string()));
        }
        if self.values.is_empty() {
            return Err(ParseError::NoValidValues {
                raw: raw.to_string(),
                type_name: self.type_name.clone(),
            });
        }
        Err(ParseError::NotAllowed {
            raw: raw.to_string(),
            type_name: self.type_name.clone(),
            allowed: self.values.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueParser {
    Leaf(LeafParser),
    Enum(EnumValueParser),
}

impl ValueParser {
    pub fn parse(&self, raw: &str) -> Result<ParsedValue, ParseError> {
        match self {
            ValueParser::Leaf(parser) => parser.parse(raw),
            ValueParser::Enum(parser) => parser.parse(raw),
        }
    }
}
