use crate::types::descriptor::TypeDescriptor;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dotted identifiers (`$` allowed for nested types), optionally followed by `[]` pairs.
    /// Examples: "java.lang.String", "com.acme.Outer$Inner", "java.lang.String[]"
    static ref QUALIFIED_NAME: Regex = Regex::new(
        r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*(\[\])*$"
    ).unwrap();
}

/// Deepest `<...>` nesting accepted. Anything deeper is not a real declared type.
pub const MAX_TYPE_NESTING: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeSyntaxError {
    #[error("Type text cannot be empty")]
    Empty,
    #[error("Expected a type name at position {0}")]
    MissingName(usize),
    #[error("Invalid type name '{0}'")]
    InvalidName(String),
    #[error("Unclosed '<' in type parameters")]
    Unclosed,
    #[error("Unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),
    #[error("Type parameters nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Parse type text such as `java.util.Map<java.lang.String,java.util.List<a.B>>`.
pub fn parse_type(text: &str) -> Result<TypeDescriptor, TypeSyntaxError> {
    if text.trim().is_empty() {
        return Err(TypeSyntaxError::Empty);
    }

    let mut parser = TypeTextParser {
        text,
        pos: 0,
        depth: 0,
    };
    let descriptor = parser.parse_descriptor()?;

    parser.skip_whitespace();
    if let Some(c) = parser.peek() {
        return Err(TypeSyntaxError::UnexpectedCharacter(c, parser.pos));
    }

    Ok(descriptor)
}

struct TypeTextParser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl TypeTextParser<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn parse_descriptor(&mut self) -> Result<TypeDescriptor, TypeSyntaxError> {
        self.skip_whitespace();

        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, '<' | '>' | ',') || c.is_whitespace() {
                break;
            }
            self.bump(c);
        }

        let name = &self.text[start..self.pos];
        if name.is_empty() {
            return Err(TypeSyntaxError::MissingName(start));
        }
        if !QUALIFIED_NAME.is_match(name) {
            return Err(TypeSyntaxError::InvalidName(name.to_string()));
        }

        self.skip_whitespace();
        if self.peek() != Some('<') {
            return TypeDescriptor::new(name);
        }
        if self.depth >= MAX_TYPE_NESTING {
            return Err(TypeSyntaxError::TooDeep(MAX_TYPE_NESTING));
        }
        self.bump('<');
        self.depth += 1;

        let mut params = Vec::new();
        loop {
            params.push(self.parse_descriptor()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.bump(','),
                Some('>') => {
                    self.bump('>');
                    break;
                }
                Some(c) => return Err(TypeSyntaxError::UnexpectedCharacter(c, self.pos)),
                None => return Err(TypeSyntaxError::Unclosed),
            }
        }

        self.depth -= 1;
        TypeDescriptor::generic(name, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let t = parse_type("java.lang.String").unwrap();
        assert_eq!(t.erasure(), "java.lang.String");
        assert!(t.params().is_empty());
    }

    #[test]
    fn test_parse_nested_generics() {
        let t = parse_type("java.util.Map<java.lang.String, java.util.List<com.acme.Color>>")
            .unwrap();
        assert_eq!(t.erasure(), "java.util.Map");
        assert_eq!(t.params().len(), 2);
        assert_eq!(t.params()[0].erasure(), "java.lang.String");
        let list = &t.params()[1];
        assert_eq!(list.erasure(), "java.util.List");
        assert_eq!(list.params()[0].erasure(), "com.acme.Color");
    }

    #[test]
    fn test_parse_array_and_nested_class() {
        assert_eq!(
            parse_type("java.lang.String[]").unwrap().erasure(),
            "java.lang.String[]"
        );
        assert_eq!(
            parse_type(" com.acme.Outer$Inner ").unwrap().erasure(),
            "com.acme.Outer$Inner"
        );
    }

    #[test]
    fn test_display_round_trips_text() {
        let text = "java.util.Map<java.lang.String,java.util.List<a.B>>";
        assert_eq!(parse_type(text).unwrap().to_string(), text);
    }

    fn nested(levels: usize) -> String {
        format!("{}a.B{}", "java.util.List<".repeat(levels), ">".repeat(levels))
    }

    #[test]
    fn test_parse_nesting_limit() {
        let t = parse_type(&nested(MAX_TYPE_NESTING)).unwrap();
        assert_eq!(t.erasure(), "java.util.List");

        assert_eq!(
            parse_type(&nested(MAX_TYPE_NESTING + 1)),
            Err(TypeSyntaxError::TooDeep(MAX_TYPE_NESTING))
        );
        // returns an error instead of exhausting the stack
        assert_eq!(
            parse_type(&nested(20_000)),
            Err(TypeSyntaxError::TooDeep(MAX_TYPE_NESTING))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_type("   "), Err(TypeSyntaxError::Empty));
        assert_eq!(parse_type("java.util.List<>"), Err(TypeSyntaxError::MissingName(15)));
        assert_eq!(parse_type("java.util.List<a.B"), Err(TypeSyntaxError::Unclosed));
        assert_eq!(
            parse_type("java..String"),
            Err(TypeSyntaxError::InvalidName("java..String".to_string()))
        );
        assert_eq!(
            parse_type("a.B>"),
            Err(TypeSyntaxError::UnexpectedCharacter('>', 3))
        );
        assert_eq!(
            parse_type("java.util.Map<a.B c.D>"),
            Err(TypeSyntaxError::UnexpectedCharacter('c', 18))
        );
    }
}
