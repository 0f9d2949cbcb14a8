use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    // Dotted name: "a.b" -> Name("a"), Name("b")
    Name(String),
    // Bracketed position: "a[2]" -> Name("a"), Index(2)
    Index(usize),
}

/// A configuration key such as `server.ports[2].host`, split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Property path cannot be empty")]
    EmptyPath,
    #[error("Empty property name at position {0}")]
    EmptySegment(usize),
    #[error("Unterminated '[' at position {0}")]
    UnterminatedBracket(usize),
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
    #[error("Invalid character '{0}' at position {1}")]
    InvalidCharacter(char, usize),
    #[error("'{path}' uses [] but {type_name} is not a list")]
    NotIndexable { path: String, type_name: String },
    #[error("'{path}' navigates into {type_name}, which has no properties")]
    NotNavigable { path: String, type_name: String },
    #[error("'{path}': '{key}' is not a valid key; expected one of: {}", .allowed.join(", "))]
    UnknownKey {
        path: String,
        key: String,
        allowed: Vec<String>,
    },
}

impl PropertyPath {
    pub fn parse(path: &str) -> Result<Self, PathError> {
        parse_property_path(path)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Text of the first `len` segments, for error messages.
    pub fn prefix(&self, len: usize) -> String {
        render(&self.segments[..len.min(self.segments.len())])
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments))
    }
}

fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Name(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

pub fn parse_property_path(path: &str) -> Result<PropertyPath, PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let mut segments = Vec::new();
    let mut pos = 0;
    let mut expect_name = true;

    while pos < path.len() {
        let rest = &path[pos..];

        if expect_name {
            let end = rest.find(|c: char| c == '.' || c == '[').unwrap_or(rest.len());
            if end == 0 {
                return Err(PathError::EmptySegment(pos));
            }
            segments.push(Segment::Name(rest[..end].to_string()));
            pos += end;
            expect_name = false;
            continue;
        }

        // After a name or an index only '.' or '[' may follow
        match rest.chars().next() {
            Some('.') => {
                pos += 1;
                expect_name = true;
            }
            Some('[') => {
                let close = rest.find(']').ok_or(PathError::UnterminatedBracket(pos))?;
                let inner = &rest[1..close];
                let index = inner
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidIndex(inner.to_string()))?;
                segments.push(Segment::Index(index));
                pos += close + 1;
            }
            Some(c) => return Err(PathError::InvalidCharacter(c, pos)),
            None => break,
        }
    }

    if expect_name {
        // trailing '.'
        return Err(PathError::EmptySegment(path.len()));
    }

    Ok(PropertyPath { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Segment {
        Segment::Name(s.to_string())
    }

    #[test]
    fn test_parse_dotted() {
        let path = parse_property_path("server.ssl.enabled").unwrap();
        assert_eq!(
            path.segments(),
            &[name("server"), name("ssl"), name("enabled")]
        );
    }

    #[test]
    fn test_parse_mixed() {
        let path = parse_property_path("a.b[2].c").unwrap();
        assert_eq!(
            path.segments(),
            &[name("a"), name("b"), Segment::Index(2), name("c")]
        );
        assert_eq!(path.to_string(), "a.b[2].c");
        assert_eq!(path.prefix(3), "a.b[2]");
    }

    #[test]
    fn test_parse_consecutive_indexes() {
        let path = parse_property_path("matrix[0][1]").unwrap();
        assert_eq!(
            path.segments(),
            &[name("matrix"), Segment::Index(0), Segment::Index(1)]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_property_path(""), Err(PathError::EmptyPath));
        assert_eq!(parse_property_path("a..b"), Err(PathError::EmptySegment(2)));
        assert_eq!(parse_property_path(".a"), Err(PathError::EmptySegment(0)));
        assert_eq!(parse_property_path("a."), Err(PathError::EmptySegment(2)));
        assert_eq!(parse_property_path("a[1"), Err(PathError::UnterminatedBracket(1)));
        assert_eq!(
            parse_property_path("a[x]"),
            Err(PathError::InvalidIndex("x".to_string()))
        );
        assert_eq!(
            parse_property_path("a[1]b"),
            Err(PathError::InvalidCharacter('b', 4))
        );
    }
}
