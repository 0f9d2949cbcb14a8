use crate::classify::classifier::TypeResolver;
use crate::index::TypeIndex;
use crate::types::names::JAVA_LANG_PREFIX;
use crate::types::TypeDescriptor;

const ENUM_PREVIEW_LIMIT: usize = 4;

impl<I: TypeIndex> TypeResolver<I> {
    /// Human-readable type name, e.g. `Integer` or `com.acme.Color[RED, GREEN, BLUE]`.
    ///
    /// A `java.lang.` type is only shortened, never given a value preview.
    /// Only the outer name is shortened; generic parameters keep their full text.
    pub fn format(&self, t: &TypeDescriptor) -> String {
        let text = t.to_string();
        if let Some(short) = text.strip_prefix(JAVA_LANG_PREFIX) {
            return short.to_string();
        }

        let mut name = text;
        if self.is_enumerated(t) {
            if let Some(values) = self.get_allowed_values(t).values() {
                if !values.is_empty() {
                    let shown = values.len().min(ENUM_PREVIEW_LIMIT);
                    name.push('[');
                    name.push_str(&values[..shown].join(", "));
                    if shown < values.len() {
                        name.push_str(", ...");
                    }
                    name.push(']');
                }
            }
        }

        name
    }
}
