use crate::classify::allowed::AllowedValues;
use crate::classify::classifier::TypeResolver;
use crate::index::TypeIndex;
use crate::types::TypeDescriptor;
use crate::values::parser::{EnumValueParser, ValueParser};
use crate::values::registry::leaf_parser;

impl<I: TypeIndex> TypeResolver<I> {
    /// Parser that validates raw text for `t`, or `None` when any text is
    /// acceptable as far as this crate can tell.
    pub fn get_parser(&self, t: &TypeDescriptor) -> Option<ValueParser> {
        if let Some(parser) = leaf_parser(t.erasure()) {
            return Some(ValueParser::Leaf(parser));
        }
        match self.get_allowed_values(t) {
            AllowedValues::Known(values) => Some(ValueParser::Enum(EnumValueParser::new(
                self.format(t),
                values,
            ))),
            AllowedValues::Unknown => None,
        }
    }
}
