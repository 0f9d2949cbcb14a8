pub mod parser;
pub mod registry;

pub use parser::*;
pub use registry::{allowed_value_override, leaf_parser};
