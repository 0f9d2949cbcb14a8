pub mod descriptor;
pub mod names;
pub mod parser;

pub use descriptor::*;
pub use names::short_type_name;
pub use parser::*;
