pub mod navigator;
pub mod parser;

pub use parser::*;
