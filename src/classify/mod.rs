pub mod allowed;
pub mod classifier;
pub mod expander;
pub mod formatter;
pub mod parsers;
pub mod report;


pub use allowed::*;
pub use classifier::*;
pub use report::*;
