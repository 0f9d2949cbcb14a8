pub mod classify;
pub mod index;
pub mod path;
pub mod types;
pub mod values;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use classify::{AllowedValues, TypeReport, TypeResolver};
pub use index::{Capability, TypeCatalog, TypeIndex, TypeInfo};
pub use path::PropertyPath;
pub use types::{TypeDescriptor, TypedProperty};
pub use values::{ParseError, ParsedValue, ValueParser};
