pub mod builtin;
pub mod types;

pub use builtin::{catalog, lookup};
pub use types::Signature;
