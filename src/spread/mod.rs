mod types;
mod validate;
pub mod catalog;

pub use types::*;
pub use validate::SpreadError;
pub use catalog::{builtin_spreads, find_builtin};
