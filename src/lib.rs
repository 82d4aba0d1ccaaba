//! Hierarchical names: ordered components joined by a delimiter, with
//! delimiter and escape characters masked inside components.
//!
//! [`ArrayName`] and [`StringName`] are edited in place through
//! [`MutableName`]; [`NameValue`] wraps either of them as an immutable value
//! whose operations return new names.

#[macro_use]
mod name;
pub use name::Name;

pub mod codec;
pub mod contract;
mod edit;
pub use edit::MutableName;

mod error;
pub use error::{NameError, NameErrorKind, NameResult};

pub mod types;
pub use types::{NameConfig, DEFAULT_DELIMITER, ESCAPE_CHARACTER};

mod array_name;
pub use array_name::ArrayName;

mod string_name;
pub use string_name::StringName;

mod value;
pub use value::{ArrayNameValue, NameValue, StringNameValue};

mod utils;
