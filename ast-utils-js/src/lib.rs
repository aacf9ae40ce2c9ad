//! Structural queries over ESTree syntax trees for linters and other static analysis tools.
//!
//! Every query is a pure function of the node it is given. Absent nodes (`None`) and node types
//! that [`estree_js`] does not model give the negative or unknown answer.

pub use eval::compute_static_expression;
pub use func::is_function_expression;
pub use promise::is_promise;
pub use property::get_property_name;
pub use require::get_require_source;
pub use require::is_static_require;
pub use usage::contains_identifier;
pub use usage::some_contains_identifier;
pub use value::StaticValue;

mod binding;
mod eval;
mod func;
mod promise;
mod property;
mod require;
mod usage;
pub mod value;
