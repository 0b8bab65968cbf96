//! PHPDoc block handling.
//!
//! # Submodules
//!
//! - [`tags`]: parsing `/** ... */` text into a [`DocBlock`] of ordered
//!   tags, plus accessors (`@param` tags, `@return` type).
//! - [`lookup`]: finding the `@param` tag for a parameter by position or
//!   name ([`find_param_tag`]).
//! - [`types`]: type-text utilities (`split_type_token`,
//!   [`split_alternatives`]).
//!
//! [`DocBlock`]: crate::types::DocBlock

mod lookup;
mod tags;
pub(crate) mod types;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use lookup::find_param_tag;
pub use types::split_alternatives;
