//! Maven invocation options and their rendering into argument tokens.
//!
//! [`MavenArgs`] accumulates options through a fluent API. [`FLAG_TABLE`]
//! declares, for every renderable option, its short flag and how its value is
//! read and rendered; [`MavenArgs::render`] walks that table in order.

mod builder;
pub mod flags;
mod maven;
mod option;
mod ordered_set;

pub use builder::CommandArgsBuilder;
pub use maven::MavenArgs;
pub use option::{Accessor, CliOption, FLAG_TABLE, OptionKind, find_option};
pub use ordered_set::OrderedSet;
