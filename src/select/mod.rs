//! Token and relation selection
//!
//! Two generic primitives do all the work: [`tokens::select_tokens`] keeps
//! tokens whose part of speech is in a set, and
//! [`relations::select_relations`] keeps `(dependent, head)` pairs whose
//! relation is in a set. The named groups in [`groups`] are plain data fed
//! into them.

pub mod groups;
pub mod relations;
pub mod tokens;

pub use groups::{DepGroup, PosGroup};
pub use relations::{select_relation_group, select_relations};
pub use tokens::{select_group, select_meaningful, select_tokens, select_tokens_excluding};
