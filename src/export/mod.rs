//! Data handed to external collaborators
//!
//! [`table`] projects tokens into flat rows for tabular export and
//! [`frequency`] produces the labelled counts behind category charts. Both
//! are plain projections; rendering happens elsewhere.

pub mod frequency;
pub mod table;

pub use frequency::{dep_frequencies, pos_frequencies, pos_transitions, CategoryCount, TransitionHistogram};
pub use table::{token_rows, TokenRow};
