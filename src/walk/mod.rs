//! Upward traversal along head pointers
//!
//! This module provides the bounded ancestor walk for tokens, named entities
//! and noun chunks.

pub mod ancestors;

pub use ancestors::{chain_indices, AncestorWalker, EntityChain, NounChunkChain, TokenChain};
