//! Phrase-chunk (bunsetu) components
//!
//! Bunsetu come from an external segmenter; this module only joins them
//! against the token-level parse.

pub mod attachment;

pub use attachment::{bunsetu_attachments, BunsetuAttachment};
