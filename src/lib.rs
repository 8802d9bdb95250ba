#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `spranim` reads, edits, writes and plays the bytecode programs that drive
//! animated 2D sprite components.
//!
pub use spranim_internal::*;
