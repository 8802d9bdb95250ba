//! Prelude module for `spranim_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use spranim_internal::prelude::*;
//!
//! // Wait 4, SetRaster 2, Wait 4
//! let list = disassemble(&[0x0004, 0x1002, 0x0004], &LabelHints::new()).unwrap();
//! let diagnostics = list.validate(&SpriteInventory::with_counts(1, 0, 0), None);
//! assert_eq!(diagnostics.len(), 1);
//! ```

// Re-export everything from spranim_types::prelude
#[doc(inline)]
pub use spranim_types::prelude::*;

// Re-export the entire spranim_types module for advanced usage
#[doc(inline)]
pub use spranim_types;
