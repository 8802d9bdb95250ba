//! This module is separated into its own crate so that `spranim` stays a thin facade, and should not be used directly.

/// `use spranim::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export spranim_types for convenience
pub use spranim_types;

// Re-export commonly used types at crate root
pub use spranim_types::anim::{
	AnimError, CommandList, Interpreter, PlaybackConfig, SpriteInventory, TimingConfig,
	analyze_timing, assemble, disassemble,
};
