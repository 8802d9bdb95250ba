//! This crate provides the core data types for the `spranim` project.
//!
//! # Modules
//!
//! - **anim**: Sprite animation bytecode: the word codec, command lists,
//!   the disassembler and assembler, the tick interpreter, timing analysis,
//!   validation and the textual record form
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use spranim_types::prelude::*;
//!
//! // SetRaster 0, Wait 2, Goto 0
//! let list = disassemble(&[0x1000, 0x0002, 0x2000], &LabelHints::new()).unwrap();
//! let assets = SpriteInventory::with_counts(1, 0, 1);
//! let mut player = Interpreter::new(&list, &assets, PlaybackConfig::default());
//! assert_eq!(player.step(), StepOutcome::Blocked);
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use spranim_types::anim::{LabelHints, TimingConfig, analyze_timing, disassemble};
//!
//! let list = disassemble(&[0x0004, 0x1002, 0x0004], &LabelHints::new()).unwrap();
//! let report = analyze_timing(&list, &TimingConfig::default());
//! assert_eq!(report.total, 8);
//! ```

pub mod anim;

/// `use spranim_types::prelude::*;` to import commonly used items.
pub mod prelude;
