//! Prelude module for `spranim_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```
//! use spranim_types::prelude::*;
//!
//! let mut list = CommandList::new();
//! let start = list.add_label("Start");
//! list.push(Command::Label(start));
//! list.push(Command::Wait { count: 2 });
//! list.push(Command::Goto { target: start });
//! assert_eq!(assemble(&list).unwrap().words, vec![0x0002, 0x2000]);
//! ```

#[doc(inline)]
pub use crate::anim::{
	// Errors
	AnimError,
	// Playback
	AnimationState,
	// Assets
	AssetKind,
	Assembled,
	// Instructions
	Command,
	// Lists
	CommandList,
	// Records
	CommandRecord,
	// Validation
	Diagnostic,
	DiagnosticKind,
	Interpreter,
	LabelHints,
	LabelId,
	ListChange,
	MalformedReason,
	PlaybackConfig,
	RawInstruction,
	ScaleMode,
	Severity,
	SpriteAssets,
	SpriteInventory,
	StepOutcome,
	// Timing
	Termination,
	TimingConfig,
	TimingReport,
	Vec3i,
	// Functions
	analyze_timing,
	assemble,
	disassemble,
	from_records,
	to_records,
};
