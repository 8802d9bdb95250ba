//! Sprite animation bytecode support for `spranim`.
//!
//! Every animated sprite component carries a small program of 16-bit words
//! that picks rasters, offsets and scales the component, waits and loops.
//! This module decodes those programs into editable command lists, encodes
//! them back bit-exactly, plays them tick by tick and computes their timing.
//!
//! # Word Format
//!
//! The high nibble of the first word is the opcode; the low 12 bits are its
//! operand. Some opcodes carry extra words with full 16-bit signed values.
//!
//! ```text
//! Opcode  Words  Instruction   Operand (12 bits)        Extra words
//! ------  -----  ------------  -----------------------  ----------------
//! 0x0     1      Wait          duration (0 = 4095)      -
//! 0x1     1      SetRaster     raster index (i12)       -
//! 0x2     1      Goto          word position            -
//! 0x3     4      SetPosition   flag (1 = set)           x, y, z
//! 0x4     3      SetRotation   x angle (i12)            y, z
//! 0x5     2      SetScale      mode (0 all, 1 x, 2 y,   percent
//!                              3 z)
//! 0x6     1      SetPalette    palette index (i12)      -
//! 0x7     2      Loop          word position            repeat count
//! 0x8     1      extended      sub-opcode (high 4 bits) -
//!                              value (low 8 bits)
//! ```
//!
//! Extended sub-opcodes: `0` SetUnknown, `1` SetParent, `2` SetNotify.
//!
//! Jump positions count words from the start of the stream. They normally
//! land on an instruction boundary; a position inside an instruction is
//! moved to the next boundary and its label is named `#<hex>` so that
//! assembly restores the original number.
//!
//! # Playback
//!
//! The [`Interpreter`] executes commands until one blocks. `Wait` blocks and
//! sets a delay that shrinks by two per tick. Position, rotation and scale
//! apply to the tick they are set in only; raster, palette and parent persist.
//!
//! # Examples
//!
//! ```
//! use spranim_types::anim::{LabelHints, assemble, disassemble};
//!
//! // SetRaster 0, Wait 2, Goto 0
//! let words = [0x1000, 0x0002, 0x2000];
//! let list = disassemble(&words, &LabelHints::new()).unwrap();
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.describe(0).as_deref(), Some("Label: Start"));
//!
//! let assembled = assemble(&list).unwrap();
//! assert_eq!(assembled.words, words);
//! assert_eq!(assembled.label_hints.get(&0).map(String::as_str), Some("Start"));
//! ```

mod asm;
mod assets;
mod config;
mod diagnostics;
mod disasm;
mod error;
mod instruction;
mod interpreter;
mod keyframe;
mod list;
mod record;
mod state;
mod timing;

pub mod constants;


pub use asm::{Assembled, assemble};
pub use assets::{AssetKind, SpriteAssets, SpriteInventory};
pub use config::{PlaybackConfig, TimingConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use disasm::{LabelHints, disassemble, escape_label_name, label_name, parse_escaped_label};
pub use error::{AnimError, MalformedReason, Result};
pub use instruction::{
	Instruction, RawInstruction, ScaleMode, decode_word, opcode_word_len, sign_extend_12,
};
pub use interpreter::{Interpreter, StepOutcome};
pub use keyframe::KeyframeConverter;
pub use list::{Command, CommandList, LabelId, ListChange, ListObserver};
pub use record::{AssetRef, CommandRecord, from_records, to_records};
pub use state::{AdvanceResult, AnimationState, Vec3i};
pub use timing::{Termination, TimingReport, analyze_timing};
