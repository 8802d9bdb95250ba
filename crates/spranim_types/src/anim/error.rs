//! Error types for animation bytecode decoding and encoding.

use std::fmt;

use thiserror::Error;

/// Why a word stream could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
	/// Opcode nibble outside `0x0..=0x8`
	UnknownOpcode(u16),
	/// `0x8` family word whose bits 8-11 select no known sub-opcode
	UnknownSubOpcode(u16),
	/// `SetScale` word whose operand is not a scale mode
	InvalidScaleMode(u16),
	/// `SetPosition` word whose operand is neither `0` nor `1`
	InvalidPositionFlag(u16),
	/// The stream ends in the middle of a multi-word instruction
	Truncated {
		/// Words the instruction needs
		needed: usize,
		/// Words left in the stream
		available: usize,
	},
}

impl fmt::Display for MalformedReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownOpcode(word) => write!(f, "unknown animation command {word:04X}"),
			Self::UnknownSubOpcode(word) => write!(f, "unknown 0x8 sub-command {word:04X}"),
			Self::InvalidScaleMode(word) => write!(f, "invalid scale command type {word:04X}"),
			Self::InvalidPositionFlag(word) => write!(f, "invalid position flag {word:04X}"),
			Self::Truncated {
				needed,
				available,
			} => write!(f, "instruction needs {needed} words, only {available} left"),
		}
	}
}

/// Errors that can occur when decoding or encoding animation bytecode
#[derive(Debug, Error)]
pub enum AnimError {
	/// The word stream cannot be decoded
	#[error("Malformed stream at word {offset}: {reason}")]
	MalformedStream {
		/// Word position of the offending instruction
		offset: usize,
		/// What went wrong
		reason: MalformedReason,
	},

	/// A `Goto`/`Loop` references a label that is not in the command list
	#[error("Unresolved label: {name}")]
	UnresolvedLabel {
		/// Display name of the missing label
		name: String,
	},

	/// A value does not fit the bit width reserved for it in the encoding
	#[error("{instruction} operand {value} does not fit its encoding")]
	OperandOutOfRange {
		/// Name of the instruction being encoded
		instruction: &'static str,
		/// The offending value
		value: i32,
	},
}

impl AnimError {
	/// Creates a `MalformedStream` error
	pub fn malformed(offset: usize, reason: MalformedReason) -> Self {
		Self::MalformedStream {
			offset,
			reason,
		}
	}

	/// Creates an `UnresolvedLabel` error
	pub fn unresolved(name: impl Into<String>) -> Self {
		Self::UnresolvedLabel {
			name: name.into(),
		}
	}
}

/// Result alias used throughout the `anim` module
pub type Result<T> = std::result::Result<T, AnimError>;
