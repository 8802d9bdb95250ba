//! Instruction codec for animation bytecode.
//!
//! Every instruction starts with one 16-bit word whose top nibble is the
//! opcode and whose low 12 bits are the first operand. Some instructions
//! carry extra full-width words:
//!
//! ```text
//! Word(s)               Instruction    Length
//! --------------------  -------------  ------
//! 0VVV                  Wait           1
//! 1VVV                  SetRaster      1
//! 2VVV                  Goto           1
//! 3VVV XXXX YYYY ZZZZ   SetPosition    4
//! 4XXX YYYY ZZZZ        SetRotation    3
//! 5VVV UUUU             SetScale       2
//! 6VVV                  SetPalette     1
//! 7VVV UUUU             Loop           2
//! 80XX                  SetUnknown     1
//! 81XX                  SetParent      1
//! 82XX                  SetNotify      1
//! ```
//!
//! `SetRaster`, `SetPalette` and the rotation X angle are signed 12-bit
//! values, so `0xFFF` decodes to `-1`. `Wait`, `Goto` and `Loop` operands
//! are unsigned.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
	constants::*,
	error::{AnimError, MalformedReason, Result},
};

/// Axis selection of a `SetScale` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleMode {
	/// Scale all three axes
	Uniform,
	/// Scale the X axis only
	X,
	/// Scale the Y axis only
	Y,
	/// Scale the Z axis only
	Z,
}

impl ScaleMode {
	/// Decodes a scale mode from the low 12 bits of a `SetScale` word.
	pub fn from_operand(operand: u16) -> Option<Self> {
		match operand {
			0 => Some(Self::Uniform),
			1 => Some(Self::X),
			2 => Some(Self::Y),
			3 => Some(Self::Z),
			_ => None,
		}
	}

	/// Returns the operand value stored in the `SetScale` word.
	pub fn operand(self) -> u16 {
		match self {
			Self::Uniform => 0,
			Self::X => 1,
			Self::Y => 2,
			Self::Z => 3,
		}
	}

	/// Short axis name used in listings.
	pub fn name(self) -> &'static str {
		match self {
			Self::Uniform => "All",
			Self::X => "X",
			Self::Y => "Y",
			Self::Z => "Z",
		}
	}
}

/// A single animation instruction.
///
/// `T` is the type used to address jump targets. Instructions decoded
/// straight from a word stream use the absolute word position
/// ([`RawInstruction`]); the structured command list uses label handles.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::RawInstruction;
///
/// let (wait, len) = RawInstruction::decode(&[0x0004], 0).unwrap();
/// assert_eq!(wait, RawInstruction::Wait { count: 4 });
/// assert_eq!(len, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction<T> {
	/// Pause for `count` ticks. A stored count of zero plays as [`MAX_WAIT`].
	Wait {
		/// Raw 12-bit operand
		count: u16,
	},

	/// Select the raster to draw, `-1` draws nothing
	SetRaster {
		/// Raster index (signed 12-bit)
		index: i16,
	},

	/// Continue at a target
	Goto {
		/// Jump destination
		target: T,
	},

	/// Position offset for this tick
	SetPosition {
		/// Carried through encoding, no runtime effect
		flag: bool,
		/// X offset
		x: i16,
		/// Y offset
		y: i16,
		/// Z offset
		z: i16,
	},

	/// Euler rotation in degrees for this tick
	SetRotation {
		/// X angle (signed 12-bit)
		x: i16,
		/// Y angle
		y: i16,
		/// Z angle
		z: i16,
	},

	/// Scale percentage for this tick
	SetScale {
		/// Axis selection
		mode: ScaleMode,
		/// Percentage, 100 is identity
		percent: i16,
	},

	/// Select a palette override, `-1` restores the default palette
	SetPalette {
		/// Palette index (signed 12-bit)
		index: i16,
	},

	/// Repeat the region starting at `target`
	Loop {
		/// Loop start
		target: T,
		/// Number of repeats
		count: i16,
	},

	/// Unknown `80XX` command, preserved verbatim
	SetUnknown {
		/// Sub-operand byte
		value: u8,
	},

	/// Attach to a sibling component of the same animation
	SetParent {
		/// Component index
		index: u8,
	},

	/// Notification value for external listeners
	SetNotify {
		/// Sub-operand byte
		value: u8,
	},

	/// Zero-width jump destination; never present in a word stream
	Label(T),
}

/// Instruction whose jump targets are absolute word positions.
pub type RawInstruction = Instruction<u16>;

/// Splits a word into its opcode nibble and 12-bit operand.
pub fn decode_word(word: u16) -> (u16, u16) {
	(word >> 12, word & OPERAND_MASK)
}

/// Sign-extends a 12-bit operand.
pub fn sign_extend_12(operand: u16) -> i16 {
	(((operand as i32) << 20) >> 20) as i16
}

/// Returns the number of words used by the instruction with the given opcode nibble.
pub fn opcode_word_len(opcode: u16) -> Option<usize> {
	match opcode {
		OP_WAIT | OP_SET_RASTER | OP_GOTO | OP_SET_PALETTE | OP_EXTENDED => Some(1),
		OP_SET_SCALE | OP_LOOP => Some(2),
		OP_SET_ROTATION => Some(3),
		OP_SET_POSITION => Some(4),
		_ => None,
	}
}

impl<T> Instruction<T> {
	/// Number of stream words this instruction occupies; labels occupy none.
	pub fn word_len(&self) -> usize {
		match self {
			Self::Label(_) => 0,
			Self::Wait {
				..
			}
			| Self::SetRaster {
				..
			}
			| Self::Goto {
				..
			}
			| Self::SetPalette {
				..
			}
			| Self::SetUnknown {
				..
			}
			| Self::SetParent {
				..
			}
			| Self::SetNotify {
				..
			} => 1,
			Self::SetScale {
				..
			}
			| Self::Loop {
				..
			} => 2,
			Self::SetRotation {
				..
			} => 3,
			Self::SetPosition {
				..
			} => 4,
		}
	}

	/// Human readable instruction name.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Wait {
				..
			} => "Wait",
			Self::SetRaster {
				..
			} => "Set Raster",
			Self::Goto {
				..
			} => "Goto",
			Self::SetPosition {
				..
			} => "Set Position",
			Self::SetRotation {
				..
			} => "Set Rotation",
			Self::SetScale {
				..
			} => "Set Scale",
			Self::SetPalette {
				..
			} => "Set Palette",
			Self::Loop {
				..
			} => "Loop",
			Self::SetUnknown {
				..
			} => "Set Unknown",
			Self::SetParent {
				..
			} => "Set Parent",
			Self::SetNotify {
				..
			} => "Set Notify",
			Self::Label(_) => "Label",
		}
	}

	/// Returns `true` for the zero-width label pseudo-instruction.
	pub fn is_label(&self) -> bool {
		matches!(self, Self::Label(_))
	}

	/// Returns the jump target of a `Goto` or `Loop`.
	pub fn jump_target(&self) -> Option<&T> {
		match self {
			Self::Goto {
				target,
			}
			| Self::Loop {
				target,
				..
			} => Some(target),
			_ => None,
		}
	}

	/// Duration a `Wait` actually plays for, with zero read as [`MAX_WAIT`].
	pub fn effective_wait(&self) -> Option<u16> {
		match self {
			Self::Wait {
				count: 0,
			} => Some(MAX_WAIT),
			Self::Wait {
				count,
			} => Some(*count),
			_ => None,
		}
	}

	/// Converts jump targets (and label markers) with a fallible mapping.
	pub fn try_map_target<U, E>(
		self,
		f: impl FnOnce(T) -> std::result::Result<U, E>,
	) -> std::result::Result<Instruction<U>, E> {
		Ok(match self {
			Self::Wait {
				count,
			} => Instruction::Wait {
				count,
			},
			Self::SetRaster {
				index,
			} => Instruction::SetRaster {
				index,
			},
			Self::Goto {
				target,
			} => Instruction::Goto {
				target: f(target)?,
			},
			Self::SetPosition {
				flag,
				x,
				y,
				z,
			} => Instruction::SetPosition {
				flag,
				x,
				y,
				z,
			},
			Self::SetRotation {
				x,
				y,
				z,
			} => Instruction::SetRotation {
				x,
				y,
				z,
			},
			Self::SetScale {
				mode,
				percent,
			} => Instruction::SetScale {
				mode,
				percent,
			},
			Self::SetPalette {
				index,
			} => Instruction::SetPalette {
				index,
			},
			Self::Loop {
				target,
				count,
			} => Instruction::Loop {
				target: f(target)?,
				count,
			},
			Self::SetUnknown {
				value,
			} => Instruction::SetUnknown {
				value,
			},
			Self::SetParent {
				index,
			} => Instruction::SetParent {
				index,
			},
			Self::SetNotify {
				value,
			} => Instruction::SetNotify {
				value,
			},
			Self::Label(target) => Instruction::Label(f(target)?),
		})
	}

	/// Converts jump targets (and label markers) with an infallible mapping.
	pub fn map_target<U>(self, f: impl FnOnce(T) -> U) -> Instruction<U> {
		match self.try_map_target(|target| Ok::<U, std::convert::Infallible>(f(target))) {
			Ok(instruction) => instruction,
			Err(never) => match never {},
		}
	}

	/// Renders the instruction the way command listings show it.
	///
	/// `target_name` renders jump targets and label markers.
	pub fn describe_with(&self, target_name: impl Fn(&T) -> String) -> String {
		match self {
			Self::Wait {
				..
			} => format!("Wait {}", self.effective_wait().unwrap_or(MAX_WAIT)),
			Self::SetRaster {
				index,
			} if *index < 0 => "Clear Raster".to_string(),
			Self::SetRaster {
				index,
			} => format!("Raster: {index}"),
			Self::Goto {
				target,
			} => format!("Goto: {}", target_name(target)),
			Self::SetPosition {
				x,
				y,
				z,
				..
			} => format!("Position: ({x}, {y}, {z})"),
			Self::SetRotation {
				x,
				y,
				z,
			} => format!("Rotation: ({x}, {y}, {z})"),
			Self::SetScale {
				mode,
				percent,
			} => format!("Scale {}: {percent}%", mode.name()),
			Self::SetPalette {
				index,
			} if *index < 0 => "Default Palette".to_string(),
			Self::SetPalette {
				index,
			} => format!("Palette: {index}"),
			Self::Loop {
				target,
				count,
			} => format!("Repeat: {} (x{count})", target_name(target)),
			Self::SetUnknown {
				value,
			} => format!("Set Unknown: {value}"),
			Self::SetParent {
				index,
			} => format!("Parent: {index}"),
			Self::SetNotify {
				value,
			} => format!("Set Notify: {value}"),
			Self::Label(target) => format!("Label: {}", target_name(target)),
		}
	}
}

impl RawInstruction {
	/// Decodes one instruction from the start of `words`.
	///
	/// `offset` is the word position of `words[0]` in the whole stream and is
	/// only used for error reporting.
	///
	/// # Returns
	/// The decoded instruction and the number of words it consumed
	///
	/// # Errors
	/// Returns [`AnimError::MalformedStream`] for an unknown opcode or
	/// sub-opcode, an invalid scale mode or position flag, or a truncated
	/// instruction.
	pub fn decode(words: &[u16], offset: usize) -> Result<(Self, usize)> {
		let Some(&first) = words.first() else {
			return Err(AnimError::malformed(
				offset,
				MalformedReason::Truncated {
					needed: 1,
					available: 0,
				},
			));
		};

		let (opcode, operand) = decode_word(first);
		let len = opcode_word_len(opcode)
			.ok_or_else(|| AnimError::malformed(offset, MalformedReason::UnknownOpcode(first)))?;
		if words.len() < len {
			return Err(AnimError::malformed(
				offset,
				MalformedReason::Truncated {
					needed: len,
					available: words.len(),
				},
			));
		}

		let extra = |i: usize| words[i] as i16;
		let instruction = match opcode {
			OP_WAIT => Self::Wait {
				count: operand,
			},
			OP_SET_RASTER => Self::SetRaster {
				index: sign_extend_12(operand),
			},
			OP_GOTO => Self::Goto {
				target: operand,
			},
			OP_SET_POSITION => Self::SetPosition {
				flag: match operand {
					0 => false,
					1 => true,
					_ => {
						return Err(AnimError::malformed(
							offset,
							MalformedReason::InvalidPositionFlag(first),
						));
					}
				},
				x: extra(1),
				y: extra(2),
				z: extra(3),
			},
			OP_SET_ROTATION => Self::SetRotation {
				x: sign_extend_12(operand),
				y: extra(1),
				z: extra(2),
			},
			OP_SET_SCALE => Self::SetScale {
				mode: ScaleMode::from_operand(operand).ok_or_else(|| {
					AnimError::malformed(offset, MalformedReason::InvalidScaleMode(first))
				})?,
				percent: extra(1),
			},
			OP_SET_PALETTE => Self::SetPalette {
				index: sign_extend_12(operand),
			},
			OP_LOOP => Self::Loop {
				target: operand,
				count: extra(1),
			},
			OP_EXTENDED => {
				let value = (operand & SUB_OPERAND_MASK) as u8;
				match operand >> 8 {
					SUB_SET_UNKNOWN => Self::SetUnknown {
						value,
					},
					SUB_SET_PARENT => Self::SetParent {
						index: value,
					},
					SUB_SET_NOTIFY => Self::SetNotify {
						value,
					},
					_ => {
						return Err(AnimError::malformed(
							offset,
							MalformedReason::UnknownSubOpcode(first),
						));
					}
				}
			}
			_ => return Err(AnimError::malformed(offset, MalformedReason::UnknownOpcode(first))),
		};

		Ok((instruction, len))
	}

	/// Appends the encoded words of this instruction to `out`.
	///
	/// Labels append nothing.
	///
	/// # Errors
	/// Returns [`AnimError::OperandOutOfRange`] when a target or a 12-bit
	/// operand does not fit its field.
	pub fn encode(&self, out: &mut Vec<u16>) -> Result<()> {
		match *self {
			Self::Wait {
				count,
			} => out.push(op_word(OP_WAIT, unsigned_12(self.name(), count)?)),
			Self::SetRaster {
				index,
			} => out.push(op_word(OP_SET_RASTER, signed_12(self.name(), index)?)),
			Self::Goto {
				target,
			} => out.push(op_word(OP_GOTO, unsigned_12(self.name(), target)?)),
			Self::SetPosition {
				flag,
				x,
				y,
				z,
			} => {
				out.push(op_word(OP_SET_POSITION, u16::from(flag)));
				out.extend([x as u16, y as u16, z as u16]);
			}
			Self::SetRotation {
				x,
				y,
				z,
			} => {
				out.push(op_word(OP_SET_ROTATION, signed_12(self.name(), x)?));
				out.extend([y as u16, z as u16]);
			}
			Self::SetScale {
				mode,
				percent,
			} => {
				out.push(op_word(OP_SET_SCALE, mode.operand()));
				out.push(percent as u16);
			}
			Self::SetPalette {
				index,
			} => out.push(op_word(OP_SET_PALETTE, signed_12(self.name(), index)?)),
			Self::Loop {
				target,
				count,
			} => {
				out.push(op_word(OP_LOOP, unsigned_12(self.name(), target)?));
				out.push(count as u16);
			}
			Self::SetUnknown {
				value,
			} => out.push(sub_word(SUB_SET_UNKNOWN, value)),
			Self::SetParent {
				index,
			} => out.push(sub_word(SUB_SET_PARENT, index)),
			Self::SetNotify {
				value,
			} => out.push(sub_word(SUB_SET_NOTIFY, value)),
			Self::Label(_) => {}
		}
		Ok(())
	}
}

impl fmt::Display for RawInstruction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe_with(|target| format!("{ESCAPE_LABEL_PREFIX}{target:X}")))
	}
}

fn op_word(opcode: u16, operand: u16) -> u16 {
	(opcode << 12) | (operand & OPERAND_MASK)
}

fn sub_word(sub_opcode: u16, value: u8) -> u16 {
	op_word(OP_EXTENDED, (sub_opcode << 8) | u16::from(value))
}

fn unsigned_12(instruction: &'static str, value: u16) -> Result<u16> {
	if value > OPERAND_MASK {
		return Err(AnimError::OperandOutOfRange {
			instruction,
			value: i32::from(value),
		});
	}
	Ok(value)
}

fn signed_12(instruction: &'static str, value: i16) -> Result<u16> {
	if !(I12_MIN..=I12_MAX).contains(&value) {
		return Err(AnimError::OperandOutOfRange {
			instruction,
			value: i32::from(value),
		});
	}
	Ok(value as u16 & OPERAND_MASK)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn decode_one(words: &[u16]) -> RawInstruction {
		let (instruction, len) = RawInstruction::decode(words, 0).unwrap();
		assert_eq!(len, words.len());
		instruction
	}

	fn encode_one(instruction: RawInstruction) -> Vec<u16> {
		let mut out = Vec::new();
		instruction.encode(&mut out).unwrap();
		out
	}

	#[test]
	fn test_decode_word_splits_nibble() {
		assert_eq!(decode_word(0x7ABC), (0x7, 0xABC));
		assert_eq!(decode_word(0x0000), (0x0, 0x000));
	}

	#[test]
	fn test_sign_extend() {
		assert_eq!(sign_extend_12(0xFFF), -1);
		assert_eq!(sign_extend_12(0x800), -2048);
		assert_eq!(sign_extend_12(0x7FF), 2047);
		assert_eq!(sign_extend_12(0x002), 2);
	}

	#[test]
	fn test_wait_zero_plays_as_max() {
		let wait = decode_one(&[0x0000]);
		assert_eq!(
			wait,
			RawInstruction::Wait {
				count: 0
			}
		);
		assert_eq!(wait.effective_wait(), Some(4095));
		assert_eq!(encode_one(wait), vec![0x0000]);
	}

	#[test]
	fn test_clear_raster_and_default_palette() {
		assert_eq!(
			decode_one(&[0x1FFF]),
			RawInstruction::SetRaster {
				index: NO_ASSET
			}
		);
		assert_eq!(
			decode_one(&[0x6FFF]),
			RawInstruction::SetPalette {
				index: NO_ASSET
			}
		);
		assert_eq!(
			encode_one(RawInstruction::SetRaster {
				index: -1
			}),
			vec![0x1FFF]
		);
	}

	#[test]
	fn test_multi_word_instructions() {
		assert_eq!(
			decode_one(&[0x3001, 0x0010, 0xFFF0, 0x0000]),
			RawInstruction::SetPosition {
				flag: true,
				x: 16,
				y: -16,
				z: 0,
			}
		);
		assert_eq!(
			decode_one(&[0x4F9C, 0x005A, 0xFFA6]),
			RawInstruction::SetRotation {
				x: -100,
				y: 90,
				z: -90,
			}
		);
		assert_eq!(
			decode_one(&[0x5002, 0x0032]),
			RawInstruction::SetScale {
				mode: ScaleMode::Y,
				percent: 50,
			}
		);
		assert_eq!(
			decode_one(&[0x7003, 0x0003]),
			RawInstruction::Loop {
				target: 3,
				count: 3,
			}
		);
	}

	#[test]
	fn test_extended_sub_opcodes() {
		assert_eq!(
			decode_one(&[0x8042]),
			RawInstruction::SetUnknown {
				value: 0x42
			}
		);
		assert_eq!(
			decode_one(&[0x8103]),
			RawInstruction::SetParent {
				index: 3
			}
		);
		assert_eq!(
			decode_one(&[0x82FF]),
			RawInstruction::SetNotify {
				value: 0xFF
			}
		);
		assert_eq!(
			encode_one(RawInstruction::SetNotify {
				value: 7
			}),
			vec![0x8207]
		);
	}

	#[test]
	fn test_decode_errors() {
		let err = RawInstruction::decode(&[0x9000], 5).unwrap_err();
		assert!(matches!(
			err,
			AnimError::MalformedStream {
				offset: 5,
				reason: MalformedReason::UnknownOpcode(0x9000),
			}
		));

		let err = RawInstruction::decode(&[0x8300], 0).unwrap_err();
		assert!(matches!(
			err,
			AnimError::MalformedStream {
				reason: MalformedReason::UnknownSubOpcode(0x8300),
				..
			}
		));

		let err = RawInstruction::decode(&[0x3000, 0x0001], 0).unwrap_err();
		assert!(matches!(
			err,
			AnimError::MalformedStream {
				reason: MalformedReason::Truncated {
					needed: 4,
					available: 2,
				},
				..
			}
		));

		let err = RawInstruction::decode(&[0x5004, 0x0064], 0).unwrap_err();
		assert!(matches!(
			err,
			AnimError::MalformedStream {
				reason: MalformedReason::InvalidScaleMode(0x5004),
				..
			}
		));

		let err = RawInstruction::decode(&[0x3002, 0x0001, 0x0002, 0x0003], 0).unwrap_err();
		assert!(matches!(
			err,
			AnimError::MalformedStream {
				reason: MalformedReason::InvalidPositionFlag(0x3002),
				..
			}
		));
	}

	#[test]
	fn test_word_len_matches_opcode_table() {
		for word in [0x0001u16, 0x1000, 0x2000, 0x3000, 0x4000, 0x5000, 0x6000, 0x7000, 0x8100] {
			let (opcode, _) = decode_word(word);
			let mut words = vec![word];
			words.resize(opcode_word_len(opcode).unwrap(), 0);
			let (instruction, len) = RawInstruction::decode(&words, 0).unwrap();
			assert_eq!(instruction.word_len(), len);
			assert_eq!(encode_one(instruction).len(), len);
		}
		assert_eq!(RawInstruction::Label(0).word_len(), 0);
		assert!(encode_one(RawInstruction::Label(0)).is_empty());
	}

	#[test]
	fn test_encode_rejects_wide_operands() {
		let mut out = Vec::new();
		let err = RawInstruction::Goto {
			target: 0x1000,
		}
		.encode(&mut out)
		.unwrap_err();
		assert!(matches!(
			err,
			AnimError::OperandOutOfRange {
				instruction: "Goto",
				value: 0x1000,
			}
		));

		let err = RawInstruction::SetRaster {
			index: 2048,
		}
		.encode(&mut out)
		.unwrap_err();
		assert!(matches!(err, AnimError::OperandOutOfRange { .. }));
		assert!(out.is_empty());
	}

	#[test]
	fn test_display() {
		assert_eq!(
			RawInstruction::Loop {
				target: 0x1A,
				count: 3
			}
			.to_string(),
			"Repeat: #1A (x3)"
		);
		assert_eq!(
			RawInstruction::SetScale {
				mode: ScaleMode::Uniform,
				percent: 150
			}
			.to_string(),
			"Scale All: 150%"
		);
		assert_eq!(
			RawInstruction::SetRaster {
				index: -1
			}
			.to_string(),
			"Clear Raster"
		);
	}
}
