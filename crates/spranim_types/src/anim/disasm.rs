//! Word stream to structured command list.
//!
//! Decoding runs in two passes. The first pass decodes instructions in stream
//! order and allocates one label per distinct `Goto`/`Loop` target. The second
//! pass places every label marker in front of the instruction that starts at
//! its target word. A target that does not start an instruction keeps its
//! literal position in the label's name (`#<hex>`) so that the assembler can
//! reproduce it.

use std::collections::BTreeMap;

use log::debug;

use super::{
	constants::{ESCAPE_LABEL_PREFIX, POSITION_LABEL_PREFIX, START_LABEL},
	error::Result,
	instruction::RawInstruction,
	list::{Command, CommandList, LabelId},
};

/// Sparse map from word position to label name, carried alongside a word stream.
pub type LabelHints = BTreeMap<u16, String>;

/// Decodes a word stream into a structured command list.
///
/// `hints` supplies names for jump targets recovered from earlier edits; targets
/// without a hint are named `Start` (position zero) or `Pos_<hex>`.
///
/// # Errors
/// Returns [`AnimError::MalformedStream`] if a word does not decode or the
/// stream ends inside an instruction.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::{Command, LabelHints, disassemble};
///
/// let list = disassemble(&[0x1000, 0x0002, 0x2000], &LabelHints::new()).unwrap();
/// let start = list.label_by_name("Start").unwrap();
/// assert_eq!(list.commands()[0], Command::Label(start));
/// assert_eq!(list.commands()[3], Command::Goto { target: start });
/// ```
///
/// [`AnimError::MalformedStream`]: super::AnimError::MalformedStream
pub fn disassemble(words: &[u16], hints: &LabelHints) -> Result<CommandList> {
	let mut list = CommandList::new();
	let mut targets: BTreeMap<u16, LabelId> = BTreeMap::new();

	let mut offset = 0;
	while offset < words.len() {
		let (raw, len) = RawInstruction::decode(&words[offset..], offset)?;
		let command = raw.map_target(|position| {
			*targets
				.entry(position)
				.or_insert_with(|| list.add_label(label_name(hints, position)))
		});
		list.push_silent(command);
		offset += len;
	}

	for (&position, &id) in &targets {
		let index = match boundary_index(&list, position) {
			Some(index) => index,
			None => {
				let escaped = escape_label_name(position);
				debug!(
					"Jump target {position:#X} does not start an instruction, label renamed to {escaped}"
				);
				list.set_label_name_silent(id, escaped);
				following_boundary_index(&list, position)
			}
		};
		list.insert_silent(index, Command::Label(id));
	}

	debug!(
		"Disassembled {} words into {} commands ({} labels)",
		words.len(),
		list.len(),
		targets.len()
	);
	Ok(list)
}

/// Name given to a label at `position` when no better name is known.
pub fn label_name(hints: &LabelHints, position: u16) -> String {
	match hints.get(&position) {
		Some(name) if !name.is_empty() => name.clone(),
		_ if position == 0 => START_LABEL.to_string(),
		_ => format!("{POSITION_LABEL_PREFIX}{position:X}"),
	}
}

/// Escaped label name that pins a literal word position.
pub fn escape_label_name(position: u16) -> String {
	format!("{ESCAPE_LABEL_PREFIX}{position:X}")
}

/// Parses an escaped label name (`#<hex>`) back into its word position.
pub fn parse_escaped_label(name: &str) -> Option<u16> {
	let digits = name.strip_prefix(ESCAPE_LABEL_PREFIX)?;
	if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}
	u16::from_str_radix(digits, 16).ok()
}

// index of the first command that starts exactly at `position`
fn boundary_index(list: &CommandList, position: u16) -> Option<usize> {
	let mut offset = 0;
	for (index, command) in list.iter().enumerate() {
		if offset == usize::from(position) {
			return Some(index);
		}
		offset += command.word_len();
	}
	None
}

// index of the first command that starts after `position`
fn following_boundary_index(list: &CommandList, position: u16) -> usize {
	let mut offset = 0;
	for (index, command) in list.iter().enumerate() {
		if offset > usize::from(position) {
			return index;
		}
		offset += command.word_len();
	}
	list.len()
}
