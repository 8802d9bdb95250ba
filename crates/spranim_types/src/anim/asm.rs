//! Structured command list to word stream.

use std::collections::HashMap;

use log::debug;

use super::{
	constants::START_LABEL,
	disasm::{LabelHints, parse_escaped_label},
	error::{AnimError, Result},
	list::{Command, CommandList, LabelId},
};

/// Output of [`assemble`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
	/// Encoded word stream
	pub words: Vec<u16>,
	/// Label names by word offset, for restoring names on the next disassembly
	pub label_hints: LabelHints,
}

/// Encodes a command list into a word stream.
///
/// Jump targets are the word offsets of the referenced label markers, except
/// for escaped labels (`#<hex>`) whose literal position is used as-is.
///
/// # Errors
/// - [`AnimError::UnresolvedLabel`] if a `Goto`/`Loop` references a label
///   that is not placed in the list
/// - [`AnimError::OperandOutOfRange`] if a value does not fit its field
///
/// # Examples
///
/// ```
/// use spranim_types::anim::{LabelHints, assemble, disassemble};
///
/// let words = [0x1000, 0x0002, 0x2000];
/// let list = disassemble(&words, &LabelHints::new()).unwrap();
/// let assembled = assemble(&list).unwrap();
/// assert_eq!(assembled.words, words);
/// assert_eq!(assembled.label_hints.get(&0).map(String::as_str), Some("Start"));
/// ```
pub fn assemble(list: &CommandList) -> Result<Assembled> {
	// pass 1: label offsets
	let mut offsets: HashMap<LabelId, usize> = HashMap::new();
	let mut label_hints = LabelHints::new();
	label_hints.insert(0, START_LABEL.to_string());

	let mut offset = 0;
	for command in list {
		if let Command::Label(id) = *command {
			offsets.insert(id, offset);
			if let Some(name) = list.label_name(id)
				&& parse_escaped_label(name).is_none()
				&& let Ok(position) = u16::try_from(offset)
			{
				label_hints.insert(position, name.to_string());
			}
		}
		offset += command.word_len();
	}

	// pass 2: encode
	let mut words = Vec::with_capacity(offset);
	for command in list {
		if command.is_label() {
			continue;
		}
		let raw = command.try_map_target(|id| resolve_target(list, &offsets, id))?;
		raw.encode(&mut words)?;
	}

	debug!(
		"Assembled {} commands into {} words ({} named offsets)",
		list.len(),
		words.len(),
		label_hints.len()
	);
	Ok(Assembled {
		words,
		label_hints,
	})
}

fn resolve_target(list: &CommandList, offsets: &HashMap<LabelId, usize>, id: LabelId) -> Result<u16> {
	let Some(name) = list.label_name(id) else {
		return Err(AnimError::unresolved(format!("<label {}>", id.index())));
	};
	if let Some(position) = parse_escaped_label(name) {
		return Ok(position);
	}
	let offset = *offsets.get(&id).ok_or_else(|| AnimError::unresolved(name))?;
	u16::try_from(offset).map_err(|_| AnimError::OperandOutOfRange {
		instruction: "Goto",
		value: i32::try_from(offset).unwrap_or(i32::MAX),
	})
}
