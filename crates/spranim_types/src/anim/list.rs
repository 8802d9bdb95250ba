//! Structured command list.
//!
//! A [`CommandList`] is the editable form of an animation: an ordered list of
//! [`Command`]s in which labels are zero-width markers. `Goto` and `Loop`
//! refer to labels through a [`LabelId`] handle into the list's label arena,
//! so moving or renaming a label never invalidates the jumps pointing at it.
//! Removing a label marker from the list leaves the handle dangling; the
//! assembler reports it and [`CommandList::validate`] flags it.
//!
//! [`CommandList::validate`]: super::CommandList::validate

use std::fmt;

use super::{
	asm::assemble,
	disasm::disassemble,
	error::Result,
	instruction::Instruction,
};

/// Stable handle of a label within one [`CommandList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(usize);

impl LabelId {
	/// Position of the label in the owning list's arena.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Instruction of a structured command list.
pub type Command = Instruction<LabelId>;

/// Structural change reported to a list observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
	/// A command was inserted at this index
	Inserted(usize),
	/// The command at this index was removed
	Removed(usize),
	/// The command at this index was replaced
	Replaced(usize),
	/// A command moved between indices
	Moved {
		/// Previous index
		from: usize,
		/// New index
		to: usize,
	},
	/// A label was renamed
	Renamed(LabelId),
	/// The whole list was rebuilt
	Reloaded,
}

/// Callback invoked after every structural change.
pub type ListObserver = Box<dyn FnMut(&ListChange)>;

/// Ordered, label-addressable list of animation commands.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::{Command, CommandList};
///
/// let mut list = CommandList::new();
/// let start = list.add_label("Start");
/// list.push(Command::Label(start));
/// list.push(Command::SetRaster { index: 0 });
/// list.push(Command::Wait { count: 2 });
/// list.push(Command::Goto { target: start });
///
/// assert_eq!(list.word_len(), 3);
/// assert_eq!(list.find_label(start), Some(0));
/// ```
#[derive(Default)]
pub struct CommandList {
	commands: Vec<Command>,
	label_names: Vec<String>,
	observer: Option<ListObserver>,
}

impl CommandList {
	/// Creates an empty command list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the commands in list order.
	pub fn commands(&self) -> &[Command] {
		&self.commands
	}

	/// Returns the command at `index`.
	pub fn get(&self, index: usize) -> Option<&Command> {
		self.commands.get(index)
	}

	/// Iterates over the commands in list order.
	pub fn iter(&self) -> std::slice::Iter<'_, Command> {
		self.commands.iter()
	}

	/// Number of commands, labels included.
	pub fn len(&self) -> usize {
		self.commands.len()
	}

	/// Returns `true` if the list has no commands.
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Number of words the list assembles to.
	pub fn word_len(&self) -> usize {
		self.commands.iter().map(Command::word_len).sum()
	}

	/// Word offset at which the command at `index` would be assembled.
	///
	/// `index == len()` yields the total word length.
	pub fn word_offset(&self, index: usize) -> Option<usize> {
		(index <= self.commands.len())
			.then(|| self.commands[..index].iter().map(Command::word_len).sum())
	}

	/// Registers a new label name and returns its handle.
	///
	/// The label is not placed in the list; insert `Command::Label(id)` for that.
	pub fn add_label(&mut self, name: impl Into<String>) -> LabelId {
		self.label_names.push(name.into());
		LabelId(self.label_names.len() - 1)
	}

	/// Name of a label, `None` for a handle from another list.
	pub fn label_name(&self, id: LabelId) -> Option<&str> {
		self.label_names.get(id.0).map(String::as_str)
	}

	/// Renames a label. Returns `false` for a handle from another list.
	pub fn rename_label(&mut self, id: LabelId, name: impl Into<String>) -> bool {
		let Some(slot) = self.label_names.get_mut(id.0) else {
			return false;
		};
		*slot = name.into();
		self.notify(ListChange::Renamed(id));
		true
	}

	/// List index of a label's marker, `None` if the label is not placed.
	pub fn find_label(&self, id: LabelId) -> Option<usize> {
		self.commands.iter().position(|cmd| *cmd == Command::Label(id))
	}

	/// Labels placed in the list, in list order.
	pub fn labels(&self) -> impl Iterator<Item = LabelId> + '_ {
		self.commands.iter().filter_map(|cmd| match cmd {
			Command::Label(id) => Some(*id),
			_ => None,
		})
	}

	/// Finds a placed label by name.
	pub fn label_by_name(&self, name: &str) -> Option<LabelId> {
		self.labels().find(|&id| self.label_name(id) == Some(name))
	}

	/// Appends a command.
	pub fn push(&mut self, command: Command) {
		self.commands.push(command);
		self.notify(ListChange::Inserted(self.commands.len() - 1));
	}

	/// Inserts a command at `index`, shifting later commands.
	///
	/// # Panics
	/// Panics if `index > len()`.
	pub fn insert(&mut self, index: usize, command: Command) {
		self.commands.insert(index, command);
		self.notify(ListChange::Inserted(index));
	}

	/// Removes and returns the command at `index`.
	pub fn remove(&mut self, index: usize) -> Option<Command> {
		if index >= self.commands.len() {
			return None;
		}
		let command = self.commands.remove(index);
		self.notify(ListChange::Removed(index));
		Some(command)
	}

	/// Replaces the command at `index`, returning the previous one.
	pub fn replace(&mut self, index: usize, command: Command) -> Option<Command> {
		let slot = self.commands.get_mut(index)?;
		let previous = std::mem::replace(slot, command);
		self.notify(ListChange::Replaced(index));
		Some(previous)
	}

	/// Moves the command at `from` so that it ends up at index `to`.
	///
	/// Returns `false` if either index is out of range.
	pub fn move_command(&mut self, from: usize, to: usize) -> bool {
		let len = self.commands.len();
		if from >= len || to >= len {
			return false;
		}
		let command = self.commands.remove(from);
		self.commands.insert(to, command);
		self.notify(ListChange::Moved {
			from,
			to,
		});
		true
	}

	/// Installs the change observer, replacing any previous one.
	pub fn set_observer(&mut self, observer: impl FnMut(&ListChange) + 'static) {
		self.observer = Some(Box::new(observer));
	}

	/// Removes the change observer.
	pub fn clear_observer(&mut self) {
		self.observer = None;
	}

	/// Replaces every command and label with those of `other`, keeping the observer.
	pub fn reload(&mut self, other: CommandList) {
		self.commands = other.commands;
		self.label_names = other.label_names;
		self.notify(ListChange::Reloaded);
	}

	/// Copies the list by assembling and disassembling it, so that every
	/// label handle in the copy is freshly allocated.
	///
	/// # Errors
	/// Fails when the list does not assemble.
	pub fn deep_copy(&self) -> Result<Self> {
		let assembled = assemble(self)?;
		disassemble(&assembled.words, &assembled.label_hints)
	}

	/// Renders the command at `index` the way listings show it.
	pub fn describe(&self, index: usize) -> Option<String> {
		let command = self.commands.get(index)?;
		Some(command.describe_with(|&id| match (self.label_name(id), self.find_label(id)) {
			(Some(name), Some(_)) => name.to_string(),
			(Some(name), None) if !command.is_label() => format!("{name} (missing)"),
			(Some(name), None) => name.to_string(),
			(None, _) => "(missing)".to_string(),
		}))
	}

	pub(crate) fn push_silent(&mut self, command: Command) {
		self.commands.push(command);
	}

	pub(crate) fn insert_silent(&mut self, index: usize, command: Command) {
		self.commands.insert(index, command);
	}

	pub(crate) fn set_label_name_silent(&mut self, id: LabelId, name: String) {
		if let Some(slot) = self.label_names.get_mut(id.0) {
			*slot = name;
		}
	}

	fn notify(&mut self, change: ListChange) {
		if let Some(observer) = self.observer.as_mut() {
			observer(&change);
		}
	}
}

impl Clone for CommandList {
	/// Clones commands and labels; the observer is not carried over.
	fn clone(&self) -> Self {
		Self {
			commands: self.commands.clone(),
			label_names: self.label_names.clone(),
			observer: None,
		}
	}
}

impl PartialEq for CommandList {
	fn eq(&self, other: &Self) -> bool {
		self.commands == other.commands && self.label_names == other.label_names
	}
}

impl fmt::Debug for CommandList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandList")
			.field("commands", &self.commands)
			.field("label_names", &self.label_names)
			.field("observer", &self.observer.is_some())
			.finish()
	}
}

impl fmt::Display for CommandList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "CommandList({} commands, {} words)", self.commands.len(), self.word_len())
	}
}

impl<'a> IntoIterator for &'a CommandList {
	type Item = &'a Command;
	type IntoIter = std::slice::Iter<'a, Command>;

	fn into_iter(self) -> Self::IntoIter {
		self.commands.iter()
	}
}
