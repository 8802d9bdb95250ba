//! Validation of command lists.
//!
//! Problems found here never stop decoding or playback; they are attached to
//! the offending command so an editor can flag it.

use std::fmt;

use serde::Serialize;

use super::{
	assets::{AssetKind, SpriteAssets},
	list::{Command, CommandList},
};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
	/// Plays, but probably not as intended
	Warning,
	/// Refers to something that does not exist
	Error,
}

/// Kind of problem found on a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
	/// `Goto`/`Loop` label is not placed in the list
	MissingLabel(String),
	/// `SetRaster` index has no raster
	DanglingRaster(i16),
	/// `SetPalette` index has no palette
	DanglingPalette(i16),
	/// `SetParent` index has no component
	DanglingParent(u8),
	/// `SetParent` names the component that owns the list
	SelfParent,
	/// `Wait` with a zero operand, which plays as the maximum duration
	ZeroWait,
	/// `Wait` with an odd duration, which never ends on a tick boundary
	OddWait(u16),
	/// `Goto`/`Loop` target lies after the command
	ForwardJump,
}

impl DiagnosticKind {
	/// Severity of this kind of problem.
	pub fn severity(&self) -> Severity {
		match self {
			Self::MissingLabel(_)
			| Self::DanglingRaster(_)
			| Self::DanglingPalette(_)
			| Self::DanglingParent(_)
			| Self::SelfParent => Severity::Error,
			Self::ZeroWait | Self::OddWait(_) | Self::ForwardJump => Severity::Warning,
		}
	}
}

impl fmt::Display for DiagnosticKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingLabel(name) => write!(f, "missing label {name}"),
			Self::DanglingRaster(index) => write!(f, "raster {index} does not exist"),
			Self::DanglingPalette(index) => write!(f, "palette {index} does not exist"),
			Self::DanglingParent(index) => write!(f, "parent component {index} does not exist"),
			Self::SelfParent => write!(f, "parented to itself"),
			Self::ZeroWait => write!(f, "zero duration plays as 4095"),
			Self::OddWait(count) => write!(f, "odd duration {count}"),
			Self::ForwardJump => write!(f, "jumps forward"),
		}
	}
}

/// A problem attached to one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// List index of the offending command
	pub index: usize,
	/// Severity of the problem
	pub severity: Severity,
	/// What is wrong
	pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {:?}: {}", self.index, self.severity, self.kind)
	}
}

impl CommandList {
	/// Checks every command against the asset container.
	///
	/// `owner` is the index of the component this list belongs to, if known.
	pub fn validate<A: SpriteAssets + ?Sized>(&self, assets: &A, owner: Option<usize>) -> Vec<Diagnostic> {
		let mut diagnostics = Vec::new();
		let mut report = |index: usize, kind: DiagnosticKind| {
			diagnostics.push(Diagnostic {
				index,
				severity: kind.severity(),
				kind,
			});
		};

		for (index, command) in self.iter().enumerate() {
			match *command {
				Command::Wait {
					count: 0,
				} => report(index, DiagnosticKind::ZeroWait),
				Command::Wait {
					count,
				} if count % 2 == 1 => report(index, DiagnosticKind::OddWait(count)),
				Command::SetRaster {
					index: raster,
				} if raster >= 0 && assets.resolve(AssetKind::Raster, raster.into()).is_none() => {
					report(index, DiagnosticKind::DanglingRaster(raster));
				}
				Command::SetPalette {
					index: palette,
				} if palette >= 0 && assets.resolve(AssetKind::Palette, palette.into()).is_none() => {
					report(index, DiagnosticKind::DanglingPalette(palette));
				}
				Command::SetParent {
					index: parent,
				} => {
					if assets.resolve(AssetKind::Component, parent.into()).is_none() {
						report(index, DiagnosticKind::DanglingParent(parent));
					} else if owner == Some(usize::from(parent)) {
						report(index, DiagnosticKind::SelfParent);
					}
				}
				Command::Goto {
					target,
				}
				| Command::Loop {
					target,
					..
				} => match self.find_label(target) {
					None => report(
						index,
						DiagnosticKind::MissingLabel(self.label_name(target).unwrap_or("?").to_string()),
					),
					Some(destination) if destination > index => {
						report(index, DiagnosticKind::ForwardJump);
					}
					Some(_) => {}
				},
				_ => {}
			}
		}

		diagnostics
	}
}
