//! Static timing analysis.
//!
//! Walks a command list from its first command without touching any live
//! playback state, and records the elapsed wait time at which every reached
//! `Wait` and `Goto` executes. Loops are followed with the same single-level
//! repeat counter the interpreter uses.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use super::{
	config::TimingConfig,
	list::{Command, CommandList},
};

/// Why the timing walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
	/// The list has no commands
	Empty,
	/// The walk ran past the last command
	EndOfList,
	/// A command was reached a second time with no loop active
	SteadyState,
	/// A `Goto`/`Loop` referenced a label that is not in the list
	MissingLabel,
	/// The iteration cap was reached
	IterationCap,
}

/// Elapsed-time annotations of a command list.
///
/// The annotations are only valid for the list they were computed from and
/// must be recomputed after any edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingReport {
	/// Start time of each command by list index; `None` for commands that are
	/// not annotated (only `Wait` and `Goto` are) or never reached
	pub times: Vec<Option<u32>>,
	/// Elapsed time when the walk stopped
	pub total: u32,
	/// Why the walk stopped
	pub termination: Termination,
}

impl TimingReport {
	/// Annotated start time of the command at `index`.
	pub fn time_of(&self, index: usize) -> Option<u32> {
		self.times.get(index).copied().flatten()
	}
}

/// Annotates every reachable `Wait` and `Goto` with the elapsed wait time at
/// which it runs.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::{LabelHints, TimingConfig, analyze_timing, disassemble};
///
/// // Start: SetRaster 0, Wait 2, Goto Start
/// let list = disassemble(&[0x1000, 0x0002, 0x2000], &LabelHints::new()).unwrap();
/// let report = analyze_timing(&list, &TimingConfig::default());
/// assert_eq!(report.time_of(2), Some(0));
/// assert_eq!(report.time_of(3), Some(2));
/// ```
pub fn analyze_timing(list: &CommandList, config: &TimingConfig) -> TimingReport {
	let mut times = vec![None; list.len()];
	let (total, termination) = walk(list, config, &mut times);
	debug!("Timing walk over {} commands stopped ({termination:?}) at {total}", list.len());
	TimingReport {
		times,
		total,
		termination,
	}
}

fn walk(list: &CommandList, config: &TimingConfig, times: &mut [Option<u32>]) -> (u32, Termination) {
	if list.is_empty() {
		return (0, Termination::Empty);
	}

	let mut visited = HashSet::new();
	let mut position = 0;
	let mut time: u32 = 0;
	let mut repeat: Option<i32> = None;

	for _ in 0..config.max_iterations {
		let command = list.commands()[position];
		if !visited.insert(position) && repeat.is_none() {
			return (time, Termination::SteadyState);
		}

		match command {
			Command::Loop {
				target,
				count,
			} => {
				let Some(destination) = list.find_label(target) else {
					return (time, Termination::MissingLabel);
				};
				let remaining = match repeat {
					None => i32::from(count),
					Some(remaining) => remaining - 1,
				};
				if repeat.is_none() || remaining > 0 {
					repeat = Some(remaining);
					position = destination;
					continue;
				}
				repeat = None;
			}
			Command::Goto {
				target,
			} => {
				let Some(destination) = list.find_label(target) else {
					return (time, Termination::MissingLabel);
				};
				times[position] = Some(time);
				position = destination;
				continue;
			}
			Command::Wait {
				..
			} => {
				times[position] = Some(time);
				time = time.saturating_add(u32::from(command.effective_wait().unwrap_or_default()));
			}
			_ => {}
		}

		position += 1;
		if position == list.len() {
			return (time, Termination::EndOfList);
		}
	}

	(time, Termination::IterationCap)
}
