//! Frame-stepping interpreter.
//!
//! The interpreter walks a [`CommandList`] one tick at a time, applying each
//! command to an [`AnimationState`]. It holds a shared borrow of the list, so
//! the list cannot be edited while playback is live.

use log::{trace, warn};

use super::{
	assets::{AssetKind, SpriteAssets},
	config::PlaybackConfig,
	instruction::ScaleMode,
	list::{Command, CommandList, LabelId},
	state::{AdvanceResult, AnimationState, Vec3i},
};

/// What a call to [`Interpreter::step`] ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
	/// A pending delay has not expired yet; no commands ran
	Waiting,
	/// A command blocked (a `Wait` started)
	Blocked,
	/// The cursor ran past the last command
	Ended,
	/// The per-tick command cap was hit
	Stalled,
}

/// Plays one component's command list.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::{
///     Interpreter, LabelHints, PlaybackConfig, SpriteInventory, StepOutcome, disassemble,
/// };
///
/// // SetRaster 1, Wait 4, SetRaster 0, Wait 4
/// let list = disassemble(&[0x1001, 0x0004, 0x1000, 0x0004], &LabelHints::new()).unwrap();
/// let assets = SpriteInventory::with_counts(2, 0, 1);
/// let mut player = Interpreter::new(&list, &assets, PlaybackConfig::default());
///
/// assert_eq!(player.step(), StepOutcome::Blocked);
/// assert_eq!(player.state().raster, Some(1));
/// assert_eq!(player.step(), StepOutcome::Waiting);
/// assert_eq!(player.step(), StepOutcome::Blocked);
/// assert_eq!(player.state().raster, Some(0));
/// ```
#[derive(Debug)]
pub struct Interpreter<'a, A: SpriteAssets + ?Sized> {
	commands: &'a CommandList,
	assets: &'a A,
	config: PlaybackConfig,
	state: AnimationState,
}

impl<'a, A: SpriteAssets + ?Sized> Interpreter<'a, A> {
	/// Creates an interpreter positioned at the first command.
	pub fn new(commands: &'a CommandList, assets: &'a A, config: PlaybackConfig) -> Self {
		Self {
			commands,
			assets,
			config,
			state: AnimationState::new(),
		}
	}

	/// Returns to the first command and restores every state field to its default.
	pub fn reset(&mut self) {
		self.state = AnimationState::new();
	}

	/// Current animation state.
	pub fn state(&self) -> &AnimationState {
		&self.state
	}

	/// Index of the current command.
	pub fn cursor(&self) -> usize {
		self.state.cursor
	}

	/// Returns `true` once a zero-delay backward jump has been detected.
	pub fn is_complete(&self) -> bool {
		self.state.complete
	}

	/// Returns `true` if the cursor is at or past the command at `index`.
	pub fn surpassed(&self, index: usize) -> bool {
		self.state.cursor >= index
	}

	/// Configuration in use.
	pub fn config(&self) -> &PlaybackConfig {
		&self.config
	}

	/// Advances the animation by one tick.
	///
	/// A `ticks_per_step` below one counts as one.
	pub fn step(&mut self) -> StepOutcome {
		if self.state.delay > 0 {
			self.state.delay -= self.config.ticks_per_step.max(1);
			if self.state.delay > 0 {
				return StepOutcome::Waiting;
			}
			self.state.cursor += 1;
		}

		self.state.reset_pulse();

		let commands = self.commands;
		for _ in 0..self.config.max_iterations {
			let index = self.state.cursor;
			let Some(&command) = commands.get(index) else {
				return StepOutcome::Ended;
			};

			trace!("[{index}] {}", command.name());
			match self.apply(index, command) {
				AdvanceResult::Block => return StepOutcome::Blocked,
				AdvanceResult::Next => self.state.cursor += 1,
				AdvanceResult::Jump => {}
			}
		}

		warn!(
			"Animation stalled: {} commands ran without a wait (cursor at {})",
			self.config.max_iterations, self.state.cursor
		);
		StepOutcome::Stalled
	}

	fn apply(&mut self, index: usize, command: Command) -> AdvanceResult {
		let state = &mut self.state;
		match command {
			Command::Wait {
				..
			} => {
				let count = command.effective_wait().unwrap_or_default();
				state.delay = i32::from(count);
				state.waited = state.waited.saturating_add(u32::from(count));
				if count > 0 {
					AdvanceResult::Block
				} else {
					AdvanceResult::Next
				}
			}
			Command::SetRaster {
				index: raster,
			} => {
				state.raster = self.assets.resolve(AssetKind::Raster, i32::from(raster));
				if raster >= 0 && state.raster.is_none() {
					warn!("Command {index}: raster {raster} does not exist, drawing nothing");
				}
				state.palette = None;
				AdvanceResult::Next
			}
			Command::SetPalette {
				index: palette,
			} => {
				state.palette = self.assets.resolve(AssetKind::Palette, i32::from(palette));
				if palette >= 0 && state.palette.is_none() {
					warn!("Command {index}: palette {palette} does not exist, using default");
				}
				AdvanceResult::Next
			}
			Command::SetPosition {
				x,
				y,
				z,
				..
			} => {
				state.position = Vec3i::new(x.into(), y.into(), z.into());
				AdvanceResult::Next
			}
			Command::SetRotation {
				x,
				y,
				z,
			} => {
				state.rotation = Vec3i::new(x.into(), y.into(), z.into());
				AdvanceResult::Next
			}
			Command::SetScale {
				mode,
				percent,
			} => {
				let percent = i32::from(percent);
				match mode {
					ScaleMode::Uniform => state.scale = Vec3i::splat(percent),
					ScaleMode::X => state.scale.x = percent,
					ScaleMode::Y => {
						state.scale.y = percent;
						if self.config.legacy_scale_fallthrough {
							state.scale.z = percent;
						}
					}
					ScaleMode::Z => state.scale.z = percent,
				}
				AdvanceResult::Next
			}
			Command::SetParent {
				index: parent,
			} => {
				match self.assets.resolve(AssetKind::Component, i32::from(parent)) {
					Some(parent) => state.parent = Some(parent),
					None => warn!("Command {index}: parent component {parent} does not exist"),
				}
				AdvanceResult::Next
			}
			Command::Goto {
				target,
			} => {
				let Some(destination) = self.jump_destination(index, target) else {
					return AdvanceResult::Next;
				};
				let state = &mut self.state;
				if destination < index && state.waited == 0 {
					state.complete = true;
				}
				state.cursor = destination;
				AdvanceResult::Jump
			}
			Command::Loop {
				target,
				count,
			} => {
				let Some(destination) = self.jump_destination(index, target) else {
					return AdvanceResult::Next;
				};
				let state = &mut self.state;
				let remaining = match state.repeat {
					None => i32::from(count),
					Some(remaining) => remaining - 1,
				};
				if state.repeat.is_none() || remaining > 0 {
					state.repeat = Some(remaining);
					state.cursor = destination;
					AdvanceResult::Jump
				} else {
					state.repeat = None;
					AdvanceResult::Next
				}
			}
			Command::SetUnknown {
				..
			}
			| Command::SetNotify {
				..
			}
			| Command::Label(_) => AdvanceResult::Next,
		}
	}

	fn jump_destination(&self, index: usize, target: LabelId) -> Option<usize> {
		let destination = self.commands.find_label(target);
		if destination.is_none() {
			warn!(
				"Command {index}: label {} is not in the list, continuing",
				self.commands.label_name(target).unwrap_or("?")
			);
		}
		destination
	}
}
