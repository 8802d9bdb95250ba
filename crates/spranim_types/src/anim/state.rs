//! Per-component animation state driven by the interpreter.

use serde::Serialize;

use super::constants::DEFAULT_SCALE;

/// Integer triple used for position, rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Vec3i {
	/// X component
	pub x: i32,
	/// Y component
	pub y: i32,
	/// Z component
	pub z: i32,
}

impl Vec3i {
	/// Creates a triple.
	pub const fn new(x: i32, y: i32, z: i32) -> Self {
		Self {
			x,
			y,
			z,
		}
	}

	/// Triple with the same value on every axis.
	pub const fn splat(v: i32) -> Self {
		Self::new(v, v, v)
	}
}

/// Outcome of executing one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
	/// Move to the following command and keep going
	Next,
	/// The command moved the cursor itself; keep going from there
	Jump,
	/// Stop processing for this tick
	Block,
}

/// Mutable playback state of one animation component.
///
/// Position, rotation and scale are pulse fields: they return to their
/// defaults at the start of every tick that runs commands. Raster, palette
/// and parent persist until a command changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationState {
	/// Index of the current command
	pub cursor: usize,
	/// Remaining delay before the next command runs
	pub delay: i32,
	/// Remaining repeats of the active loop, `None` when no loop is active
	pub repeat: Option<i32>,
	/// Index of the parent component
	pub parent: Option<usize>,
	/// Index of the raster being drawn
	pub raster: Option<usize>,
	/// Index of the palette override
	pub palette: Option<usize>,
	/// Position offset
	pub position: Vec3i,
	/// Euler rotation in degrees
	pub rotation: Vec3i,
	/// Scale percentages
	pub scale: Vec3i,
	/// Set when a backward `Goto` runs before any `Wait` has
	pub complete: bool,
	/// Sum of every `Wait` executed since the last reset
	pub waited: u32,
}

impl Default for AnimationState {
	fn default() -> Self {
		Self {
			cursor: 0,
			delay: 0,
			repeat: None,
			parent: None,
			raster: None,
			palette: None,
			position: Vec3i::default(),
			rotation: Vec3i::default(),
			scale: Vec3i::splat(DEFAULT_SCALE),
			complete: false,
			waited: 0,
		}
	}
}

impl AnimationState {
	/// Creates a state at the start of playback.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restores position, rotation and scale to their defaults.
	pub fn reset_pulse(&mut self) {
		self.position = Vec3i::default();
		self.rotation = Vec3i::default();
		self.scale = Vec3i::splat(DEFAULT_SCALE);
	}
}
