//! Playback and timing configuration.
//!
//! This module provides configuration options for the interpreter and the
//! timing analyzer, controlling loop caps and compatibility behavior.

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_TICKS_PER_STEP};

/// Configuration for the frame-stepping interpreter.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::PlaybackConfig;
///
/// // Use default configuration
/// let config = PlaybackConfig::default();
/// assert_eq!(config.max_iterations, 1024);
/// assert!(config.legacy_scale_fallthrough);
///
/// // Fix the Y-axis scale overwriting Z
/// let config = PlaybackConfig::corrected();
/// assert!(!config.legacy_scale_fallthrough);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
	/// Maximum number of commands executed in a single tick before giving up on it
	pub max_iterations: usize,
	/// Amount the pending delay shrinks by on each tick
	pub ticks_per_step: i32,
	/// When set, a Y-axis `SetScale` also writes the Z axis, as the game runtime does
	pub legacy_scale_fallthrough: bool,
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self {
			max_iterations: DEFAULT_MAX_ITERATIONS,
			ticks_per_step: DEFAULT_TICKS_PER_STEP,
			legacy_scale_fallthrough: true,
		}
	}
}

impl PlaybackConfig {
	/// Create a new playback configuration with custom limits.
	///
	/// # Arguments
	/// * `max_iterations` - Per-tick command limit
	/// * `ticks_per_step` - Delay decrement per tick
	pub fn new(max_iterations: usize, ticks_per_step: i32) -> Self {
		Self {
			max_iterations,
			ticks_per_step,
			..Self::default()
		}
	}

	/// Default limits with per-axis scaling applied to the selected axis only.
	pub fn corrected() -> Self {
		Self {
			legacy_scale_fallthrough: false,
			..Self::default()
		}
	}
}

/// Configuration for the static timing analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
	/// Maximum number of walk steps before the analysis stops
	pub max_iterations: usize,
}

impl Default for TimingConfig {
	fn default() -> Self {
		Self {
			max_iterations: DEFAULT_MAX_ITERATIONS,
		}
	}
}

impl TimingConfig {
	/// Create a timing configuration with a custom walk limit.
	pub fn new(max_iterations: usize) -> Self {
		Self {
			max_iterations,
		}
	}
}
