//! Conversion between command lists and keyframe timelines.
//!
//! Timeline editors work on keyframes rather than commands. This crate does
//! not ship a converter; implementors pick their own keyframe type.

use super::list::CommandList;

/// Two-way conversion between a command list and a keyframe timeline.
pub trait KeyframeConverter {
	/// Keyframe representation used by the timeline
	type Keyframe;

	/// Builds a timeline from a command list.
	fn to_keyframes(&self, list: &CommandList) -> Vec<Self::Keyframe>;

	/// Builds a command list from a timeline.
	fn from_keyframes(&self, keyframes: &[Self::Keyframe]) -> CommandList;
}
