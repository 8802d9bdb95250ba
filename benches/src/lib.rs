//! Benchmark helper utilities for spranim
//!
//! This module provides generators for synthetic animation word streams used
//! by the benchmark suite. Real sprite animations are short (a few dozen
//! words), so the generators also produce streams far larger than any shipped
//! asset to expose scaling behavior.

/// Generates a frame-by-frame animation stream
///
/// Each frame selects a raster and waits two ticks; every fourth frame also
/// carries a position offset. The frames repeat `repeats` more times through a
/// `Loop` back to the start, then the stream jumps back to its start forever.
///
/// The stream is valid as long as it stays below 4096 words.
pub fn generate_frame_stream(frames: usize, repeats: i16) -> Vec<u16> {
	let mut words = Vec::new();

	for frame in 0..frames {
		// SetRaster (12-bit index)
		words.push(0x1000 | (frame as u16 & 0x07FF));

		if frame % 4 == 3 {
			// SetPosition (0, -2, 0)
			words.extend_from_slice(&[0x3000, 0x0000, 0xFFFE, 0x0000]);
		}

		// Wait 2
		words.push(0x0002);
	}

	// Loop Start
	words.extend_from_slice(&[0x7000, repeats as u16]);

	// Goto Start
	words.push(0x2000);

	words
}

/// Generates a stream of `blocks` forward jumps, each to its own label
///
/// Every block is `Goto <its own Wait>, Wait 2`, so each jump target needs a
/// label of its own. This is the worst case for label allocation and splicing.
pub fn generate_jump_stream(blocks: usize) -> Vec<u16> {
	let mut words = Vec::with_capacity(blocks * 2);
	for block in 0..blocks {
		let next = ((block * 2 + 1) as u16) & 0x0FFF;
		words.push(0x2000 | next);
		words.push(0x0002);
	}
	words
}

/// Common stream sizes for benchmarking, in frames
pub mod sizes {
	/// A typical single sprite component: 8 frames
	pub const TYPICAL: usize = 8;
	/// A long cutscene component: 64 frames
	pub const LONG: usize = 64;
	/// Near the 12-bit target limit: 640 frames
	pub const HUGE: usize = 640;
}

#[cfg(test)]
mod tests {
	use super::*;
	use spranim_types::anim::{LabelHints, assemble, disassemble};

	#[test]
	fn test_generate_frame_stream() {
		let words = generate_frame_stream(4, 3);

		// 4 rasters, 4 waits, one position, loop, goto
		assert_eq!(words.len(), 4 + 4 + 4 + 2 + 1);
		assert_eq!(&words[words.len() - 3..], &[0x7000, 0x0003, 0x2000]);

		let list = disassemble(&words, &LabelHints::new()).unwrap();
		assert_eq!(assemble(&list).unwrap().words, words);
	}

	#[test]
	fn test_generate_jump_stream() {
		let words = generate_jump_stream(16);
		let list = disassemble(&words, &LabelHints::new()).unwrap();

		// one label per block
		assert_eq!(list.labels().count(), 16);
		assert_eq!(assemble(&list).unwrap().words, words);
	}

	#[test]
	fn test_huge_stream_fits_targets() {
		assert!(generate_frame_stream(sizes::HUGE, 1).len() < 0x1000);
	}
}
