//! Command list tests for `spranim`

mod playback;
mod records;
mod roundtrip;

use spranim::prelude::*;

/// A walk cycle: four frames shown for two ticks each, bobbing on the second
/// and fourth, repeated twice before an idle frame that loops forever.
pub(crate) const WALK_CYCLE: [u16; 17] = [
	0x1000, 0x0002, // Start: SetRaster 0, Wait 2
	0x1001, 0x3000, 0x0000, 0xFFFE, 0x0000, 0x0002, // SetRaster 1, SetPosition (0,-2,0), Wait 2
	0x1002, 0x0002, // SetRaster 2, Wait 2
	0x1003, 0x0002, // SetRaster 3, Wait 2
	0x7000, 0x0001, // Loop Start (x1)
	0x1000, 0x0004, // Pos_E: SetRaster 0, Wait 4
	0x200E, // Goto Pos_E
];

pub(crate) fn walk_assets() -> SpriteInventory {
	SpriteInventory {
		rasters: vec!["walk_0".into(), "walk_1".into(), "walk_2".into(), "walk_3".into()],
		palettes: vec!["night".into()],
		components: vec!["body".into(), "shadow".into()],
	}
}

pub(crate) fn walk_cycle() -> CommandList {
	disassemble(&WALK_CYCLE, &LabelHints::new()).unwrap()
}
