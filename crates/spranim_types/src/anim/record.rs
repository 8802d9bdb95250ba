//! Textual form of a command list.
//!
//! Each command becomes one [`CommandRecord`], tagged by its `type` field.
//! Labels and jump destinations are written by name. Raster, palette and
//! parent operands are written by name when the asset container has one, and
//! by index otherwise.
//!
//! ```json
//! [
//!   { "type": "Label", "name": "Start" },
//!   { "type": "SetRaster", "raster": "idle" },
//!   { "type": "Wait", "duration": 2 },
//!   { "type": "Goto", "destination": "Start" }
//! ]
//! ```

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{
	assets::{AssetKind, SpriteAssets},
	constants::NO_ASSET,
	instruction::ScaleMode,
	list::{Command, CommandList, LabelId},
};

/// Parent index written when a parent name cannot be resolved.
const UNRESOLVED_PARENT: u8 = 0xFF;

/// Reference to an asset, by index or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetRef {
	/// Asset index
	Index(i32),
	/// Asset name
	Name(String),
}

/// One command of a command list in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandRecord {
	/// Label marker
	Label {
		/// Label name
		name: String,
	},
	/// Pause
	Wait {
		/// Raw duration, `0` plays as 4095
		duration: u16,
	},
	/// Raster selection
	SetRaster {
		/// Raster, `None` draws nothing
		raster: Option<AssetRef>,
	},
	/// Palette override
	SetPalette {
		/// Palette, `None` restores the default palette
		palette: Option<AssetRef>,
	},
	/// Parent component
	SetParent {
		/// Parent component
		parent: AssetRef,
	},
	/// Unconditional jump
	Goto {
		/// Name of the destination label
		destination: String,
	},
	/// Counted repeat
	Loop {
		/// Name of the loop start label
		destination: String,
		/// Number of repeats
		count: i16,
	},
	/// Position offset
	SetPos {
		/// Opaque flag bit
		flag: bool,
		/// X offset
		x: i16,
		/// Y offset
		y: i16,
		/// Z offset
		z: i16,
	},
	/// Rotation
	SetRot {
		/// X angle
		x: i16,
		/// Y angle
		y: i16,
		/// Z angle
		z: i16,
	},
	/// Scale
	SetScale {
		/// Axis selection
		mode: ScaleMode,
		/// Percentage
		percent: i16,
	},
	/// Notification value
	SetNotify {
		/// Sub-operand byte
		value: u8,
	},
	/// Unknown extended command
	SetUnknown {
		/// Sub-operand byte
		value: u8,
	},
}

/// Writes a command list as records.
pub fn to_records<A: SpriteAssets + ?Sized>(list: &CommandList, assets: &A) -> Vec<CommandRecord> {
	let label = |id: LabelId| list.label_name(id).unwrap_or_default().to_string();
	let optional_asset = |kind: AssetKind, index: i16| {
		(index != NO_ASSET).then(|| asset_ref(assets, kind, index.into()))
	};

	list.iter()
		.map(|command| match *command {
			Command::Label(id) => CommandRecord::Label {
				name: label(id),
			},
			Command::Wait {
				count,
			} => CommandRecord::Wait {
				duration: count,
			},
			Command::SetRaster {
				index,
			} => CommandRecord::SetRaster {
				raster: optional_asset(AssetKind::Raster, index),
			},
			Command::SetPalette {
				index,
			} => CommandRecord::SetPalette {
				palette: optional_asset(AssetKind::Palette, index),
			},
			Command::SetParent {
				index,
			} => CommandRecord::SetParent {
				parent: asset_ref(assets, AssetKind::Component, index.into()),
			},
			Command::Goto {
				target,
			} => CommandRecord::Goto {
				destination: label(target),
			},
			Command::Loop {
				target,
				count,
			} => CommandRecord::Loop {
				destination: label(target),
				count,
			},
			Command::SetPosition {
				flag,
				x,
				y,
				z,
			} => CommandRecord::SetPos {
				flag,
				x,
				y,
				z,
			},
			Command::SetRotation {
				x,
				y,
				z,
			} => CommandRecord::SetRot {
				x,
				y,
				z,
			},
			Command::SetScale {
				mode,
				percent,
			} => CommandRecord::SetScale {
				mode,
				percent,
			},
			Command::SetNotify {
				value,
			} => CommandRecord::SetNotify {
				value,
			},
			Command::SetUnknown {
				value,
			} => CommandRecord::SetUnknown {
				value,
			},
		})
		.collect()
}

/// Builds a command list from records.
///
/// A destination that names no `Label` record produces a label that is not
/// placed in the list. Unknown raster and palette names become `-1`; an
/// unknown parent becomes component `0xFF`.
pub fn from_records<A: SpriteAssets + ?Sized>(records: &[CommandRecord], assets: &A) -> CommandList {
	let mut list = CommandList::new();
	let mut labels: HashMap<&str, LabelId> = HashMap::new();
	let mut markers = Vec::new();

	// the first label of a given name wins
	for record in records {
		if let CommandRecord::Label {
			name,
		} = record
		{
			let id = list.add_label(name.as_str());
			labels.entry(name.as_str()).or_insert(id);
			markers.push(id);
		}
	}

	let mut markers = markers.into_iter();
	for record in records {
		let command = match record {
			CommandRecord::Label {
				..
			} => match markers.next() {
				Some(id) => Command::Label(id),
				None => continue,
			},
			CommandRecord::Wait {
				duration,
			} => Command::Wait {
				count: *duration,
			},
			CommandRecord::SetRaster {
				raster,
			} => Command::SetRaster {
				index: optional_index(assets, AssetKind::Raster, raster.as_ref()),
			},
			CommandRecord::SetPalette {
				palette,
			} => Command::SetPalette {
				index: optional_index(assets, AssetKind::Palette, palette.as_ref()),
			},
			CommandRecord::SetParent {
				parent,
			} => Command::SetParent {
				index: resolve_ref(assets, AssetKind::Component, parent)
					.and_then(|index| u8::try_from(index).ok())
					.unwrap_or(UNRESOLVED_PARENT),
			},
			CommandRecord::Goto {
				destination,
			} => Command::Goto {
				target: destination_label(&mut list, &mut labels, destination),
			},
			CommandRecord::Loop {
				destination,
				count,
			} => Command::Loop {
				target: destination_label(&mut list, &mut labels, destination),
				count: *count,
			},
			CommandRecord::SetPos {
				flag,
				x,
				y,
				z,
			} => Command::SetPosition {
				flag: *flag,
				x: *x,
				y: *y,
				z: *z,
			},
			CommandRecord::SetRot {
				x,
				y,
				z,
			} => Command::SetRotation {
				x: *x,
				y: *y,
				z: *z,
			},
			CommandRecord::SetScale {
				mode,
				percent,
			} => Command::SetScale {
				mode: *mode,
				percent: *percent,
			},
			CommandRecord::SetNotify {
				value,
			} => Command::SetNotify {
				value: *value,
			},
			CommandRecord::SetUnknown {
				value,
			} => Command::SetUnknown {
				value: *value,
			},
		};
		list.push_silent(command);
	}

	list
}

fn asset_ref<A: SpriteAssets + ?Sized>(assets: &A, kind: AssetKind, index: i32) -> AssetRef {
	assets
		.resolve(kind, index)
		.and_then(|resolved| assets.name(kind, resolved))
		.map_or(AssetRef::Index(index), |name| AssetRef::Name(name.to_string()))
}

fn resolve_ref<A: SpriteAssets + ?Sized>(assets: &A, kind: AssetKind, asset: &AssetRef) -> Option<i32> {
	match asset {
		AssetRef::Index(index) => Some(*index),
		AssetRef::Name(name) => {
			let found = assets.find(kind, name).and_then(|index| i32::try_from(index).ok());
			if found.is_none() {
				warn!("Unknown {kind:?} name {name:?}");
			}
			found
		}
	}
}

fn optional_index<A: SpriteAssets + ?Sized>(assets: &A, kind: AssetKind, asset: Option<&AssetRef>) -> i16 {
	asset
		.and_then(|asset| resolve_ref(assets, kind, asset))
		.and_then(|index| i16::try_from(index).ok())
		.unwrap_or(NO_ASSET)
}

fn destination_label<'r>(
	list: &mut CommandList,
	labels: &mut HashMap<&'r str, LabelId>,
	destination: &'r str,
) -> LabelId {
	*labels.entry(destination).or_insert_with(|| {
		warn!("Destination {destination:?} names no label");
		list.add_label(destination)
	})
}
