//! Lookup of the rasters, palettes and sibling components an animation refers to.
//!
//! The containers that own these assets live outside this crate. Commands only
//! carry indices; [`SpriteAssets`] is how the interpreter, the validator and
//! the record converter resolve them.

use serde::{Deserialize, Serialize};

/// Kind of asset an instruction operand refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssetKind {
	/// Sprite raster (image)
	Raster,
	/// Sprite palette
	Palette,
	/// Sibling component within the same animation
	Component,
}

/// Read-only view of the assets reachable from one animation component.
pub trait SpriteAssets {
	/// Number of assets of the given kind.
	fn count(&self, kind: AssetKind) -> usize;

	/// Display name of an asset, when the container has one.
	fn name(&self, kind: AssetKind, index: usize) -> Option<&str> {
		let _ = (kind, index);
		None
	}

	/// Finds an asset index by name.
	fn find(&self, kind: AssetKind, name: &str) -> Option<usize> {
		(0..self.count(kind)).find(|&index| self.name(kind, index) == Some(name))
	}

	/// Resolves an operand to an asset index, `None` when it is negative or out of range.
	fn resolve(&self, kind: AssetKind, index: i32) -> Option<usize> {
		usize::try_from(index).ok().filter(|&index| index < self.count(kind))
	}
}

/// Plain asset container listing names only.
///
/// # Examples
///
/// ```
/// use spranim_types::anim::{AssetKind, SpriteAssets, SpriteInventory};
///
/// let assets = SpriteInventory::with_counts(3, 1, 2);
/// assert_eq!(assets.count(AssetKind::Raster), 3);
/// assert_eq!(assets.resolve(AssetKind::Palette, 1), None);
/// assert_eq!(assets.find(AssetKind::Component, "Comp_1"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteInventory {
	/// Raster names, by index
	pub rasters: Vec<String>,
	/// Palette names, by index
	pub palettes: Vec<String>,
	/// Component names, by index
	pub components: Vec<String>,
}

impl SpriteInventory {
	/// Creates an empty inventory.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an inventory with generated names (`Raster_0`, `Pal_0`, `Comp_0`, ...).
	pub fn with_counts(rasters: usize, palettes: usize, components: usize) -> Self {
		Self {
			rasters: (0..rasters).map(|i| format!("Raster_{i}")).collect(),
			palettes: (0..palettes).map(|i| format!("Pal_{i}")).collect(),
			components: (0..components).map(|i| format!("Comp_{i}")).collect(),
		}
	}

	fn names(&self, kind: AssetKind) -> &[String] {
		match kind {
			AssetKind::Raster => &self.rasters,
			AssetKind::Palette => &self.palettes,
			AssetKind::Component => &self.components,
		}
	}
}

impl SpriteAssets for SpriteInventory {
	fn count(&self, kind: AssetKind) -> usize {
		self.names(kind).len()
	}

	fn name(&self, kind: AssetKind, index: usize) -> Option<&str> {
		self.names(kind).get(index).map(String::as_str)
	}
}
