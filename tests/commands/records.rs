use spranim::prelude::*;

use crate::{WALK_CYCLE, walk_assets, walk_cycle};

#[test_log::test]
fn test_json_roundtrip_through_names() {
	let assets = walk_assets();
	let json = serde_json::to_string_pretty(&to_records(&walk_cycle(), &assets)).unwrap();
	assert!(json.contains(r#""raster": "walk_3""#));
	assert!(json.contains(r#""destination": "Pos_E""#));

	let records: Vec<CommandRecord> = serde_json::from_str(&json).unwrap();
	let list = from_records(&records, &assets);
	assert_eq!(assemble(&list).unwrap().words, WALK_CYCLE);
}

#[test_log::test]
fn test_hand_written_records() {
	let json = r#"[
		{ "type": "Label", "name": "Idle" },
		{ "type": "SetRaster", "raster": "walk_2" },
		{ "type": "SetPalette", "palette": null },
		{ "type": "SetParent", "parent": "shadow" },
		{ "type": "SetRot", "x": 0, "y": 0, "z": 45 },
		{ "type": "Wait", "duration": 6 },
		{ "type": "Loop", "destination": "Idle", "count": 2 },
		{ "type": "SetNotify", "value": 7 }
	]"#;
	let records: Vec<CommandRecord> = serde_json::from_str(json).unwrap();
	let assets = walk_assets();
	let list = from_records(&records, &assets);

	assert!(list.validate(&assets, Some(0)).is_empty());
	assert_eq!(
		assemble(&list).unwrap().words,
		vec![0x1002, 0x6FFF, 0x8101, 0x4000, 0x0000, 0x002D, 0x0006, 0x7000, 0x0002, 0x8207]
	);
}

#[test_log::test]
fn test_dangling_references_are_diagnosed() {
	let json = r#"[
		{ "type": "SetRaster", "raster": "run_0" },
		{ "type": "SetParent", "parent": "body" },
		{ "type": "Wait", "duration": 0 },
		{ "type": "Goto", "destination": "Nowhere" }
	]"#;
	let records: Vec<CommandRecord> = serde_json::from_str(json).unwrap();
	let assets = walk_assets();
	let list = from_records(&records, &assets);

	let diagnostics = list.validate(&assets, Some(0));
	let kinds: Vec<_> = diagnostics.iter().map(|d| (d.index, d.kind.clone())).collect();
	assert_eq!(
		kinds,
		vec![
			(1, DiagnosticKind::SelfParent),
			(2, DiagnosticKind::ZeroWait),
			(3, DiagnosticKind::MissingLabel("Nowhere".to_string())),
		]
	);
	// an unknown raster name was already turned into "draw nothing"
	assert_eq!(list.describe(0).as_deref(), Some("Clear Raster"));
	assert!(matches!(assemble(&list), Err(AnimError::UnresolvedLabel { .. })));

	let diagnostics_json = serde_json::to_value(&diagnostics).unwrap();
	assert_eq!(diagnostics_json[0]["severity"], "Error");
	assert_eq!(diagnostics_json[1]["kind"], "ZeroWait");
}
