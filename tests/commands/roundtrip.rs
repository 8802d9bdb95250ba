use spranim::prelude::*;

use crate::{WALK_CYCLE, walk_cycle};

#[test_log::test]
fn test_walk_cycle_labels() {
	let list = walk_cycle();
	let names: Vec<_> = list.labels().filter_map(|id| list.label_name(id)).collect();
	assert_eq!(names, ["Start", "Pos_E"]);
	assert_eq!(list.word_len(), WALK_CYCLE.len());
}

#[test_log::test]
fn test_walk_cycle_reassembles() {
	let assembled = assemble(&walk_cycle()).unwrap();
	assert_eq!(assembled.words, WALK_CYCLE);
	assert_eq!(assembled.label_hints.get(&0xE).map(String::as_str), Some("Pos_E"));
}

#[test_log::test]
fn test_renamed_label_survives_reload() {
	let mut list = walk_cycle();
	let idle = list.label_by_name("Pos_E").unwrap();
	assert!(list.rename_label(idle, "Idle"));

	let assembled = assemble(&list).unwrap();
	assert_eq!(assembled.words, WALK_CYCLE);

	let reloaded = disassemble(&assembled.words, &assembled.label_hints).unwrap();
	assert!(reloaded.label_by_name("Idle").is_some());
	assert!(reloaded.label_by_name("Pos_E").is_none());
	assert_eq!(reloaded.describe(reloaded.len() - 1).as_deref(), Some("Goto: Idle"));
}

#[test_log::test]
fn test_mid_instruction_target_roundtrips() {
	// SetPosition (1,2,3), Goto 2 lands on the second extra word
	let words = [0x3000, 0x0001, 0x0002, 0x0003, 0x2002];
	let list = disassemble(&words, &LabelHints::new()).unwrap();
	let escaped = list.label_by_name("#2").unwrap();
	assert_eq!(list.find_label(escaped), Some(1));
	assert_eq!(assemble(&list).unwrap().words, words);
}

#[test_log::test]
fn test_malformed_streams_are_rejected() {
	let err = disassemble(&[0x0002, 0x9000], &LabelHints::new()).unwrap_err();
	assert!(matches!(
		err,
		AnimError::MalformedStream {
			offset: 1,
			reason: MalformedReason::UnknownOpcode(0x9000),
		}
	));

	let err = disassemble(&[0x0002, 0x7000], &LabelHints::new()).unwrap_err();
	assert!(matches!(
		err,
		AnimError::MalformedStream {
			offset: 1,
			reason: MalformedReason::Truncated {
				needed: 2,
				available: 1,
			},
		}
	));
}

#[test_log::test]
fn test_out_of_range_operand_is_reported() {
	let mut list = CommandList::new();
	list.push(Command::SetRaster {
		index: 3000,
	});
	let err = assemble(&list).unwrap_err();
	assert!(matches!(
		err,
		AnimError::OperandOutOfRange {
			value: 3000,
			..
		}
	));
}
