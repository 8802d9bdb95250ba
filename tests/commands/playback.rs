use spranim::prelude::*;

use crate::{walk_assets, walk_cycle};

#[test_log::test]
fn test_walk_cycle_playback() {
	let list = walk_cycle();
	let assets = walk_assets();
	let mut player = Interpreter::new(&list, &assets, PlaybackConfig::default());

	// a two-tick wait expires on the very next step
	let mut frames = Vec::new();
	for _ in 0..8 {
		assert_eq!(player.step(), StepOutcome::Blocked);
		frames.push((player.state().raster, player.state().position));
	}
	let bob = Vec3i::new(0, -2, 0);
	let still = Vec3i::default();
	assert_eq!(
		frames,
		[
			(Some(0), still),
			(Some(1), bob),
			(Some(2), still),
			(Some(3), still),
			(Some(0), still),
			(Some(1), bob),
			(Some(2), still),
			(Some(3), still),
		]
	);

	// loop exhausted: idle frame for four ticks, forever
	assert_eq!(player.step(), StepOutcome::Blocked);
	assert_eq!(player.state().raster, Some(0));
	assert_eq!(player.state().waited, 20);
	assert_eq!(player.step(), StepOutcome::Waiting);
	assert_eq!(player.step(), StepOutcome::Blocked);
	assert_eq!(player.state().waited, 24);
	assert!(!player.is_complete());
}

#[test_log::test]
fn test_walk_cycle_timing() {
	let list = walk_cycle();
	let report = analyze_timing(&list, &TimingConfig::default());

	// last pass through the looped region starts at tick 8
	assert_eq!(report.time_of(2), Some(8));
	assert_eq!(report.time_of(13), Some(16));
	assert_eq!(report.time_of(14), Some(20));
	assert_eq!(report.total, 20);
	assert_eq!(report.termination, Termination::SteadyState);
}

#[test_log::test]
fn test_parent_and_palette_persist_across_ticks() {
	// SetParent 1, SetPalette 0, Wait 2, SetScale Y 50%, Wait 2
	let words = [0x8101, 0x6000, 0x0002, 0x5002, 0x0032, 0x0002];
	let list = disassemble(&words, &LabelHints::new()).unwrap();
	let assets = walk_assets();
	let mut player = Interpreter::new(&list, &assets, PlaybackConfig::default());

	player.step();
	assert_eq!(player.state().parent, Some(1));
	assert_eq!(player.state().palette, Some(0));

	player.step();
	assert_eq!(player.state().parent, Some(1));
	assert_eq!(player.state().palette, Some(0));
	assert_eq!(player.state().scale, Vec3i::new(100, 50, 50));
}

#[test_log::test]
fn test_config_loaded_from_toml() {
	let settings = config::Config::builder()
		.add_source(config::File::from_str(
			"legacy_scale_fallthrough = false\nticks_per_step = 1",
			config::FileFormat::Toml,
		))
		.build()
		.unwrap();
	let playback: PlaybackConfig = settings.try_deserialize().unwrap();
	assert_eq!(playback.max_iterations, 1024);
	assert_eq!(playback.ticks_per_step, 1);
	assert!(!playback.legacy_scale_fallthrough);

	// SetScale Y 50%, Wait 2
	let list = disassemble(&[0x5002, 0x0032, 0x0002], &LabelHints::new()).unwrap();
	let assets = walk_assets();
	let mut player = Interpreter::new(&list, &assets, playback);
	player.step();
	assert_eq!(player.state().scale, Vec3i::new(100, 50, 100));
	// one tick per step: the two-tick wait takes two steps to expire
	assert_eq!(player.step(), StepOutcome::Waiting);
	assert_eq!(player.step(), StepOutcome::Ended);
}

#[test_log::test]
fn test_interpreter_holds_list_read_only() {
	let mut list = walk_cycle();
	{
		let assets = walk_assets();
		let mut player = Interpreter::new(&list, &assets, PlaybackConfig::default());
		player.step();
		assert!(player.surpassed(2));
		player.reset();
		assert_eq!(player.cursor(), 0);
	}
	// editing is possible again once playback is dropped
	list.remove(0);
	assert_eq!(list.len(), 14);
}
