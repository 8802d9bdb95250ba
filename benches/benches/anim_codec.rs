//! Benchmark suite for animation bytecode
//!
//! This benchmark measures disassembly, assembly, interpreter stepping and
//! timing analysis over synthetic word streams.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spranim_benches::{generate_frame_stream, generate_jump_stream, sizes};
use spranim_types::anim::{
	Interpreter, LabelHints, PlaybackConfig, SpriteInventory, TimingConfig, analyze_timing,
	assemble, disassemble,
};
use std::hint::black_box;

/// Benchmark word stream to command list
fn bench_disassemble(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_disassemble");
	let hints = LabelHints::new();

	for (name, frames) in [("typical", sizes::TYPICAL), ("long", sizes::LONG), ("huge", sizes::HUGE)] {
		let words = generate_frame_stream(frames, 3);
		group.throughput(Throughput::Elements(words.len() as u64));
		group.bench_with_input(BenchmarkId::new("frames", name), &words, |b, words| {
			b.iter(|| black_box(disassemble(black_box(words), &hints)));
		});
	}

	// every instruction pair needs its own label
	let words = generate_jump_stream(1024);
	group.throughput(Throughput::Elements(words.len() as u64));
	group.bench_with_input(BenchmarkId::new("jumps", 1024), &words, |b, words| {
		b.iter(|| black_box(disassemble(black_box(words), &hints)));
	});

	group.finish();
}

/// Benchmark command list to word stream
fn bench_assemble(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_assemble");

	for (name, words) in [
		("frames_huge", generate_frame_stream(sizes::HUGE, 3)),
		("jumps", generate_jump_stream(1024)),
	] {
		let list = disassemble(&words, &LabelHints::new()).unwrap();
		group.throughput(Throughput::Elements(words.len() as u64));
		group.bench_with_input(BenchmarkId::new("assemble", name), &list, |b, list| {
			b.iter(|| black_box(assemble(black_box(list))));
		});
	}

	group.finish();
}

/// Benchmark interpreter ticks
fn bench_step(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_step");
	let assets = SpriteInventory::with_counts(2048, 0, 1);
	let list = disassemble(&generate_frame_stream(sizes::LONG, 3), &LabelHints::new()).unwrap();

	group.throughput(Throughput::Elements(1000));
	group.bench_function("1000_ticks", |b| {
		b.iter(|| {
			let mut player = Interpreter::new(&list, &assets, PlaybackConfig::default());
			for _ in 0..1000 {
				black_box(player.step());
			}
			black_box(player.state().waited)
		});
	});

	group.finish();
}

/// Benchmark static timing analysis
fn bench_timing(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_timing");
	let config = TimingConfig::new(usize::MAX);

	for (name, frames) in [("typical", sizes::TYPICAL), ("huge", sizes::HUGE)] {
		let list = disassemble(&generate_frame_stream(frames, 3), &LabelHints::new()).unwrap();
		group.bench_with_input(BenchmarkId::new("analyze", name), &list, |b, list| {
			b.iter(|| black_box(analyze_timing(black_box(list), &config)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_disassemble, bench_assemble, bench_step, bench_timing);

criterion_main!(benches);
