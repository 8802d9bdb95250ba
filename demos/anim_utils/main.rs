//! Animation bytecode utility.
//!
//! Provides five subcommands:
//! - `disasm`: list the commands of a word stream with offsets, timing and
//!   diagnostics.
//! - `export`: write a word stream as JSON records.
//! - `asm`: assemble a JSON record file into a word stream and label hints.
//! - `timing`: print the elapsed-time annotations of a word stream.
//! - `play`: run the interpreter and print one JSON state per tick.
//!
//! Word streams are given as big-endian hex, e.g. `"1000 0002 2000"`.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use spranim::prelude::*;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let settings = load_settings(cli.config.as_deref())?;
	match cli.command {
		Command::Disasm(opts) => run_disasm(opts, &settings),
		Command::Export(opts) => run_export(opts),
		Command::Asm(opts) => run_asm(opts),
		Command::Timing(opts) => run_timing(opts, &settings),
		Command::Play(opts) => run_play(opts, &settings),
	}
}

#[derive(Parser)]
#[command(name = "anim_utils")]
#[command(author = "spranim project")]
#[command(version)]
#[command(about = "Disassemble, assemble, time and play sprite animation bytecode", long_about = None)]
struct Cli {
	/// TOML file with `[playback]` and `[timing]` settings
	#[arg(short, long, global = true, value_name = "FILE", env = "SPRANIM_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// List the commands of a word stream
	Disasm(DisasmArgs),
	/// Write a word stream as JSON records
	Export(ExportArgs),
	/// Assemble a JSON record file
	Asm(AsmArgs),
	/// Print timing annotations of a word stream
	Timing(TimingArgs),
	/// Play a word stream tick by tick
	Play(PlayArgs),
}

#[derive(Args)]
struct StreamArgs {
	/// Big-endian hex words, whitespace allowed
	#[arg(value_name = "WORDS")]
	words: String,

	/// JSON file mapping word offsets to label names
	#[arg(long, value_name = "FILE")]
	hints: Option<PathBuf>,
}

#[derive(Args)]
struct AssetArgs {
	/// JSON file listing raster, palette and component names
	#[arg(short, long, value_name = "FILE")]
	assets: Option<PathBuf>,
}

#[derive(Args)]
struct DisasmArgs {
	#[command(flatten)]
	stream: StreamArgs,

	#[command(flatten)]
	assets: AssetArgs,

	/// Index of the component that owns the stream, for parent checks
	#[arg(long, value_name = "INDEX")]
	owner: Option<usize>,
}

#[derive(Args)]
struct ExportArgs {
	#[command(flatten)]
	stream: StreamArgs,

	#[command(flatten)]
	assets: AssetArgs,
}

#[derive(Args)]
struct AsmArgs {
	/// JSON record file
	#[arg(value_name = "FILE")]
	records: PathBuf,

	#[command(flatten)]
	assets: AssetArgs,

	/// Write label hints to this file
	#[arg(long, value_name = "FILE")]
	hints_out: Option<PathBuf>,
}

#[derive(Args)]
struct TimingArgs {
	#[command(flatten)]
	stream: StreamArgs,

	/// Maximum walk steps, overrides the config file
	#[arg(long, value_name = "COUNT")]
	max_iterations: Option<usize>,
}

#[derive(Args)]
struct PlayArgs {
	#[command(flatten)]
	stream: StreamArgs,

	#[command(flatten)]
	assets: AssetArgs,

	/// Number of ticks to run
	#[arg(short, long, value_name = "COUNT", default_value_t = 16)]
	steps: usize,

	/// Apply Y-axis scaling to the Y axis only
	#[arg(long, default_value_t = false)]
	corrected_scale: bool,
}

/// Settings file contents.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
	playback: PlaybackConfig,
	timing: TimingConfig,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
	let Some(path) = path else {
		return Ok(Settings::default());
	};
	let settings = config::Config::builder()
		.add_source(config::File::from(path).format(config::FileFormat::Toml))
		.add_source(config::Environment::with_prefix("SPRANIM").separator("__"))
		.build()
		.with_context(|| format!("Failed to load {}", path.display()))?;
	let settings: Settings =
		settings.try_deserialize().with_context(|| format!("Invalid settings in {}", path.display()))?;
	check_settings(&settings).with_context(|| format!("Invalid settings in {}", path.display()))?;
	Ok(settings)
}

fn check_settings(settings: &Settings) -> Result<()> {
	if settings.playback.ticks_per_step <= 0 {
		bail!("ticks_per_step must be greater than zero, got {}", settings.playback.ticks_per_step);
	}
	if settings.playback.max_iterations == 0 || settings.timing.max_iterations == 0 {
		bail!("max_iterations must be greater than zero");
	}
	Ok(())
}

fn parse_words(text: &str) -> Result<Vec<u16>> {
	let digits: String = text.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();
	if digits.len() % 4 != 0 {
		bail!("Word stream must have four hex digits per word, got {} digits", digits.len());
	}
	let bytes = hex::decode(&digits).context("Word stream is not valid hex")?;
	Ok(bytes.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]])).collect())
}

fn format_words(words: &[u16]) -> String {
	words.iter().map(|word| hex::encode_upper(word.to_be_bytes())).collect::<Vec<_>>().join(" ")
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
	let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_stream(args: &StreamArgs) -> Result<CommandList> {
	let words = parse_words(&args.words)?;
	let hints: LabelHints = match &args.hints {
		Some(path) => read_json(path)?,
		None => LabelHints::new(),
	};
	disassemble(&words, &hints).context("Failed to disassemble word stream")
}

fn load_assets(args: &AssetArgs) -> Result<SpriteInventory> {
	match &args.assets {
		Some(path) => read_json(path),
		None => Ok(SpriteInventory::new()),
	}
}

fn run_disasm(args: DisasmArgs, settings: &Settings) -> Result<()> {
	let list = load_stream(&args.stream)?;
	let assets = load_assets(&args.assets)?;
	let report = analyze_timing(&list, &settings.timing);
	let diagnostics = list.validate(&assets, args.owner);

	println!("Commands: {} | words: {}", list.len(), list.word_len());
	for index in 0..list.len() {
		let offset = list.word_offset(index).unwrap_or_default();
		let time = report.time_of(index).map(|time| format!("t={time}")).unwrap_or_default();
		let text = list.describe(index).unwrap_or_default();
		println!("  {index:3} @{offset:04X}  {text:<32} {time}");
		for diagnostic in diagnostics.iter().filter(|d| d.index == index) {
			println!("        [{:?}] {}", diagnostic.severity, diagnostic.kind);
		}
	}
	println!("Timing: total {} ({:?})", report.total, report.termination);

	if diagnostics.iter().any(|d| d.severity == Severity::Error) {
		bail!("Stream has {} problem(s)", diagnostics.len());
	}
	Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
	let list = load_stream(&args.stream)?;
	let assets = load_assets(&args.assets)?;
	println!("{}", serde_json::to_string_pretty(&to_records(&list, &assets))?);
	Ok(())
}

fn run_asm(args: AsmArgs) -> Result<()> {
	let records: Vec<CommandRecord> = read_json(&args.records)?;
	let assets = load_assets(&args.assets)?;
	let list = from_records(&records, &assets);
	let assembled = assemble(&list).with_context(|| format!("Failed to assemble {}", args.records.display()))?;

	println!("{}", format_words(&assembled.words));
	let hints = serde_json::to_string_pretty(&assembled.label_hints)?;
	match args.hints_out {
		Some(path) => {
			fs::write(&path, hints).with_context(|| format!("Failed to write {}", path.display()))?;
		}
		None => println!("{hints}"),
	}
	Ok(())
}

fn run_timing(args: TimingArgs, settings: &Settings) -> Result<()> {
	let list = load_stream(&args.stream)?;
	let config = match args.max_iterations {
		Some(0) => bail!("max-iterations must be greater than zero"),
		Some(max_iterations) => TimingConfig::new(max_iterations),
		None => settings.timing,
	};
	println!("{}", serde_json::to_string_pretty(&analyze_timing(&list, &config))?);
	Ok(())
}

fn run_play(args: PlayArgs, settings: &Settings) -> Result<()> {
	let list = load_stream(&args.stream)?;
	let assets = load_assets(&args.assets)?;
	let mut config = settings.playback;
	if args.corrected_scale {
		config.legacy_scale_fallthrough = false;
	}

	let mut player = Interpreter::new(&list, &assets, config);
	for tick in 0..args.steps {
		let outcome = player.step();
		println!("{tick:4} {outcome:?} {}", serde_json::to_string(player.state())?);
		if outcome == StepOutcome::Ended {
			break;
		}
	}
	Ok(())
}
