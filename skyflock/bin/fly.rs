use anyhow::Result;
use clap::Parser;
use skyflock::internal::*;

/// Fly with the flamingos.
#[derive(Parser)]
struct FlyFlags {
	/// Path to alternative `settings.toml` file
	#[arg(long, default_value = "settings.toml")]
	settings: String,

	/// Force fullscreen (overrides settings.toml).
	#[arg(long)]
	fullscreen: bool,

	/// Override the number of birds.
	#[arg(short, long)]
	birds: Option<u32>,

	/// Override the shared flight speed (world units per second).
	#[arg(long)]
	speed: Option<f32>,

	/// Override the flock placement seed (0: seed from entropy).
	#[arg(long)]
	seed: Option<u64>,
}

fn main() {
	env_logger::init();
	let args = FlyFlags::parse();

	exit_on_error(main_result(args));
}

fn main_result(args: FlyFlags) -> Result<()> {
	// A missing or broken settings.toml is not fatal: the built-in defaults
	// reproduce the intended scene.
	let settings = load_settings(&args.settings).unwrap_or_else(|e| {
		warn!("{e:#}, using default settings");
		Settings::default()
	});

	let settings = settings.with(|s| override_settings(s, args));
	Shell::main_loop(settings.graphics.clone(), move |ctx| FlockApp::new(ctx, settings))
}

fn load_settings(file: &str) -> Result<Settings> {
	let assets = AssetsDir::find()?;
	load_toml(&assets.settings_file(file)?)
}

fn override_settings(settings: &mut Settings, flags: FlyFlags) {
	if flags.fullscreen {
		settings.graphics.fullscreen = true;
	}
	if let Some(birds) = flags.birds {
		settings.flock.count = birds;
	}
	if let Some(speed) = flags.speed {
		settings.flock.speed = speed;
	}
	if let Some(seed) = flags.seed {
		settings.flock.seed = seed;
	}
}

fn exit_on_error(result: Result<()>) {
	if let Err(e) = result {
		eprintln!("Error: {e:#}");
		std::process::exit(1);
	}
}
