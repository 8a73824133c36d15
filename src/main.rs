use clap::Parser;
use save_sweeper::{
	profile_for, DiagnosticsSink, EnvKnownFolders, InstallInfo, KnownFolders, NullDiagnostics,
	PathResolver, RelocationMode, RunLogDiagnostics, SweepOrchestrator, SweepTrigger,
	SweeperConfig, SweeperError, TracingNotifications,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

/// Data directory name of the host package manager whose staging this tool
/// sweeps.
const HOST_NAME: &str = "Vortex";

#[derive(Parser)]
#[command(name = "save-sweeper")]
#[command(
	about = "Moves game save files out of extracted mod packages into the game's save directory"
)]
struct Cli {
	/// Sweep a single game instead of every registered one
	#[arg(short, long)]
	game: Option<String>,

	/// Treat this folder as a freshly installed mod (requires --game)
	#[arg(long, requires = "game")]
	mod_path: Option<PathBuf>,

	/// Copy saves instead of moving them
	#[arg(long)]
	copy: bool,

	/// Write a run report to the diagnostics log
	#[arg(short, long)]
	diagnostics: bool,

	/// Print the sweep report as JSON
	#[arg(long)]
	json: bool,

	/// Enable verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Initialize tracing
	let level = if cli.verbose {
		Level::DEBUG
	} else {
		Level::INFO
	};
	tracing_subscriber::fmt().with_max_level(level).init();

	let config = SweeperConfig {
		mode: if cli.copy {
			RelocationMode::Copy
		} else {
			RelocationMode::Cut
		},
		diagnostics: cli.diagnostics,
		..Default::default()
	};
	config.validate()?;

	let folders: Arc<dyn KnownFolders> = Arc::new(EnvKnownFolders::for_host(HOST_NAME));
	let resolver = PathResolver::new(folders);
	let diagnostics: Arc<dyn DiagnosticsSink> = if cli.diagnostics {
		Arc::new(RunLogDiagnostics::under_documents(&resolver.documents_root()))
	} else {
		Arc::new(NullDiagnostics)
	};
	let orchestrator = SweepOrchestrator::new(
		config,
		resolver,
		Arc::new(TracingNotifications),
		diagnostics,
	);

	let report = match cli.game.as_deref() {
		Some(game) => {
			let profile = profile_for(game).ok_or_else(|| SweeperError::UnknownGame {
				game_id: game.to_string(),
			})?;
			match cli.mod_path {
				Some(mod_path) => {
					info!("Simulating install event for {} at {:?}", profile.id, mod_path);
					orchestrator
						.on_mod_installed(profile.id, InstallInfo::with_path(mod_path))
						.await
				}
				None => orchestrator.sweep_game(profile.id, SweepTrigger::Manual).await,
			}
		}
		None => orchestrator.sweep_all(SweepTrigger::Manual).await,
	};

	if cli.json {
		println!("{}", report.to_json()?);
	} else {
		info!("Moved {} save file(s)", report.moved);
	}

	Ok(())
}
