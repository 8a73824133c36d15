use crate::discovery;
use crate::events::{InstallInfo, SweepTrigger};
use crate::games::{self, GameProfile};
use crate::host::{DiagnosticsSink, NotificationKind, NotificationSink};
use crate::paths::PathResolver;
use crate::relocate;
use crate::sweep::config::SweeperConfig;
use crate::sweep::report::SweepReport;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

/// Runs discovery and relocation across the staging roots of every registered
/// game.
///
/// Stateless across invocations; overlapping sweeps from independent triggers
/// are allowed and resolve as last-write-wins at the destination. Entry
/// points never propagate errors across the host boundary: failures go to the
/// diagnostics sink and into the returned report.
pub struct SweepOrchestrator {
	config: SweeperConfig,
	resolver: PathResolver,
	notifications: Arc<dyn NotificationSink>,
	diagnostics: Arc<dyn DiagnosticsSink>,
}

impl SweepOrchestrator {
	pub fn new(
		config: SweeperConfig, resolver: PathResolver, notifications: Arc<dyn NotificationSink>,
		diagnostics: Arc<dyn DiagnosticsSink>,
	) -> Self {
		Self {
			config,
			resolver,
			notifications,
			diagnostics,
		}
	}

	/// Host entry point: sweep every registered game shortly after startup.
	pub async fn run_startup_sweep(&self) -> SweepReport {
		tokio::time::sleep(self.config.startup_delay).await;
		self.sweep_all(SweepTrigger::Startup).await
	}

	/// Host entry point: react to one "mod installed" signal.
	pub async fn on_mod_installed(&self, game_id: &str, info: InstallInfo) -> SweepReport {
		let mut report = SweepReport::new(SweepTrigger::Install);
		self.handle_install_event(game_id, &info, &mut report).await;
		self.flush(&report).await;
		report
	}

	/// Host entry point: full sweep after the host finished deploying.
	pub async fn on_deploy_completed(&self) -> SweepReport {
		self.sweep_all(SweepTrigger::Deploy).await
	}

	/// Sweep every registered game; one game's failure never stops the rest.
	pub async fn sweep_all(&self, trigger: SweepTrigger) -> SweepReport {
		let mut report = SweepReport::new(trigger);
		for profile in games::profiles() {
			self.sweep_game_into(profile, &mut report).await;
		}
		self.flush(&report).await;
		report
	}

	/// Sweep one game's staging roots.
	pub async fn sweep_game(&self, game_id: &str, trigger: SweepTrigger) -> SweepReport {
		let mut report = SweepReport::new(trigger);
		match games::profile_for(game_id) {
			Some(profile) => self.sweep_game_into(profile, &mut report).await,
			None => report.push(format!("Unknown game id: {game_id}")),
		}
		self.flush(&report).await;
		report
	}

	async fn sweep_game_into(&self, profile: &GameProfile, report: &mut SweepReport) {
		report.push(format!("== {} ==", profile.id));
		for root in self.resolver.staging_roots(profile.id) {
			if !is_dir(&root).await {
				report.push(format!("Missing staging root: {}", root.display()));
				continue;
			}
			let mut entries = match fs::read_dir(&root).await {
				Ok(entries) => entries,
				Err(err) => {
					report.push(format!("Unreadable staging root {}: {err}", root.display()));
					continue;
				}
			};
			while let Ok(Some(entry)) = entries.next_entry().await {
				let is_mod_folder = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
				if is_mod_folder {
					let moved = self.process_mod_folder(profile, &entry.path(), report).await;
					report.record_moved(moved);
				}
			}
		}
	}

	/// Discover and relocate saves from one mod folder. Returns files moved.
	async fn process_mod_folder(
		&self, profile: &GameProfile, mod_root: &Path, report: &mut SweepReport,
	) -> usize {
		report.push(format!("Scanning mod: {}", mod_root.display()));
		let files = discovery::discover_saves(profile, mod_root).await;
		report.push(format!("  -> {} candidate file(s)", files.len()));
		if files.is_empty() {
			return 0;
		}

		let Some(destination) = self.resolver.save_destination(profile.id) else {
			report.push(format!("  No save destination for {}", profile.id));
			return 0;
		};

		let outcome = match relocate::relocate(&files, &destination, self.config.mode).await {
			Ok(outcome) => outcome,
			Err(err) => {
				report.record_error(format!("{} ({})", err, profile.label));
				self.notify(
					NotificationKind::Error,
					&format!("Cannot access the {} save directory", profile.label),
				);
				return 0;
			}
		};

		report.push(format!(
			"  Moved {} file(s) -> {}",
			outcome.moved,
			destination.display()
		));
		for failure in &outcome.failures {
			report.record_error(format!(
				"Failed to relocate {}: {}",
				failure.source.display(),
				failure.error
			));
		}

		if outcome.moved > 0 {
			let folder = mod_root
				.file_name()
				.map(|name| name.to_string_lossy().into_owned())
				.unwrap_or_else(|| mod_root.display().to_string());
			self.notify(
				NotificationKind::Success,
				&format!(
					"Moved {} save file(s) from {} to the {} save directory",
					outcome.moved, folder, profile.label
				),
			);
		}
		outcome.moved
	}

	/// Install signal handling: prefer the concrete path carried by the
	/// event, fall back to a full game sweep when the host supplied none.
	/// Unsupported games are ignored without touching the filesystem.
	async fn handle_install_event(
		&self, game_id: &str, info: &InstallInfo, report: &mut SweepReport,
	) {
		let Some(profile) = games::profile_for(game_id) else {
			debug!("Ignoring install event for unsupported game {:?}", game_id);
			return;
		};

		let mod_root = match &info.installation_path {
			Some(path) => {
				if is_dir(path).await {
					Some(path.clone())
				} else {
					report.push(format!("Install path does not exist: {}", path.display()));
					None
				}
			}
			None => None,
		};

		let Some(mod_root) = mod_root else {
			report.trigger = SweepTrigger::InstallFallback;
			report.push(format!("No usable install path; sweeping {}", profile.id));
			self.sweep_game_into(profile, report).await;
			return;
		};

		report.push(format!("Using install path: {}", mod_root.display()));
		let moved = self.process_mod_folder(profile, &mod_root, report).await;
		report.record_moved(moved);
		if moved == 0 {
			// The host may still be finalizing file placement; wait once and
			// retry exactly once.
			tokio::time::sleep(self.config.install_retry_delay).await;
			let retried = self.process_mod_folder(profile, &mod_root, report).await;
			report.record_moved(retried);
			report.push(format!("Retry moved {retried} file(s)"));
		}
	}

	/// Write the report to the diagnostics sink when diagnostics are on.
	async fn flush(&self, report: &SweepReport) {
		if self.config.diagnostics && !report.lines().is_empty() {
			self.diagnostics.append(&report.render()).await;
		}
		if report.moved > 0 {
			info!("Sweep [{}] moved {} file(s)", report.trigger, report.moved);
		}
	}

	fn notify(&self, kind: NotificationKind, message: &str) {
		self.notifications
			.notify(kind, message, self.config.notification_display_ms);
	}
}

async fn is_dir(path: &Path) -> bool {
	fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}
