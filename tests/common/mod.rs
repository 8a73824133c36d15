//! Common test utilities for the save-sweeper library

#![allow(dead_code)]

use save_sweeper::{
	profile_for, DiagnosticsSink, KnownFolders, NotificationKind, NotificationSink, PathResolver,
	SweepOrchestrator, SweeperConfig,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Known-folder stub resolving into a temp directory.
pub struct FixedFolders {
	pub documents: Option<PathBuf>,
	pub app_data: Vec<PathBuf>,
	pub install: Option<PathBuf>,
}

impl KnownFolders for FixedFolders {
	fn documents(&self) -> Option<PathBuf> {
		self.documents.clone()
	}
	fn app_data_candidates(&self) -> Vec<PathBuf> {
		self.app_data.clone()
	}
	fn active_install_dir(&self) -> Option<PathBuf> {
		self.install.clone()
	}
}

/// Notification sink that records every call.
#[derive(Default)]
pub struct RecordingNotifications {
	pub messages: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifications {
	pub fn messages_of(&self, kind: NotificationKind) -> Vec<String> {
		self.messages
			.lock()
			.unwrap()
			.iter()
			.filter(|(k, _)| *k == kind)
			.map(|(_, message)| message.clone())
			.collect()
	}
}

impl NotificationSink for RecordingNotifications {
	fn notify(&self, kind: NotificationKind, message: &str, _display_ms: u64) {
		self.messages.lock().unwrap().push((kind, message.to_string()));
	}
}

/// Diagnostics sink that records every entry.
#[derive(Default)]
pub struct RecordingDiagnostics {
	pub entries: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl DiagnosticsSink for RecordingDiagnostics {
	async fn append(&self, entry: &str) {
		self.entries.lock().unwrap().push(entry.to_string());
	}
}

/// A simulated host environment: temp app-data and documents folders plus
/// recording sinks, with an orchestrator wired against them.
pub struct TestHost {
	pub temp_dir: TempDir,
	pub app_data: PathBuf,
	pub documents: PathBuf,
	pub notifications: Arc<RecordingNotifications>,
	pub diagnostics: Arc<RecordingDiagnostics>,
}

impl TestHost {
	pub fn new() -> Self {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let app_data = temp_dir.path().join("appdata/host");
		let documents = temp_dir.path().join("documents");
		std::fs::create_dir_all(&app_data).unwrap();
		std::fs::create_dir_all(&documents).unwrap();

		TestHost {
			temp_dir,
			app_data,
			documents,
			notifications: Arc::new(RecordingNotifications::default()),
			diagnostics: Arc::new(RecordingDiagnostics::default()),
		}
	}

	pub fn resolver(&self) -> PathResolver {
		PathResolver::new(Arc::new(FixedFolders {
			documents: Some(self.documents.clone()),
			app_data: vec![self.app_data.clone()],
			install: None,
		}))
	}

	pub fn orchestrator(&self, config: SweeperConfig) -> SweepOrchestrator {
		SweepOrchestrator::new(
			config,
			self.resolver(),
			self.notifications.clone(),
			self.diagnostics.clone(),
		)
	}

	/// The staging root the resolver computes for a game.
	pub fn staging_root(&self, game_id: &str) -> PathBuf {
		self.app_data.join(game_id).join("mods")
	}

	/// Create one mod folder under a game's staging root.
	pub fn mod_folder(&self, game_id: &str, name: &str) -> PathBuf {
		let folder = self.staging_root(game_id).join(name);
		std::fs::create_dir_all(&folder).unwrap();
		folder
	}

	/// The save destination directory the registry maps for a game.
	pub fn saves_dir(&self, game_id: &str) -> PathBuf {
		profile_for(game_id).unwrap().saves_dir(&self.documents)
	}
}

/// Create a file with throwaway content, creating parent directories.
pub fn write_file(path: &Path) {
	std::fs::create_dir_all(path.parent().unwrap()).unwrap();
	std::fs::write(path, b"save data").unwrap();
}

/// File names (sorted) directly inside a directory; empty for a missing one.
pub fn dir_entries(dir: &Path) -> Vec<String> {
	let Ok(entries) = std::fs::read_dir(dir) else {
		return Vec::new();
	};
	let mut names: Vec<String> = entries
		.flatten()
		.map(|entry| entry.file_name().to_string_lossy().into_owned())
		.collect();
	names.sort();
	names
}
