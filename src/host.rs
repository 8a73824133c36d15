//! Host-environment collaborators
//!
//! The sweeper runs inside a host package manager; everything it needs from
//! that host is behind the three traits here: user-visible notifications, an
//! append-only diagnostics log, and "known folder" lookups. All of them are
//! allowed to come back empty or fail silently — none may ever affect the
//! sweep control flow.

use async_trait::async_trait;
use chrono::Utc;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Tag the host shows in front of every message from this extension.
const NOTIFICATION_PREFIX: &str = "[save-sweeper]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
	Info,
	Success,
	Error,
}

/// Fire-and-forget user-visible notifications.
///
/// `display_ms` is a hint for hosts that render timed toasts. Implementations
/// must swallow their own failures.
pub trait NotificationSink: Send + Sync {
	fn notify(&self, kind: NotificationKind, message: &str, display_ms: u64);
}

/// Notification sink that forwards to the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifications;

impl NotificationSink for TracingNotifications {
	fn notify(&self, kind: NotificationKind, message: &str, _display_ms: u64) {
		match kind {
			NotificationKind::Info => info!("{NOTIFICATION_PREFIX} {message}"),
			NotificationKind::Success => info!("{NOTIFICATION_PREFIX} {message}"),
			NotificationKind::Error => error!("{NOTIFICATION_PREFIX} {message}"),
		}
	}
}

/// Append-only diagnostics log.
///
/// Implementations must swallow their own failures; diagnostics never affect
/// control flow.
#[async_trait]
pub trait DiagnosticsSink: Send + Sync {
	async fn append(&self, entry: &str);
}

/// Diagnostics sink that discards every entry.
#[derive(Debug, Default)]
pub struct NullDiagnostics;

#[async_trait]
impl DiagnosticsSink for NullDiagnostics {
	async fn append(&self, _entry: &str) {}
}

/// Diagnostics sink appending timestamped blocks to a run-log file, creating
/// its directory on demand.
#[derive(Debug, Clone)]
pub struct RunLogDiagnostics {
	dir: PathBuf,
}

impl RunLogDiagnostics {
	pub const FILE_NAME: &'static str = "run-log.txt";

	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// The conventional location: a diagnostics folder under the documents root.
	pub fn under_documents(documents: &Path) -> Self {
		Self::new(documents.join("save-sweeper-diagnostics"))
	}

	/// Path of the log file entries are appended to.
	pub fn log_path(&self) -> PathBuf {
		self.dir.join(Self::FILE_NAME)
	}

	async fn try_append(&self, entry: &str) -> crate::Result<()> {
		use tokio::io::AsyncWriteExt;

		tokio::fs::create_dir_all(&self.dir).await?;
		let stamped = format!("[{}] {}\n\n", Utc::now().to_rfc3339(), entry);
		let mut file = tokio::fs::OpenOptions::new()
			.create(true)
			.append(true)
			.open(self.log_path())
			.await?;
		file.write_all(stamped.as_bytes()).await?;
		file.flush().await?;
		Ok(())
	}
}

#[async_trait]
impl DiagnosticsSink for RunLogDiagnostics {
	async fn append(&self, entry: &str) {
		if let Err(err) = self.try_append(entry).await {
			warn!("Failed to write diagnostics entry: {}", err);
		}
	}
}

/// Resolves logical host folders. Any lookup may come back empty.
pub trait KnownFolders: Send + Sync {
	/// The user's documents root, if the host knows one.
	fn documents(&self) -> Option<PathBuf>;

	/// Application-data roots that may hold per-game mod staging. Candidates
	/// reached through different lookups may repeat; callers deduplicate.
	fn app_data_candidates(&self) -> Vec<PathBuf>;

	/// The currently active install (staging) directory, if the host exposes
	/// one.
	fn active_install_dir(&self) -> Option<PathBuf>;
}

/// Environment-backed folder lookup used outside of tests, scoped to the host
/// package manager's data directory name.
#[derive(Debug, Clone)]
pub struct EnvKnownFolders {
	host_name: String,
}

impl EnvKnownFolders {
	pub fn for_host(host_name: impl Into<String>) -> Self {
		Self { host_name: host_name.into() }
	}
}

impl KnownFolders for EnvKnownFolders {
	fn documents(&self) -> Option<PathBuf> {
		dirs::document_dir()
	}

	fn app_data_candidates(&self) -> Vec<PathBuf> {
		let mut candidates = Vec::new();
		if let Some(config) = dirs::config_dir() {
			candidates.push(config.join(&self.host_name));
		}
		if let Some(app_data) = env::var_os("APPDATA") {
			candidates.push(PathBuf::from(app_data).join(&self.host_name));
		}
		candidates
	}

	fn active_install_dir(&self) -> Option<PathBuf> {
		None
	}
}
