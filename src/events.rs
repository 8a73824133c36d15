use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Why a sweep was started.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SweepTrigger {
	/// One-time sweep shortly after the host signalled readiness
	Startup,
	/// Reaction to a single "mod installed" signal
	Install,
	/// Install signal that carried no usable path, widened to a full game sweep
	InstallFallback,
	/// Full sweep after the host finished a deployment
	Deploy,
	/// Explicitly requested, e.g. from the command line
	Manual,
}

impl fmt::Display for SweepTrigger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			SweepTrigger::Startup => "startup",
			SweepTrigger::Install => "install",
			SweepTrigger::InstallFallback => "install-fallback",
			SweepTrigger::Deploy => "deploy",
			SweepTrigger::Manual => "manual",
		};
		f.write_str(name)
	}
}

/// Payload of the host's "mod installed" signal.
///
/// Hosts are not consistent about which key carries the freshly installed
/// folder; both `installationPath` and `installPath` are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallInfo {
	#[serde(default)]
	pub archive_id: Option<String>,
	#[serde(default)]
	pub mod_id: Option<String>,
	#[serde(default, alias = "installPath")]
	pub installation_path: Option<PathBuf>,
}

impl InstallInfo {
	/// Payload carrying only an installation path.
	pub fn with_path(path: impl Into<PathBuf>) -> Self {
		Self {
			installation_path: Some(path.into()),
			..Self::default()
		}
	}
}
