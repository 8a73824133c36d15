use crate::error::SweeperError;
use crate::relocate::RelocationMode;
use std::time::Duration;

/// Behavior switches for the orchestrator, fixed at construction.
///
/// Everything that used to be an ambient toggle lives here so a sweep's
/// behavior is fully determined by the value passed in.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
	/// Cut moves save files out of the mod folder; Copy leaves sources behind.
	pub mode: RelocationMode,
	/// Write run reports to the diagnostics sink.
	pub diagnostics: bool,
	/// Delay before the startup sweep begins.
	pub startup_delay: Duration,
	/// Wait before the single retry after an install event moved nothing.
	/// Tolerates the host still finalizing file placement.
	pub install_retry_delay: Duration,
	/// Display-time hint carried on notifications, in milliseconds.
	pub notification_display_ms: u64,
}

impl Default for SweeperConfig {
	fn default() -> Self {
		Self {
			mode: RelocationMode::Cut,
			diagnostics: false,
			startup_delay: Duration::from_millis(300),
			install_retry_delay: Duration::from_millis(1200),
			notification_display_ms: 6000,
		}
	}
}

impl SweeperConfig {
	/// Copy-semantics variant of the defaults.
	pub fn copying() -> Self {
		Self {
			mode: RelocationMode::Copy,
			..Default::default()
		}
	}

	/// Validate the configuration and return errors if invalid.
	pub fn validate(&self) -> crate::Result<()> {
		if self.install_retry_delay.is_zero() {
			return Err(SweeperError::InvalidConfiguration {
				parameter: "install_retry_delay".to_string(),
				reason: "must be greater than zero".to_string(),
			});
		}
		if self.startup_delay > Duration::from_secs(60) {
			return Err(SweeperError::InvalidConfiguration {
				parameter: "startup_delay".to_string(),
				reason: format!("{:?} exceeds the 60s ceiling", self.startup_delay),
			});
		}
		Ok(())
	}
}
