mod discovery;
mod error;
mod events;
mod games;
mod host;
mod paths;
mod relocate;
mod sweep;

pub use discovery::discover_saves;
pub use error::{Result, SweeperError};
pub use events::{InstallInfo, SweepTrigger};
pub use games::{is_save_file, profile_for, profiles, GameProfile};
pub use host::{
	DiagnosticsSink, EnvKnownFolders, KnownFolders, NotificationKind, NotificationSink,
	NullDiagnostics, RunLogDiagnostics, TracingNotifications,
};
pub use paths::PathResolver;
pub use relocate::{relocate, RelocationFailure, RelocationMode, RelocationOutcome};
pub use sweep::{SweepOrchestrator, SweepReport, SweeperConfig};
