use std::path::PathBuf;
use thiserror::Error;

/// Core sweeper error types
///
/// Almost everything this crate encounters is an expected absence (missing
/// staging roots, unknown game ids, missing co-saves) and is modelled as an
/// empty result, not an error. What remains here is the small set of failures
/// a caller can actually act on.
#[derive(Error, Debug)]
pub enum SweeperError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON serialization error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unknown game id: {game_id}")]
	UnknownGame { game_id: String },

	#[error("Save destination unusable: {} - {source}", .path.display())]
	DestinationUnavailable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Configuration error: {parameter} - {reason}")]
	InvalidConfiguration { parameter: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SweeperError>;
