//! Relocation of discovered save files
//!
//! Copies each candidate into the destination directory, overwriting whatever
//! is already there, and removes the source afterwards when running with cut
//! semantics. One file failing never aborts the batch.

use crate::error::SweeperError;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Whether relocation removes the source after a successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelocationMode {
	/// Copy, then delete the source.
	#[default]
	Cut,
	/// Copy, leaving the source in place.
	Copy,
}

/// Result of one relocation batch.
#[derive(Debug, Default)]
pub struct RelocationOutcome {
	/// Files placed at the destination (and, under cut semantics, removed
	/// from the source).
	pub moved: usize,
	pub failures: Vec<RelocationFailure>,
}

/// One file that could not be relocated; the batch continued past it.
#[derive(Debug)]
pub struct RelocationFailure {
	pub source: PathBuf,
	pub error: io::Error,
}

/// Relocate `files` into `destination`.
///
/// The destination directory is created before any file is placed, also for
/// an empty batch. Failure to create it is the only error this returns;
/// per-file failures are collected into the outcome and the loop continues.
pub async fn relocate(
	files: &[PathBuf], destination: &Path, mode: RelocationMode,
) -> crate::Result<RelocationOutcome> {
	fs::create_dir_all(destination)
		.await
		.map_err(|source| SweeperError::DestinationUnavailable {
			path: destination.to_path_buf(),
			source,
		})?;

	let mut outcome = RelocationOutcome::default();
	for source in files {
		let Some(name) = source.file_name() else {
			continue;
		};
		let target = destination.join(name);
		match relocate_one(source, &target, mode).await {
			Ok(()) => {
				debug!("Relocated {:?} -> {:?}", source, target);
				outcome.moved += 1;
			}
			Err(error) => {
				warn!("Failed to relocate {:?}: {}", source, error);
				outcome.failures.push(RelocationFailure {
					source: source.clone(),
					error,
				});
			}
		}
	}
	Ok(outcome)
}

async fn relocate_one(source: &Path, target: &Path, mode: RelocationMode) -> io::Result<()> {
	copy_file(source, target).await?;
	if mode == RelocationMode::Cut {
		remove_source(source).await?;
	}
	Ok(())
}

/// Copy via the fast primitive first, falling back to a full read/write when
/// it is unavailable. Both paths produce byte-identical destination content.
async fn copy_file(source: &Path, target: &Path) -> io::Result<()> {
	match fs::copy(source, target).await {
		Ok(_) => Ok(()),
		Err(primary) => {
			debug!(
				"fs::copy of {:?} failed ({}), retrying with read/write",
				source, primary
			);
			let bytes = fs::read(source).await?;
			fs::write(target, bytes).await
		}
	}
}

/// Overlapping sweeps may both try to delete the same source; a source that
/// is already gone counts as deleted.
async fn remove_source(source: &Path) -> io::Result<()> {
	match fs::remove_file(source).await {
		Ok(()) => Ok(()),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
		Err(err) => Err(err),
	}
}
