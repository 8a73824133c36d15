//! Per-game path resolution
//!
//! Computes the candidate mod-staging roots and the destination save directory
//! for a game. Absence is never an error here: a game with no resolvable
//! staging roots simply has nothing to sweep.

use crate::games;
use crate::host::KnownFolders;
use std::collections::HashSet;
use std::env;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[cfg(windows)]
const FALLBACK_ROOT: &str = "C:\\";
#[cfg(not(windows))]
const FALLBACK_ROOT: &str = "/";

/// Resolves staging roots and save destinations against the host's known
/// folders.
#[derive(Clone)]
pub struct PathResolver {
	folders: Arc<dyn KnownFolders>,
}

impl PathResolver {
	pub fn new(folders: Arc<dyn KnownFolders>) -> Self {
		Self { folders }
	}

	/// Candidate mod-staging roots for a game: every application-data root
	/// joined with `<game_id>/mods`, plus the active install directory when
	/// the host exposes one. Normalized and deduplicated, order preserved.
	/// An empty result means "nothing to sweep", never a failure.
	pub fn staging_roots(&self, game_id: &str) -> Vec<PathBuf> {
		let mut roots = Vec::new();
		let mut seen = HashSet::new();

		for base in self.folders.app_data_candidates() {
			let candidate = normalize(&base.join(game_id).join("mods"));
			push_unique(&mut roots, &mut seen, candidate);
		}
		if let Some(install) = self.folders.active_install_dir() {
			push_unique(&mut roots, &mut seen, normalize(&install));
		}

		debug!("Staging roots for {}: {:?}", game_id, roots);
		roots
	}

	/// The game's save directory, or None for a game the registry does not
	/// know.
	pub fn save_destination(&self, game_id: &str) -> Option<PathBuf> {
		let profile = games::profile_for(game_id)?;
		Some(profile.saves_dir(&self.documents_root()))
	}

	/// Documents root with a fallback chain that never fails: the host's
	/// known folder, then the user-profile root from the environment, then a
	/// fixed drive root.
	pub fn documents_root(&self) -> PathBuf {
		if let Some(documents) = self.folders.documents() {
			return documents;
		}
		if let Some(profile) = env::var_os("USERPROFILE") {
			return PathBuf::from(profile);
		}
		if let Some(home) = env::var_os("HOME") {
			return PathBuf::from(home);
		}
		PathBuf::from(FALLBACK_ROOT)
	}
}

fn push_unique(roots: &mut Vec<PathBuf>, seen: &mut HashSet<String>, candidate: PathBuf) {
	// Case-insensitive key: two spellings of one directory collapse to the
	// first one seen.
	let key = candidate.to_string_lossy().to_lowercase();
	if seen.insert(key) {
		roots.push(candidate);
	}
}

/// Component-wise normalization: drops `.` segments, resolves `..` against
/// already-seen parents, unifies separators.
fn normalize(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				out.pop();
			}
			other => out.push(other.as_os_str()),
		}
	}
	out
}
