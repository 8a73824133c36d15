//! Two-mode save discovery
//!
//! A mod folder is scanned in one of two mutually exclusive ways. When it
//! contains a direct child directory literally named `Data` or `data`, that
//! directory mirrors the real game layout and is walked exhaustively. Without
//! one, the mod folder itself becomes the scan root under a restricted walk:
//! only its own files and subtrees whose directory name contains "save" are
//! considered, so a repackaged mod cannot drag unrelated content into the
//! result. Either way, co-saves are pulled in afterwards as companions of the
//! saves already found, never by extension matching on their own.

use crate::games::GameProfile;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// How far the walk may descend from a queued directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkScope {
	/// Every subdirectory is queued in turn; depth is unbounded.
	Unbounded,
	/// Files at this level only; subdirectories are queued (unbounded) iff
	/// their name contains "save", case-insensitively.
	VirtualRoot,
}

/// Discover every save and co-save file for `profile` under `mod_root`.
///
/// Returns paths in discovery order. A missing or unreadable directory
/// anywhere in the walk yields an empty listing for that directory, never an
/// error.
pub async fn discover_saves(profile: &GameProfile, mod_root: &Path) -> Vec<PathBuf> {
	let (scan_root, scope) = match data_root(mod_root).await {
		Some(data) => {
			debug!("Data root for {:?}: {:?}", mod_root, data);
			(data, WalkScope::Unbounded)
		}
		None => {
			debug!("No Data folder in {:?}, treating the mod root as the scan root", mod_root);
			(mod_root.to_path_buf(), WalkScope::VirtualRoot)
		}
	};

	let mut found = collect_saves(profile, scan_root, scope).await;
	augment_with_cosaves(profile, &mut found).await;

	// Primary and co-save extension sets are disjoint by construction, but a
	// repeated entry must never reach relocation twice.
	let mut seen = HashSet::new();
	found.retain(|path| seen.insert(path.clone()));
	found
}

/// The `Data`/`data` child directory that selects the data-rooted walk.
/// Exactly these two casings are recognized; any other casing falls through
/// to the virtual-root walk.
async fn data_root(mod_root: &Path) -> Option<PathBuf> {
	for name in ["Data", "data"] {
		let candidate = mod_root.join(name);
		if is_dir(&candidate).await {
			return Some(candidate);
		}
	}
	None
}

/// Iterative walk over a work-list of (directory, scope) pairs, collecting
/// files that match the profile's primary save extensions.
async fn collect_saves(profile: &GameProfile, root: PathBuf, scope: WalkScope) -> Vec<PathBuf> {
	let mut found = Vec::new();
	let mut queue = VecDeque::new();
	queue.push_back((root, scope));

	while let Some((dir, scope)) = queue.pop_front() {
		let mut entries = match fs::read_dir(&dir).await {
			Ok(entries) => entries,
			Err(err) => {
				debug!("Skipping unreadable directory {:?}: {}", dir, err);
				continue;
			}
		};

		loop {
			let entry = match entries.next_entry().await {
				Ok(Some(entry)) => entry,
				Ok(None) => break,
				Err(err) => {
					debug!("Listing of {:?} ended early: {}", dir, err);
					break;
				}
			};
			let Ok(file_type) = entry.file_type().await else {
				continue;
			};

			if file_type.is_dir() {
				match scope {
					WalkScope::Unbounded => {
						queue.push_back((entry.path(), WalkScope::Unbounded));
					}
					WalkScope::VirtualRoot => {
						let name = entry.file_name().to_string_lossy().to_lowercase();
						if name.contains("save") {
							debug!("Save-like subdirectory: {:?}", entry.path());
							queue.push_back((entry.path(), WalkScope::Unbounded));
						}
					}
				}
			} else if file_type.is_file()
				&& profile.is_save_file(&entry.file_name().to_string_lossy())
			{
				found.push(entry.path());
			}
		}
	}

	found
}

/// For every discovered save, probe `base + extension` for each declared
/// co-save extension and pull existing companions into the result.
async fn augment_with_cosaves(profile: &GameProfile, files: &mut Vec<PathBuf>) {
	if profile.cosave_extensions.is_empty() {
		return;
	}

	let primaries = files.clone();
	for primary in &primaries {
		for extension in profile.cosave_extensions {
			let companion = primary.with_extension(extension.trim_start_matches('.'));
			if is_file(&companion).await {
				files.push(companion);
			}
		}
	}
}

async fn is_dir(path: &Path) -> bool {
	fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}

async fn is_file(path: &Path) -> bool {
	fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}
