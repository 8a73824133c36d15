//! Static registry of supported games
//!
//! Each game contributes its save-file extensions, the co-save extensions its
//! script extender writes next to a save, and the save directory under the
//! user's documents root. The set is closed and known at build time; there is
//! no dynamic registration.

use std::path::{Path, PathBuf};

/// Per-game save recognition and destination rules.
#[derive(Debug, Clone, Copy)]
pub struct GameProfile {
	/// Unique game identifier as used by the host
	pub id: &'static str,
	/// Human-readable name used in notifications
	pub label: &'static str,
	/// Primary save extensions, matched case-insensitively as suffixes
	pub save_extensions: &'static [&'static str],
	/// Companion extensions pulled in next to a discovered save
	pub cosave_extensions: &'static [&'static str],
	/// Maps the documents root to this game's save directory
	saves_dir: fn(&Path) -> PathBuf,
}

impl GameProfile {
	/// True iff `filename`, lower-cased, ends with one of the primary save
	/// extensions.
	pub fn is_save_file(&self, filename: &str) -> bool {
		let lower = filename.to_lowercase();
		self.save_extensions.iter().any(|ext| lower.ends_with(*ext))
	}

	/// This game's save directory under the given documents root.
	pub fn saves_dir(&self, documents: &Path) -> PathBuf {
		(self.saves_dir)(documents)
	}
}

fn my_games(documents: &Path, game_dir: &str) -> PathBuf {
	documents.join("My Games").join(game_dir).join("Saves")
}

const PROFILES: &[GameProfile] = &[
	// The Elder Scrolls
	GameProfile {
		id: "skyrim",
		label: "Skyrim (LE)",
		save_extensions: &[".ess"],
		cosave_extensions: &[".skse"],
		saves_dir: |docs| my_games(docs, "Skyrim"),
	},
	GameProfile {
		id: "skyrimse",
		label: "Skyrim Special Edition/AE",
		save_extensions: &[".ess"],
		cosave_extensions: &[".skse"],
		saves_dir: |docs| my_games(docs, "Skyrim Special Edition"),
	},
	GameProfile {
		id: "oblivion",
		label: "Oblivion",
		save_extensions: &[".ess"],
		cosave_extensions: &[".obse"],
		saves_dir: |docs| my_games(docs, "Oblivion"),
	},
	GameProfile {
		id: "morrowind",
		label: "Morrowind",
		save_extensions: &[".ess"],
		cosave_extensions: &[],
		saves_dir: |docs| my_games(docs, "Morrowind"),
	},
	// Fallout
	GameProfile {
		id: "fallout3",
		label: "Fallout 3",
		save_extensions: &[".fos"],
		cosave_extensions: &[".fose"],
		saves_dir: |docs| my_games(docs, "Fallout3"),
	},
	GameProfile {
		id: "falloutnv",
		label: "Fallout: New Vegas",
		save_extensions: &[".fos"],
		cosave_extensions: &[".nvse"],
		saves_dir: |docs| my_games(docs, "FalloutNV"),
	},
	GameProfile {
		id: "fallout4",
		label: "Fallout 4",
		save_extensions: &[".fos"],
		cosave_extensions: &[".f4se"],
		saves_dir: |docs| my_games(docs, "Fallout4"),
	},
	// Starfield (Steam / My Games layout)
	GameProfile {
		id: "starfield",
		label: "Starfield",
		save_extensions: &[".sfs"],
		cosave_extensions: &[],
		saves_dir: |docs| my_games(docs, "Starfield"),
	},
];

/// All supported game profiles, in registration order.
pub fn profiles() -> &'static [GameProfile] {
	PROFILES
}

/// Look up the profile for a game identifier. Pure lookup, no side effects.
pub fn profile_for(game_id: &str) -> Option<&'static GameProfile> {
	PROFILES.iter().find(|profile| profile.id == game_id)
}

/// Registry-level save check: false, not an error, for an unknown game id.
pub fn is_save_file(game_id: &str, filename: &str) -> bool {
	profile_for(game_id)
		.map(|profile| profile.is_save_file(filename))
		.unwrap_or(false)
}
