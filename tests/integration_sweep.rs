// End-to-end sweep scenarios over a simulated host environment.

use save_sweeper::{NotificationKind, SweepTrigger, SweeperConfig};

mod common;
use common::{dir_entries, write_file};

#[tokio::test]
async fn test_data_rooted_mod_is_emptied_into_the_save_directory() {
	let host = common::TestHost::new();
	let mod_root = host.mod_folder("skyrimse", "ModX");
	write_file(&mod_root.join("Data/Saves/slot1.ess"));
	write_file(&mod_root.join("Data/Saves/slot1.skse"));

	let orchestrator = host.orchestrator(SweeperConfig::default());
	let report = orchestrator.sweep_game("skyrimse", SweepTrigger::Manual).await;

	assert_eq!(report.moved, 2);
	assert_eq!(
		dir_entries(&host.saves_dir("skyrimse")),
		vec!["slot1.ess".to_string(), "slot1.skse".to_string()]
	);
	// Move semantics: the mod's Saves folder is now empty.
	assert!(dir_entries(&mod_root.join("Data/Saves")).is_empty());
}

#[tokio::test]
async fn test_sweep_is_idempotent_under_move_semantics() {
	let host = common::TestHost::new();
	let mod_root = host.mod_folder("skyrimse", "ModX");
	write_file(&mod_root.join("Data/Saves/slot1.ess"));

	let orchestrator = host.orchestrator(SweeperConfig::default());
	let first = orchestrator.sweep_game("skyrimse", SweepTrigger::Manual).await;
	let second = orchestrator.sweep_game("skyrimse", SweepTrigger::Manual).await;

	assert_eq!(first.moved, 1);
	assert_eq!(second.moved, 0);
	assert_eq!(dir_entries(&host.saves_dir("skyrimse")), vec!["slot1.ess".to_string()]);
}

#[tokio::test]
async fn test_virtual_root_mod_sweeps_through_save_named_folder() {
	let host = common::TestHost::new();
	let mod_root = host.mod_folder("fallout3", "ModY");
	write_file(&mod_root.join("MySave1/quick.fos"));

	let orchestrator = host.orchestrator(SweeperConfig::default());
	let report = orchestrator.sweep_game("fallout3", SweepTrigger::Manual).await;

	assert_eq!(report.moved, 1);
	assert_eq!(dir_entries(&host.saves_dir("fallout3")), vec!["quick.fos".to_string()]);
}

#[tokio::test]
async fn test_copy_mode_leaves_sources_in_place() {
	let host = common::TestHost::new();
	let mod_root = host.mod_folder("skyrimse", "ModX");
	write_file(&mod_root.join("Data/Saves/slot1.ess"));

	let orchestrator = host.orchestrator(SweeperConfig::copying());
	let report = orchestrator.sweep_game("skyrimse", SweepTrigger::Manual).await;

	assert_eq!(report.moved, 1);
	assert!(mod_root.join("Data/Saves/slot1.ess").exists());
	assert!(host.saves_dir("skyrimse").join("slot1.ess").exists());
}

#[tokio::test]
async fn test_success_notification_names_mod_and_game() {
	let host = common::TestHost::new();
	let mod_root = host.mod_folder("skyrimse", "ModX");
	write_file(&mod_root.join("Data/Saves/slot1.ess"));

	let orchestrator = host.orchestrator(SweeperConfig::default());
	orchestrator.sweep_game("skyrimse", SweepTrigger::Manual).await;

	let successes = host.notifications.messages_of(NotificationKind::Success);
	assert_eq!(successes.len(), 1);
	assert!(successes[0].contains("ModX"));
	assert!(successes[0].contains("Skyrim Special Edition"));
}

#[tokio::test]
async fn test_sweep_all_covers_multiple_games_independently() {
	let host = common::TestHost::new();
	write_file(&host.mod_folder("skyrimse", "ModX").join("Data/Saves/slot1.ess"));
	write_file(&host.mod_folder("fallout3", "ModY").join("MySave1/quick.fos"));

	let orchestrator = host.orchestrator(SweeperConfig::default());
	let report = orchestrator.sweep_all(SweepTrigger::Manual).await;

	assert_eq!(report.moved, 2);
	assert!(host.saves_dir("skyrimse").join("slot1.ess").exists());
	assert!(host.saves_dir("fallout3").join("quick.fos").exists());
}

#[tokio::test]
async fn test_unusable_destination_is_notified_and_isolated() {
	let host = common::TestHost::new();
	write_file(&host.mod_folder("skyrimse", "ModX").join("Data/Saves/slot1.ess"));
	write_file(&host.mod_folder("fallout3", "ModY").join("MySave1/quick.fos"));

	// A file where "My Games/Fallout3" should be makes that destination
	// impossible to create.
	std::fs::create_dir_all(host.documents.join("My Games")).unwrap();
	std::fs::write(host.documents.join("My Games/Fallout3"), b"blocked").unwrap();

	let orchestrator = host.orchestrator(SweeperConfig::default());
	let report = orchestrator.sweep_all(SweepTrigger::Manual).await;

	// The skyrimse files still move; the fallout3 failure is reported.
	assert_eq!(report.moved, 1);
	assert!(!report.errors.is_empty());
	let errors = host.notifications.messages_of(NotificationKind::Error);
	assert_eq!(errors.len(), 1);
	assert!(errors[0].contains("Fallout 3"));
	// Move semantics never delete a source that was not copied.
	assert!(host
		.staging_root("fallout3")
		.join("ModY/MySave1/quick.fos")
		.exists());
}

#[tokio::test]
async fn test_missing_staging_roots_are_skipped() {
	let host = common::TestHost::new();
	// No mod folders created at all: nothing to sweep, nothing to fail.
	let orchestrator = host.orchestrator(SweeperConfig::default());
	let report = orchestrator.sweep_all(SweepTrigger::Manual).await;

	assert_eq!(report.moved, 0);
	assert!(report.errors.is_empty());
	assert!(host.notifications.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_diagnostics_receive_the_report_only_when_enabled() {
	let host = common::TestHost::new();
	write_file(&host.mod_folder("skyrimse", "ModX").join("Data/Saves/slot1.ess"));

	let silent = host.orchestrator(SweeperConfig::default());
	silent.sweep_game("skyrimse", SweepTrigger::Manual).await;
	assert!(host.diagnostics.entries.lock().unwrap().is_empty());

	write_file(&host.mod_folder("skyrimse", "ModX").join("Data/Saves/slot2.ess"));
	let config = SweeperConfig {
		diagnostics: true,
		..Default::default()
	};
	let chatty = host.orchestrator(config);
	chatty.sweep_game("skyrimse", SweepTrigger::Manual).await;

	let entries = host.diagnostics.entries.lock().unwrap();
	assert_eq!(entries.len(), 1);
	assert!(entries[0].contains("ModX"));
	assert!(entries[0].contains("Total moved: 1"));
}

#[tokio::test]
async fn test_startup_sweep_runs_after_the_configured_delay() {
	let host = common::TestHost::new();
	write_file(&host.mod_folder("starfield", "ModS").join("Data/exit.sfs"));

	let config = SweeperConfig {
		startup_delay: std::time::Duration::from_millis(10),
		..Default::default()
	};
	let orchestrator = host.orchestrator(config);
	let report = orchestrator.run_startup_sweep().await;

	assert_eq!(report.trigger, SweepTrigger::Startup);
	assert_eq!(report.moved, 1);
	assert!(host.saves_dir("starfield").join("exit.sfs").exists());
}

#[tokio::test]
async fn test_deploy_sweep_covers_all_games() {
	let host = common::TestHost::new();
	write_file(&host.mod_folder("oblivion", "ModO").join("Data/slot.ess"));

	let orchestrator = host.orchestrator(SweeperConfig::default());
	let report = orchestrator.on_deploy_completed().await;

	assert_eq!(report.trigger, SweepTrigger::Deploy);
	assert_eq!(report.moved, 1);
}
