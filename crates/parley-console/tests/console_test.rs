use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use parley_console::{load_config, Command, Config, ConfigError, Console, Outcome};
use parley_training::ScriptedDurations;
use parley_types::{ClipDuration, TrainingStatus};
use serde_json::Value;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap()
}

fn console(config: &Config, script: &[&str]) -> Console<ScriptedDurations> {
    let durations = ScriptedDurations::new(
        script
            .iter()
            .map(|s| s.parse::<ClipDuration>().unwrap())
            .collect::<Vec<_>>(),
    );
    Console::new(config, durations)
        .unwrap()
        .with_clock(fixed_now)
}

fn run(console: &mut Console<ScriptedDurations>, line: &str) -> Value {
    let command: Command = line.parse().unwrap();
    match console.execute(command).unwrap() {
        Outcome::Print(text) => serde_json::from_str(&text).unwrap(),
        Outcome::Quit => panic!("unexpected quit for {line}"),
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ── config loading ───────────────────────────────────────────────────

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.training.target_minutes, 10.0);
    assert_eq!(config.session.agent_id, "agent-1");
}

#[test]
fn config_file_is_read() {
    let file = write_config(
        r#"
        [training]
        target_minutes = 4.0

        [session]
        agent_id = "agent-9"
        "#,
    );
    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.training.target_minutes, 4.0);
    assert_eq!(config.session.agent_id, "agent-9");
}

#[test]
fn malformed_config_file_is_an_error() {
    let file = write_config("[training\n");
    let err = load_config(file.path().to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unreachable_target_is_rejected() {
    let file = write_config("[training]\ntarget_minutes = -1.0\n");
    let err = load_config(file.path().to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Training(_)));
}

// ── command loop ─────────────────────────────────────────────────────

#[test]
fn commands_drive_the_session() {
    let mut console = console(&Config::default(), &["1:30", "2:00", "1:45"]);

    let snapshot = run(&mut console, "upload a.wav b.wav c.wav");
    assert_eq!(snapshot["status"], "in-progress");
    assert_eq!(snapshot["percentage"], 53);
    assert_eq!(snapshot["sample_count"], 3);
    assert_eq!(snapshot["recordings"][0]["title"], "Загруженная запись 1");
    assert_eq!(snapshot["recordings"][0]["kind"], "call");

    let snapshot = run(&mut console, "call 5:00");
    assert_eq!(snapshot["status"], "completed");
    assert_eq!(snapshot["percentage"], 100);
    assert_eq!(snapshot["recordings"][3]["title"], "Сессия ролевой игры");
    assert_eq!(snapshot["recordings"][3]["kind"], "roleplay");

    let call_id = console.snapshot().recordings[3].id();
    let snapshot = run(&mut console, &format!("remove {call_id}"));
    assert_eq!(snapshot["status"], "in-progress");
    assert_eq!(snapshot["percentage"], 53);

    let snapshot = run(&mut console, "status");
    assert_eq!(snapshot["recordings"].as_array().unwrap().len(), 3);
}

#[test]
fn events_can_be_filtered_by_domain() {
    let mut console = console(&Config::default(), &["6:00"]);
    run(&mut console, "upload a.wav b.wav");

    let all = run(&mut console, "events");
    let types: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec!["TRAINING_STARTED", "RECORDINGS_INGESTED", "TRAINING_COMPLETED"]
    );

    let sessions = run(&mut console, "events SESSION");
    assert_eq!(sessions.as_array().unwrap().len(), 2);
    assert!(sessions
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["entity_id"] == "agent-1"));
}

#[test]
fn events_show_the_newest_page() {
    let mut console = console(&Config::default(), &["0:01"]);
    for i in 0..120 {
        run(&mut console, &format!("upload clip-{i}.wav"));
    }

    // One start plus 120 ingestions; only the newest 100 are printed.
    let events = run(&mut console, "events");
    let seqs: Vec<u64> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["seq"].as_u64().unwrap())
        .collect();
    assert_eq!(seqs.len(), 100);
    assert_eq!(seqs.first(), Some(&22));
    assert_eq!(seqs.last(), Some(&121));
}

#[test]
fn configured_session_is_resumed() {
    let mut config = Config::default();
    config.session.initial_status = TrainingStatus::InProgress;
    config.session.agent_id = "agent-3".to_string();
    let console = console(&config, &["1:00"]);
    assert_eq!(console.snapshot().status, TrainingStatus::InProgress);
    assert_eq!(console.snapshot().percentage, 0);
}

#[test]
fn unknown_removal_leaves_snapshot_unchanged() {
    let mut console = console(&Config::default(), &["1:00"]);
    let before = run(&mut console, "upload a.wav");
    let after = run(
        &mut console,
        "remove 67e55044-10b1-426f-9247-bb680e5fe0c8",
    );
    assert_eq!(before, after);
}

#[test]
fn quit_stops_the_loop() {
    let mut console = console(&Config::default(), &[]);
    assert_eq!(console.execute(Command::Quit).unwrap(), Outcome::Quit);
}
