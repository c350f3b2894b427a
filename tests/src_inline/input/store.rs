use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::roles::Role;
use crate::pipeline::score_teams;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("lass_store_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_records() -> Records {
    let mut records = Records::default();
    let s = records.insert_section("Hall A");
    let t = records.insert_team("Quarks", "SK", Some(s));
    records
        .team_mut(&t)
        .unwrap()
        .upsert_grade(Role::ScienceReport, "5 4+");
    records.insert_team("Leptons", "CZ", None);
    records
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = make_temp_dir();
    let store = JsonFileStore::new(dir.join("absent.json"));
    assert_eq!(store.load().unwrap(), Records::default());
    assert!(store.load_leaderboard().unwrap().is_empty());
}

#[test]
fn test_records_and_leaderboard_persist_independently() {
    let dir = make_temp_dir();
    let path = dir.join("nested").join("data.json");
    let mut store = JsonFileStore::new(&path);
    let records = sample_records();
    store.save(&records).unwrap();

    let ranking = score_teams(&records.teams, &records.sections);
    store.save_leaderboard(&ranking).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load().unwrap(), records);
    let loaded = reopened.load_leaderboard().unwrap();
    assert_eq!(loaded.len(), ranking.len());
    for (a, b) in loaded.iter().zip(&ranking) {
        assert_eq!(a.team_id, b.team_id);
        assert_eq!(a.place, b.place);
        assert_eq!(a.grades, b.grades);
        assert!((a.rp - b.rp).abs() < 1e-9);
    }
    assert!(!path.with_extension("json.tmp").exists());

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"task\": \"reporter_sci\""));
    assert!(raw.contains("\"rawTP\""));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = make_temp_dir();
    let path = dir.join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Json { .. })));
}

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::default();
    let records = sample_records();
    store.save(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);
    let again = MemoryStore::with_records(records.clone());
    assert_eq!(again.load().unwrap().teams.len(), 2);
}
