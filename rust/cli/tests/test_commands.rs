use puntobanco_cli::run;
use puntobanco_engine::logger::RoundRecord;

use std::sync::{Mutex, MutexGuard, OnceLock};

fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let guard = LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|p| p.into_inner());
    for key in ["PUNTOBANCO_CONFIG", "PUNTOBANCO_DECKS", "PUNTOBANCO_SEED"] {
        unsafe {
            std::env::remove_var(key);
        }
    }
    guard
}

fn run_ok(args: &[&str]) -> String {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    String::from_utf8(out).unwrap()
}

#[test]
fn deal_prints_hands_and_result() {
    let _env = env_lock();
    let s = run_ok(&["puntobanco", "deal", "--seed", "1"]);
    assert!(s.contains("Shoe: 8 decks, seed 1"));
    assert!(s.contains("Punto:"));
    assert!(s.contains("Banco:"));
    assert!(s.contains("Final: Punto "));
    let last = s.lines().last().unwrap();
    assert!(
        ["Result: Punto", "Result: Banco", "Result: Tie"].contains(&last),
        "unexpected last line {:?}",
        last
    );
}

#[test]
fn deal_is_reproducible_from_the_printed_seed() {
    let _env = env_lock();
    let a = run_ok(&["puntobanco", "deal", "--seed", "2024", "--decks", "6"]);
    let b = run_ok(&["puntobanco", "deal", "--seed", "2024", "--decks", "6"]);
    assert_eq!(a, b);
}

#[test]
fn deal_uses_seed_from_environment() {
    let _env = env_lock();
    unsafe {
        std::env::set_var("PUNTOBANCO_SEED", "77");
        std::env::set_var("PUNTOBANCO_DECKS", "2");
    }
    let from_env = run_ok(&["puntobanco", "deal"]);
    assert!(from_env.starts_with("Shoe: 2 decks, seed 77\n"));

    // flags win over the environment
    let from_flags = run_ok(&["puntobanco", "deal", "--decks", "3"]);
    assert!(from_flags.starts_with("Shoe: 3 decks, seed 77\n"));
}

#[test]
fn deal_appends_records_to_output() {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    run_ok(&["puntobanco", "deal", "--seed", "1", "--output", &path_str]);
    run_ok(&["puntobanco", "deal", "--seed", "2", "--output", &path_str]);

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].seed, Some(1));
    assert_eq!(records[1].seed, Some(2));
    assert!(records[0].round_id.ends_with("-000001"));
    assert!(records[1].round_id.ends_with("-000002"));
    assert_ne!(records[0].round_id, records[1].round_id);
    for rec in &records {
        assert_eq!(rec.punto.len() + rec.banco.len(), 4 + rec.thirds.len());
        if rec.natural {
            assert!(rec.thirds.is_empty());
        }
    }
}

#[test]
fn deal_rejects_invalid_decks() {
    let _env = env_lock();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["puntobanco", "deal", "--decks", "0"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(out.is_empty());

    unsafe {
        std::env::set_var("PUNTOBANCO_DECKS", "0");
    }
    let mut err: Vec<u8> = Vec::new();
    let code = run(["puntobanco", "deal"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).starts_with("Error: Configuration error"));
}

#[test]
fn deal_settles_a_bet_after_the_result() {
    let _env = env_lock();
    let s = run_ok(&[
        "puntobanco",
        "deal",
        "--seed",
        "5",
        "--bet",
        "banco",
        "--stake",
        "20",
        "--balance",
        "100",
    ]);
    let lines: Vec<&str> = s.lines().collect();
    let bet_line = lines[lines.len() - 1];
    match lines[lines.len() - 2] {
        "Result: Banco" => assert_eq!(bet_line, "Bet: 20 on Banco, won, balance 119"),
        _ => assert_eq!(bet_line, "Bet: 20 on Banco, lost, balance 80"),
    }

    let plain = run_ok(&["puntobanco", "deal", "--seed", "5"]);
    assert!(s.starts_with(&plain), "betting must not change the deal");
}

#[test]
fn deal_rejects_stake_above_balance() {
    let _env = env_lock();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["puntobanco", "deal", "--bet", "tie", "--stake", "11", "--balance", "10"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(String::from_utf8_lossy(&err).contains("exceeds available balance 10"));
}

#[test]
fn deal_with_empty_output_prints_nothing() {
    let _env = env_lock();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["puntobanco", "deal", "--seed", "3", "--output", ""],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(String::from_utf8_lossy(&err).contains("output path is empty"));
}

#[test]
fn cfg_reads_config_file() {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puntobanco.toml");
    std::fs::write(&path, "decks = 6\nseed = 9\n").unwrap();
    unsafe {
        std::env::set_var("PUNTOBANCO_CONFIG", &path);
    }
    let s = run_ok(&["puntobanco", "cfg"]);
    let json: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(json["decks"]["value"].as_u64(), Some(6));
    assert_eq!(json["decks"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(9));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
}

#[test]
fn rules_prints_banco_table() {
    let s = run_ok(&["puntobanco", "rules"]);
    assert!(s.contains("Punto draws on: 0 1 2 3 4 5"));
    assert!(s.contains("    3 |    D | D D D D D D D D S D"));
}
