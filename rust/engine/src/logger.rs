use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{RoundSummary, ThirdDraw};
use crate::rules::Outcome;

/// Complete record of one played round.
/// Serialized to JSONL format, one round per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Shoe seed, when the shoe was seeded explicitly
    pub seed: Option<u64>,
    pub deck_count: u32,
    pub punto: Vec<Card>,
    pub banco: Vec<Card>,
    pub punto_value: u8,
    pub banco_value: u8,
    pub natural: bool,
    /// Third cards in draw order
    #[serde(default)]
    pub thirds: Vec<ThirdDraw>,
    pub outcome: Outcome,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_summary(
        round_id: String,
        seed: Option<u64>,
        deck_count: u32,
        summary: &RoundSummary,
    ) -> Self {
        Self {
            round_id,
            seed,
            deck_count,
            punto: summary.punto.clone(),
            banco: summary.banco.clone(),
            punto_value: summary.punto_value,
            banco_value: summary.banco_value,
            natural: summary.natural,
            thirds: summary.thirds.clone(),
            outcome: summary.outcome,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file and hands out sequential round ids.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating it and its parent directories if
    /// needed. Ids are dated today (UTC).
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let date = Utc::now().format("%Y%m%d").to_string();
        Self::create_dated(path, &date)
    }

    /// Same as [`RoundLogger::create`] with an explicit `YYYYMMDD` date.
    /// Numbering continues after the highest id for `date` already in the
    /// file, so reopening never reissues an id.
    pub fn create_dated<P: AsRef<Path>>(path: P, date: &str) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let seq = last_seq(path, date)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: date.to_string(),
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct LoggedId {
    round_id: String,
}

// Lines that are not records, or carry another date, are skipped.
fn last_seq(path: &Path, date: &str) -> std::io::Result<u32> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let prefix = format!("{}-", date);
    let mut max = 0;
    for line in BufReader::new(f).lines() {
        let line = line?;
        let Ok(logged) = serde_json::from_str::<LoggedId>(&line) else {
            continue;
        };
        if let Some(seq) = logged
            .round_id
            .strip_prefix(&prefix)
            .and_then(|n| n.parse::<u32>().ok())
        {
            max = max.max(seq);
        }
    }
    Ok(max)
}
