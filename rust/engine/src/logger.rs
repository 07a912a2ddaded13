use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandCategory;

/// One evaluation query and its answer, written as a JSONL line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Record identifier (format: YYYYMMDD-NNNNNN)
    pub id: String,
    /// Cards that were evaluated (hole cards first)
    pub cards: Vec<Card>,
    pub category: HandCategory,
    /// Category score, 0 for fewer than five cards
    pub score: u8,
    /// Equity estimate when the query was an equity request
    #[serde(default)]
    pub equity: Option<f64>,
    /// Timestamp (RFC3339), filled in by the logger when missing
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_record_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

#[derive(Deserialize)]
struct RecordId {
    id: String,
}

/// Highest `NNNNNN` among records in `path` dated `yyyymmdd`; 0 when none.
/// Lines that are not records are skipped.
fn last_seq(path: &Path, yyyymmdd: &str) -> std::io::Result<u32> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let prefix = format!("{}-", yyyymmdd);
    let mut max = 0;
    for line in BufReader::new(f).lines() {
        let line = line?;
        let Ok(rec) = serde_json::from_str::<RecordId>(&line) else {
            continue;
        };
        if let Some(n) = rec
            .id
            .strip_prefix(&prefix)
            .and_then(|n| n.parse::<u32>().ok())
        {
            max = max.max(n);
        }
    }
    Ok(max)
}

pub struct EvaluationLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl EvaluationLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    ///
    /// Numbering continues after the highest sequence already logged today,
    /// so ids stay unique across runs appending to the same file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = last_seq(path, &date)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
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
        format_record_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &EvaluationRecord) -> std::io::Result<()> {
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
