//! JSON-lines event log.
//!
//! The terminal is in raw alternate-screen mode while the game runs, so
//! lifecycle events go to a file instead: one JSON object per line, each with
//! a running `seq`, the milliseconds since start `t_ms`, and a `type` tag.
//!
//! ```text
//! {"seq":3,"t_ms":412,"type":"locked","kind":"o","x":6,"y":18,"lines_cleared":0,"score":0}
//! ```
//!
//! Logging never stops the game. The first write error disables the log.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::types::CoreEvent;

/// One line of the log, minus the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    GameStarted,
    Spawned {
        kind: &'static str,
        x: i8,
        y: i8,
    },
    Locked {
        kind: &'static str,
        x: i8,
        y: i8,
        lines_cleared: u32,
        score: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
    },
    ReturnedToMenu,
}

impl From<&CoreEvent> for EventRecord {
    fn from(event: &CoreEvent) -> Self {
        match *event {
            CoreEvent::GameStarted => EventRecord::GameStarted,
            CoreEvent::Spawned { kind, x, y } => EventRecord::Spawned {
                kind: kind.as_str(),
                x,
                y,
            },
            CoreEvent::Locked {
                kind,
                x,
                y,
                lines_cleared,
                score,
            } => EventRecord::Locked {
                kind: kind.as_str(),
                x,
                y,
                lines_cleared,
                score,
            },
            CoreEvent::GameOver { score, lines } => EventRecord::GameOver { score, lines },
            CoreEvent::ReturnedToMenu => EventRecord::ReturnedToMenu,
        }
    }
}

#[derive(Debug, Serialize)]
struct LogLine {
    seq: u64,
    t_ms: u64,
    #[serde(flatten)]
    record: EventRecord,
}

/// Writes [`CoreEvent`]s as JSON lines to any writer.
#[derive(Debug)]
pub struct EventLog<W: Write> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of lines written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, t_ms: u64, event: &CoreEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        let line = LogLine {
            seq: self.seq,
            t_ms,
            record: EventRecord::from(event),
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &line).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() {
            self.out = None;
            return;
        }
        self.seq += 1;
    }

    pub fn record_all<'a>(&mut self, t_ms: u64, events: impl IntoIterator<Item = &'a CoreEvent>) {
        for event in events {
            self.record(t_ms, event);
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// The underlying writer, if the log is still enabled.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
