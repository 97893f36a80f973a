//! AWS VPC flow log parsing
//!
//! Lazily reads a v2 flow log line by line and yields the destination
//! port and normalized protocol of each record. Real-world logs carry
//! truncated or malformed lines; those are skipped, not errors.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::warn;

use crate::error::{FlowTagError, Result};
use crate::protocol;

/// Zero-based field positions in the v2 flow log layout.
const DST_PORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

/// Minimum field count for a line to be considered a record.
const MIN_FIELDS: usize = 8;

/// One parsed flow log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    /// Destination port, as it appears in the log
    pub dst_port: String,

    /// Transport protocol, normalized to lowercase name or numeric string
    pub protocol: String,
}

/// Lazy, single-pass reader over a flow log file.
///
/// Yields a [`FlowRecord`] per well-formed line; lines with fewer than
/// eight whitespace-separated fields are skipped silently. Finite and
/// not restartable after exhaustion.
#[derive(Debug)]
pub struct FlowLogReader {
    lines: Lines<BufReader<File>>,
}

impl FlowLogReader {
    /// Opens a flow log file for reading.
    ///
    /// Fails with [`FlowTagError::NotFound`] if the file does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FlowTagError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for FlowLogReader {
    type Item = FlowRecord;

    fn next(&mut self) -> Option<FlowRecord> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    // read_line consumed the offending bytes, so the
                    // stream is aligned at the next line.
                    warn!("Skipping unreadable flow log line: {}", e);
                    continue;
                }
            };

            if let Some(record) = parse_line(&line) {
                return Some(record);
            }
        }
    }
}

/// Parses one flow log line, returning `None` for malformed lines.
fn parse_line(line: &str) -> Option<FlowRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_FIELDS {
        return None;
    }

    Some(FlowRecord {
        dst_port: parts[DST_PORT_FIELD].to_string(),
        protocol: protocol::normalize(parts[PROTOCOL_FIELD]),
    })
}
