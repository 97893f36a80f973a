//! Port/protocol-to-tag lookup table
//!
//! Loads the externally supplied CSV mapping of (dstport, protocol)
//! pairs to traffic tags. The table is built once at startup and is
//! read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{FlowTagError, Result};

/// Required lookup table columns, matched case-sensitively in the header.
const REQUIRED_COLUMNS: [&str; 3] = ["dstport", "protocol", "tag"];

/// Mapping from (destination port, protocol) to tag.
///
/// Keys hold the port and tag trimmed and the protocol trimmed and
/// lowercased. Duplicate keys in the source file resolve
/// last-write-wins, in file order. Stored as port → protocol → tag so
/// lookups probe with borrowed strings instead of building an owned
/// key per record.
#[derive(Debug, Default)]
pub struct LookupTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl LookupTable {
    /// Loads the lookup table from a CSV file.
    ///
    /// The header must contain `dstport`, `protocol` and `tag` columns
    /// (any order, extra columns ignored). Fails with
    /// [`FlowTagError::NotFound`] if the file does not exist and
    /// [`FlowTagError::SchemaError`] naming the first missing column.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FlowTagError::NotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let mut columns = HashMap::new();
        for required in REQUIRED_COLUMNS {
            let idx = headers
                .iter()
                .position(|h| h == required)
                .ok_or_else(|| FlowTagError::SchemaError(required.to_string()))?;
            columns.insert(required, idx);
        }

        let port_idx = columns["dstport"];
        let proto_idx = columns["protocol"];
        let tag_idx = columns["tag"];

        let mut entries: HashMap<String, HashMap<String, String>> = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();

            let port = field(port_idx).to_string();
            let protocol = field(proto_idx).to_lowercase();
            let tag = field(tag_idx).to_string();

            entries.entry(port).or_default().insert(protocol, tag);
        }

        let table = Self { entries };
        debug!("Loaded {} lookup entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Looks up the tag for a (port, protocol) key.
    pub fn get(&self, port: &str, protocol: &str) -> Option<&str> {
        self.entries
            .get(port)
            .and_then(|by_proto| by_proto.get(protocol))
            .map(String::as_str)
    }

    /// Number of distinct (port, protocol) keys in the table.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((String, String), String)>,
    {
        let mut table = Self::default();
        for ((port, protocol), tag) in entries {
            table.entries.entry(port).or_default().insert(protocol, tag);
        }
        table
    }
}
