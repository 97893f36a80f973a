//! Tagging and frequency aggregation
//!
//! Joins each flow record against the lookup table and accumulates two
//! independent counters in a single pass: one by resulting tag, one by
//! raw (port, protocol) pair.

use std::collections::HashMap;

use crate::flow_log::FlowRecord;
use crate::lookup::LookupTable;

/// Sentinel tag for records with no lookup match.
pub const UNTAGGED: &str = "Untagged";

/// Tag → occurrence count.
pub type TagCounts = HashMap<String, u64>;

/// (port, protocol) → occurrence count.
pub type PortProtoCounts = HashMap<(String, String), u64>;

/// The two frequency counters produced by one aggregation pass.
///
/// Invariant: every record increments both counters exactly once, so
/// their totals are always equal.
#[derive(Debug, Default)]
pub struct FlowCounts {
    /// Occurrences per tag, including [`UNTAGGED`]
    pub tag_counts: TagCounts,

    /// Occurrences per raw (port, protocol) pair
    pub port_proto_counts: PortProtoCounts,
}

impl FlowCounts {
    /// Total number of records aggregated.
    pub fn total(&self) -> u64 {
        self.tag_counts.values().sum()
    }
}

/// Tags each flow record and counts tag and port/protocol frequencies.
///
/// The lookup key lowercases the protocol regardless of the record's
/// case; the frequency key preserves the record's protocol verbatim.
/// Records absent from the table count under [`UNTAGGED`].
pub fn tag_flows<I>(records: I, lookup: &LookupTable) -> FlowCounts
where
    I: IntoIterator<Item = FlowRecord>,
{
    let mut counts = FlowCounts::default();

    for record in records {
        let tag = lookup
            .get(&record.dst_port, &record.protocol.to_lowercase())
            .unwrap_or(UNTAGGED);

        *counts.tag_counts.entry(tag.to_string()).or_insert(0) += 1;
        *counts
            .port_proto_counts
            .entry((record.dst_port, record.protocol))
            .or_insert(0) += 1;
    }

    counts
}
