//! # flowtag - Flow Log Tagging and Aggregation
//!
//! Batch utility that classifies AWS VPC flow log records by
//! destination port and transport protocol using an externally
//! supplied lookup table, then reports aggregate frequencies.
//!
//! ## Responsibilities
//! - Load a CSV (dstport, protocol) → tag lookup table
//! - Parse v2 flow logs lazily, tolerating malformed lines
//! - Normalize numeric IANA protocol identifiers to canonical names
//! - Count occurrences per tag and per (port, protocol) pair
//! - Emit both counters as sorted CSV reports
//!
//! ## Pipeline
//! 1. [`LookupTable::load`] builds the read-only tag mapping
//! 2. [`FlowLogReader`] streams records in a single pass
//! 3. [`tag_flows`] joins records against the table and counts
//! 4. [`report`] writes `tag_counts.csv` and `port_protocol_counts.csv`

mod error;
pub mod flow_log;
pub mod lookup;
pub mod protocol;
pub mod report;
pub mod tagger;

pub use error::{FlowTagError, Result};
pub use flow_log::{FlowLogReader, FlowRecord};
pub use lookup::LookupTable;
pub use tagger::{tag_flows, FlowCounts, UNTAGGED};
