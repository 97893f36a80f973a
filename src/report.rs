//! CSV report writers
//!
//! Renders the two frequency counters as sorted CSV tables. Ordering
//! is ascending lexicographic on the key as a string: port "10" sorts
//! before port "2", matching the report format consumers expect.

use std::path::Path;

use itertools::Itertools;
use tracing::info;

use crate::error::Result;
use crate::tagger::{PortProtoCounts, TagCounts};

/// Writes tag frequencies as `Tag,Count` rows sorted by tag.
pub fn write_tag_counts(counts: &TagCounts, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Tag", "Count"])?;

    for (tag, count) in counts.iter().sorted_by_key(|&(tag, _)| tag) {
        writer.write_record([tag.as_str(), &count.to_string()])?;
    }
    writer.flush()?;

    info!("Wrote {} tag rows to {}", counts.len(), path.display());
    Ok(())
}

/// Writes port/protocol frequencies as `Port,Protocol,Count` rows
/// sorted by the (port, protocol) string pair.
pub fn write_port_proto_counts(counts: &PortProtoCounts, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Port", "Protocol", "Count"])?;

    for ((port, protocol), count) in counts.iter().sorted_by_key(|&(key, _)| key) {
        writer.write_record([port.as_str(), protocol.as_str(), &count.to_string()])?;
    }
    writer.flush()?;

    info!(
        "Wrote {} port/protocol rows to {}",
        counts.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_tag_counts_sorted_by_tag() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tag_counts.csv");

        let mut counts = TagCounts::new();
        counts.insert("sv_P2".to_string(), 1);
        counts.insert("Untagged".to_string(), 3);
        counts.insert("sv_P1".to_string(), 2);

        write_tag_counts(&counts, &path).expect("Failed to write report");

        let contents = fs::read_to_string(&path).expect("Failed to read report");
        assert_eq!(contents, "Tag,Count\nUntagged,3\nsv_P1,2\nsv_P2,1\n");
    }

    #[test]
    fn test_port_proto_counts_string_ordered() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("port_protocol_counts.csv");

        let mut counts = PortProtoCounts::new();
        counts.insert(("2".to_string(), "tcp".to_string()), 1);
        counts.insert(("10".to_string(), "udp".to_string()), 4);
        counts.insert(("10".to_string(), "tcp".to_string()), 2);

        write_port_proto_counts(&counts, &path).expect("Failed to write report");

        // Ports compare as strings: "10" sorts before "2".
        let contents = fs::read_to_string(&path).expect("Failed to read report");
        assert_eq!(
            contents,
            "Port,Protocol,Count\n10,tcp,2\n10,udp,4\n2,tcp,1\n"
        );
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let counts = TagCounts::new();
        let result = write_tag_counts(&counts, Path::new("no/such/dir/tag_counts.csv"));
        assert!(result.is_err());
    }
}
