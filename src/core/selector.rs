// selector.rs - Top (non-phage) hit selection

use crate::logging::Logger;
use crate::report::{RankedHitRecord, RankedReport};

/// Marker that disqualifies a hit from being the host call
pub const PHAGE_MARKER: &str = "phage";

/// First hit, in rank order, whose description does not mention `marker`
/// (case-insensitive), together with its 0-based rank
pub fn select_top_hit_with<'a>(
    report: &'a RankedReport,
    marker: &str,
    logger: &dyn Logger,
) -> Option<(&'a RankedHitRecord, usize)> {
    let found = report
        .iter()
        .enumerate()
        .find(|(_, record)| !record.is_phage_hit(marker))
        .map(|(idx, record)| (record, idx));

    match found {
        Some((_, idx)) => logger.log(&format!("Found first non-phage hit at index {}", idx)),
        None => logger.log("No non-phage hits detected in top lines"),
    }
    found
}

/// First non-phage hit of the report
pub fn select_top_hit<'a>(
    report: &'a RankedReport,
    logger: &dyn Logger,
) -> Option<(&'a RankedHitRecord, usize)> {
    select_top_hit_with(report, PHAGE_MARKER, logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{MemoryLogger, SilentLogger};

    fn record(desc: &str) -> RankedHitRecord {
        RankedHitRecord {
            identity: 0.99,
            hit_count: 500,
            median_multiplicity: 10.0,
            free_text: desc.to_string(),
            species: desc.split_whitespace().skip(1).take(2).collect::<Vec<_>>().join(" "),
        }
    }

    #[test]
    fn test_skips_leading_phages() {
        let report = RankedReport::new(vec![
            record("NC_001416.1 Enterobacteria phage lambda"),
            record("NC_049948.1 Escherichia PHAGE T4"),
            record("NC_000913.3 Escherichia coli K-12"),
            record("NC_003197.2 Salmonella enterica LT2"),
        ]);
        let logger = MemoryLogger::new();

        let (top, idx) = select_top_hit(&report, &logger).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(top.species, "Escherichia coli");
        assert!(logger.contains("index 2"));
    }

    #[test]
    fn test_first_record_wins() {
        let report = RankedReport::new(vec![
            record("NC_000913.3 Escherichia coli K-12"),
            record("NC_003197.2 Salmonella enterica LT2"),
        ]);
        let (_, idx) = select_top_hit(&report, &SilentLogger).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_all_phage_returns_none() {
        let report = RankedReport::new(vec![
            record("NC_001416.1 Enterobacteria phage lambda"),
            record("NC_001604.1 Enterobacteria Phage T7"),
        ]);
        let logger = MemoryLogger::new();
        assert!(select_top_hit(&report, &logger).is_none());
        assert!(logger.contains("No non-phage hits"));
    }

    #[test]
    fn test_empty_report_returns_none() {
        assert!(select_top_hit(&RankedReport::default(), &SilentLogger).is_none());
    }
}
