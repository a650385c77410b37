// loader.rs - Reading a per-sample report file into a RankedReport

use crate::error::{ContamError, Result};
use crate::logging::Logger;
use crate::report::record::{parse_hit_line, RankedHitRecord};
use std::fs;
use std::path::Path;

/// Suffix of the sorted Mash screen report produced per sample
pub const REPORT_SUFFIX: &str = "_sorted_winning.tab";

/// Number of leading hits considered by the classifier
pub const DEFAULT_WINDOW: usize = 20;

/// Ordered hits, most confident first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedReport {
    pub records: Vec<RankedHitRecord>,
}

impl RankedReport {
    pub fn new(records: Vec<RankedHitRecord>) -> Self {
        Self { records }
    }

    /// Parse every line; the first malformed line aborts the whole report
    pub fn parse<S: AsRef<str>>(lines: &[S], logger: &dyn Logger) -> Result<Self> {
        let mut records = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            let record = parse_hit_line(line.as_ref()).map_err(|e| e.at_line(idx + 1))?;
            logger.log(&format!(
                "Processed mash line with species={}, identity={}, hits={}, median_multiplicity={}",
                record.species, record.identity, record.hit_count, record.median_multiplicity
            ));
            records.push(record);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedHitRecord> {
        self.records.iter()
    }
}

/// Derive the sample name from a report path: basename cut at the report suffix
pub fn sample_name_from_path(path: &Path) -> String {
    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match basename.split_once(REPORT_SUFFIX) {
        Some((sample, _)) => sample.to_string(),
        None => basename,
    }
}

/// Keep the non-blank lines among the first `window` lines of `content`
pub fn window_lines(content: &str, window: usize) -> (usize, Vec<String>) {
    let total = content.lines().count();
    let kept = content
        .lines()
        .take(window)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    (total, kept)
}

/// Read the report file and keep the leading window of hits
pub fn read_report_lines(path: &Path, window: usize, logger: &dyn Logger) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| ContamError::io(path, e))?;
    let (total, kept) = window_lines(&content, window);
    logger.log(&format!(
        "Opened report {}; total_lines={}, taking top {}",
        path.display(),
        total,
        kept.len()
    ));
    Ok(kept)
}

/// Load a report from disk and return it with its sample name
pub fn load_report(path: &Path, window: usize, logger: &dyn Logger) -> Result<(String, RankedReport)> {
    let sample_name = sample_name_from_path(path);
    let lines = read_report_lines(path, window, logger)?;
    logger.log(&format!("Loading report for sample {}", sample_name));
    let report = RankedReport::parse(&lines, logger)?;
    Ok((sample_name, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{MemoryLogger, SilentLogger};
    use std::path::PathBuf;

    fn temp_report(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mashcall_loader_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn hit(identity: f64, hits: u64, mult: f64, desc: &str) -> String {
        format!("{}\t{}/1000\t{}\t0\tquery.fna\t{}", identity, hits, mult, desc)
    }

    #[test]
    fn test_sample_name_from_path() {
        assert_eq!(
            sample_name_from_path(Path::new("/runs/mash/S12_sorted_winning.tab")),
            "S12"
        );
        assert_eq!(sample_name_from_path(Path::new("plain.tab")), "plain.tab");
        assert_eq!(
            sample_name_from_path(Path::new("dir/A_sorted_winning.tab.bak")),
            "A"
        );
    }

    #[test]
    fn test_window_lines_truncates_and_skips_blanks() {
        let content = (0..30).map(|i| format!("line{}\n", i)).collect::<String>();
        let (total, kept) = window_lines(&content, DEFAULT_WINDOW);
        assert_eq!(total, 30);
        assert_eq!(kept.len(), 20);
        assert_eq!(kept[0], "line0");
        assert_eq!(kept[19], "line19");

        let (total, kept) = window_lines("a\n\nb\n", 5);
        assert_eq!(total, 3);
        assert_eq!(kept, vec!["a", "b"]);
    }

    #[test]
    fn test_blank_line_inside_window_does_not_pull_in_later_lines() {
        let mut lines: Vec<String> = (0..24).map(|i| format!("line{}", i)).collect();
        lines.insert(3, String::new());
        let content = lines.join("\n") + "\n";

        let (total, kept) = window_lines(&content, DEFAULT_WINDOW);
        assert_eq!(total, 25);
        assert_eq!(kept.len(), 19);
        assert_eq!(kept.last().map(String::as_str), Some("line18"));
    }

    #[test]
    fn test_load_report_from_file() {
        let content = format!(
            "{}\n{}\n",
            hit(0.95, 900, 40.0, "NC_000913.3 Escherichia coli K-12"),
            hit(0.90, 300, 5.0, "NZ_CP009072.1 Salmonella enterica serovar")
        );
        let path = temp_report("S7_sorted_winning.tab", &content);
        let logger = MemoryLogger::new();

        let (sample, report) = load_report(&path, DEFAULT_WINDOW, &logger).unwrap();
        assert_eq!(sample, "S7");
        assert_eq!(report.len(), 2);
        assert_eq!(report.records[1].species, "Salmonella enterica");
        assert!(logger.contains("total_lines=2, taking top 2"));
        assert!(logger.contains("species=Escherichia coli"));
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let lines = vec![
            hit(0.95, 900, 40.0, "NC_000913.3 Escherichia coli"),
            hit(0.95, 900, 40.0, "no accession at all"),
        ];
        let err = RankedReport::parse(&lines, &SilentLogger).unwrap_err();
        match err {
            ContamError::Line { line_number, source } => {
                assert_eq!(line_number, 2);
                assert!(matches!(*source, ContamError::PatternMatch { .. }));
            }
            other => panic!("Expected Line error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/mashcall/X_sorted_winning.tab");
        assert!(matches!(
            load_report(path, DEFAULT_WINDOW, &SilentLogger),
            Err(ContamError::Io { .. })
        ));
    }
}
