// mod.rs - Core classification logic module

pub mod call;
pub mod classifier;
pub mod selector;

// Re-export main types for convenience
pub use call::{build_call, ContaminationCall};
pub use classifier::{classify, classify_detailed, ClassificationTrace, ClassifierConfig, HitVerdict, ImplicatedSpecies};
pub use selector::{select_top_hit, select_top_hit_with, PHAGE_MARKER};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::SilentLogger;
    use crate::output::serialize_call;
    use crate::report::RankedReport;

    fn line(identity: f64, hits: u64, mult: f64, desc: &str) -> String {
        format!("{}\t{}/1000\t{}\t0\tquery.msh\t{}", identity, hits, mult, desc)
    }

    fn call_for(lines: &[String]) -> ContaminationCall {
        let report = RankedReport::parse(lines, &SilentLogger).unwrap();
        let species = classify(&report, &ClassifierConfig::default(), &SilentLogger);
        build_call(&species, &SilentLogger)
    }

    #[test]
    fn test_scenario_phage_only() {
        let lines = vec![
            line(0.99, 500, 30.0, "NC_001416.1 Enterobacteria phage lambda"),
            line(0.99, 500, 30.0, "NC_001604.1 Enterobacteria phage T7"),
            line(0.99, 500, 30.0, "NC_000866.4 Enterobacteria phage T4"),
        ];
        let call = call_for(&lines);
        assert_eq!(call, ContaminationCall::Clean);
        assert_eq!(serialize_call("S1", &call).unwrap(), "S1\tNA\tNA\n");
    }

    #[test]
    fn test_scenario_single_host() {
        let lines = vec![line(0.90, 150, 10.0, "NC_000913.3 Escherichia coli K-12")];
        assert_eq!(call_for(&lines), ContaminationCall::Clean);
    }

    #[test]
    fn test_scenario_contaminant_above_threshold() {
        let lines = vec![
            line(0.90, 150, 10.0, "NC_000913.3 Escherichia coli K-12"),
            line(0.87, 120, 1.0, "NC_003197.2 Salmonella enterica LT2"),
        ];
        let call = call_for(&lines);
        assert_eq!(
            serialize_call("S3", &call).unwrap(),
            "S3\tContaminated\tEscherichia coli Salmonella enterica\n"
        );
    }

    #[test]
    fn test_scenario_contaminant_below_threshold() {
        let lines = vec![
            line(0.90, 150, 10.0, "NC_000913.3 Escherichia coli K-12"),
            line(0.87, 120, 0.3, "NC_003197.2 Salmonella enterica LT2"),
        ];
        assert_eq!(call_for(&lines), ContaminationCall::Clean);
    }

    #[test]
    fn test_scenario_unresolved_species_excluded() {
        let lines = vec![
            line(0.90, 150, 10.0, "NC_000913.3 Escherichia coli K-12"),
            line(0.87, 120, 5.0, "NZ_CP012345.1 Citrobacter sp. 30_2"),
        ];
        assert_eq!(call_for(&lines), ContaminationCall::Clean);
    }
}
