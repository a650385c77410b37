// inspect_report.rs - Standalone utility showing how each hit of a report is judged

use clap::{Arg, ArgAction, Command};
use mashcall::core::HitVerdict;
use mashcall::prelude::*;
use std::path::PathBuf;

fn verdict_label(verdict: &HitVerdict) -> String {
    match verdict {
        HitVerdict::LowQuality => "low identity/hits".to_string(),
        HitVerdict::Excluded(term) => format!("excluded ('{}')", term),
        HitVerdict::BelowThreshold => "below depth threshold".to_string(),
        HitVerdict::Included => "contaminant".to_string(),
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("inspect_report")
        .version(mashcall::VERSION)
        .about("Shows how mashcall judges every hit of a sorted Mash screen report")
        .arg(Arg::new("report")
            .value_name("FILE")
            .help("Sorted report (<sample>_sorted_winning.tab)")
            .required(true))
        .arg(Arg::new("window")
            .long("window")
            .value_name("N")
            .help("Number of leading hits considered")
            .default_value("20"))
        .arg(Arg::new("depth-fraction")
            .long("depth-fraction")
            .value_name("FRACTION")
            .help("Fraction of the top hit's median multiplicity other hits must reach")
            .default_value("0.05"))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Print diagnostic messages")
            .action(ArgAction::SetTrue))
        .get_matches();

    let report_path = PathBuf::from(matches.get_one::<String>("report").ok_or("missing report")?);
    let window_str = matches.get_one::<String>("window").ok_or("missing window")?;
    let fraction_str = matches.get_one::<String>("depth-fraction").ok_or("missing depth fraction")?;
    let verbose = matches.get_flag("verbose");

    let window = window_str
        .parse::<usize>()
        .map_err(|_| format!("Invalid window value: {}", window_str))?;
    let depth_fraction = fraction_str
        .parse::<f64>()
        .map_err(|_| format!("Invalid depth fraction: {}", fraction_str))?;

    let config = ClassifierConfig {
        depth_fraction,
        ..ClassifierConfig::default()
    };
    config.validate()?;

    if verbose {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
    }
    let facade = FacadeLogger::default();
    let logger: &dyn Logger = if verbose { &facade } else { &SilentLogger };

    println!("🔬 mashcall report inspector");
    println!("================================");
    println!("📂 Report: {}", report_path.display());

    let (sample, report) = load_report(&report_path, window, logger)?;
    println!("🧬 Sample: {} ({} hits considered)", sample, report.len());
    println!();

    let trace = classify_detailed(&report, &config, logger);
    let threshold = trace.threshold.unwrap_or(f64::INFINITY);

    println!("rank\tidentity\thits\tmedian_mult\tspecies\tverdict");
    for (idx, record) in report.iter().enumerate() {
        let verdict = match trace.top_index {
            None => "phage (no host call)".to_string(),
            Some(top) if top == idx => {
                if config.passes_quality(record) {
                    "top hit (host)".to_string()
                } else {
                    "top hit (low identity/hits)".to_string()
                }
            }
            Some(_) => verdict_label(&config.assess(record, threshold)),
        };
        println!(
            "{}\t{:.4}\t{}\t{}\t{}\t{}",
            idx + 1,
            record.identity,
            record.hit_count,
            record.median_multiplicity,
            record.species,
            verdict
        );
    }
    println!();

    match trace.threshold {
        Some(value) => println!("🎯 Depth threshold: {}", value),
        None => println!("🎯 No non-phage hit: no threshold"),
    }

    let call = build_call(&trace.species, logger);
    print!("📋 {}", serialize_call(&sample, &call)?);
    Ok(())
}
