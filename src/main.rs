// main.rs - CLI entry point

use mashcall::cli::MergedArgs;
use mashcall::logging::DEFAULT_COMPONENT;
use mashcall::prelude::*;
use log::LevelFilter;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn verbosity_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Install env_logger; the level follows --verbose unless RUST_LOG is set
fn init_logging(verbose: bool) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
    set_verbosity(verbose);
}

fn set_verbosity(verbose: bool) {
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(verbosity_filter(verbose));
    }
}

fn run_main() -> Result<()> {
    let args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Logging first, so config loading is reported
    init_logging(args.verbose);

    // Load configuration file if specified
    let merged: MergedArgs = match args.config.clone() {
        Some(config_path) => args.with_config_file(&config_path)?,
        None => args.without_config(),
    };
    set_verbosity(merged.args.verbose);

    let validation = validate_args(&merged)?;
    let logger = FacadeLogger::new(DEFAULT_COMPONENT);
    let start = Instant::now();

    println!("🚀 mashcall v{}", mashcall::VERSION);
    println!("📂 Report: {}", validation.report.display());

    let (derived_name, report) = load_report(&validation.report, validation.window, &logger)?;
    let sample_name = validation.sample_name.clone().unwrap_or(derived_name);
    println!("🧬 Sample: {} ({} hits considered)", sample_name, report.len());

    let trace = classify_detailed(&report, &validation.classifier, &logger);
    match (&trace.top_hit, trace.threshold) {
        (Some(top), Some(threshold)) => println!(
            "🎯 Top hit: {} (identity {:.3}, median multiplicity {}), depth threshold {:.3}",
            top.species, top.identity, top.median_multiplicity, threshold
        ),
        _ => println!("🎯 No non-phage hit in the leading window"),
    }

    let call = build_call(&trace.species, &logger);
    let record = serialize_call(&sample_name, &call)?;

    if merged.args.dry_run {
        println!("✅ Dry run completed: {}", call);
        print!("{}", record);
        return Ok(());
    }

    if let Some(output) = &validation.output {
        write_call(output, &sample_name, &call, &logger)?;
        println!("✅ Call written to: {}", output.display());
    }

    if let Some(details_path) = &validation.details {
        let details = CallDetails::new(&sample_name, &validation.classifier, &trace, &call);
        write_details(details_path, &details, &logger)?;
        println!("📋 Details written to: {}", details_path.display());
    }

    println!("⏱️  {} in {:.2?}", call, start.elapsed());
    Ok(())
}
