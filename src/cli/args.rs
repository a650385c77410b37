// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default values shared with config merging
pub const DEFAULT_MIN_IDENTITY: f64 = 0.85;
pub const DEFAULT_MIN_HITS: u64 = 100;
pub const DEFAULT_DEPTH_FRACTION: f64 = 0.05;

#[derive(FromArgs, Debug)]
/// mashcall - Contamination call from a ranked Mash screen report
pub struct Args {
    /// path to the sorted report (<sample>_sorted_winning.tab)
    #[argh(option)]
    pub report: Option<String>,

    /// output file for the single-line call
    #[argh(option)]
    pub output: Option<String>,

    /// sample name (default: derived from the report file name)
    #[argh(option)]
    pub sample_name: Option<String>,

    /// number of leading hits considered (default: 20)
    #[argh(option, default = "crate::report::DEFAULT_WINDOW")]
    pub window: usize,

    /// minimum identity fraction for a hit to count (default: 0.85)
    #[argh(option, default = "DEFAULT_MIN_IDENTITY")]
    pub min_identity: f64,

    /// minimum number of matching hashes for a hit to count (default: 100)
    #[argh(option, default = "DEFAULT_MIN_HITS")]
    pub min_hits: u64,

    /// fraction of the top hit's median multiplicity other hits must reach (default: 0.05)
    #[argh(option, default = "DEFAULT_DEPTH_FRACTION")]
    pub depth_fraction: f64,

    /// write a JSON document describing how the call was reached
    #[argh(option)]
    pub details: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// classify and print the call without writing any file
    #[argh(switch)]
    pub dry_run: bool,

    /// print diagnostic messages to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}
