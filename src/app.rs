use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::AwfyConfig,
    golang,
    input::{parse_ls_remote_tags, read_measurements},
    local_logger::{AWFY_U8_COLOR_CODE, init_local_logger, log_section},
    prelude::*,
};
use clap::{
    Args, Parser, Subcommand, ValueEnum,
    builder::{Styles, styling},
};
use microbench::{Comparator, GroupingKey, MicroBenchmarkDetails, Reducer, ReleaseSelector};
use serde::Serialize;

fn create_styles() -> Styles {
    styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::Ansi256Color(AWFY_U8_COLOR_CODE).on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GroupingArg {
    /// Merge benchmarks sharing a name, whatever their package
    Name,
    /// Merge benchmarks sharing both package and name
    Identity,
}

impl From<GroupingArg> for GroupingKey {
    fn from(v: GroupingArg) -> Self {
        match v {
            GroupingArg::Name => GroupingKey::Name,
            GroupingArg::Identity => GroupingKey::Identity,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Reduce and compare microbenchmark results", styles = create_styles())]
pub struct Cli {
    /// The configuration name to use
    /// If provided, the configuration will be loaded from ~/.config/arewefastyet/{config-name}.yaml
    /// Otherwise, loads from ~/.config/arewefastyet/config.yaml
    #[arg(long, env = "AWFY_CONFIG_NAME", global = true)]
    config_name: Option<String>,

    /// How measurements are grouped before being reduced, overrides the configuration
    #[arg(long, value_enum, global = true)]
    grouping: Option<GroupingArg>,

    /// Where to write the JSON output. If omitted, prints to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reduce repeated measurements into one median result per benchmark
    Reduce(ReduceArgs),
    /// Compare current results against baseline results
    Compare(CompareArgs),
    /// Select the latest release out of a `git ls-remote --tags` listing
    LatestRelease(LatestReleaseArgs),
}

#[derive(Args, Debug)]
struct ReduceArgs {
    /// JSON file containing an array of measurements. Can be provided multiple times.
    #[arg(short, long, value_name = "FILE", action = clap::ArgAction::Append)]
    input: Vec<PathBuf>,

    /// Output of `go test -json -bench . -benchmem`. Can be provided multiple times.
    #[arg(long, value_name = "FILE", action = clap::ArgAction::Append, requires = "git_ref")]
    go_test_json: Vec<PathBuf>,

    /// Git reference the `--go-test-json` measurements were taken at
    #[arg(long)]
    git_ref: Option<String>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// JSON file with the current results
    #[arg(long, value_name = "FILE")]
    current: PathBuf,

    /// JSON file with the baseline results, usually the last release
    #[arg(long, value_name = "FILE")]
    baseline: PathBuf,

    /// Reduce both sides before comparing them
    #[arg(long, default_value_t = false)]
    reduce: bool,
}

#[derive(Args, Debug)]
struct LatestReleaseArgs {
    /// File containing the output of `git ls-remote --tags <repository>`
    #[arg(long, value_name = "FILE")]
    tags: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_local_logger()?;
    cli.execute()
}

impl Cli {
    fn execute(self) -> Result<()> {
        let config = AwfyConfig::load_with_override(
            self.config_name.as_deref(),
            self.grouping.map(Into::into),
        )?;
        let reducer = Reducer::new(config.reduce.grouping);
        let out = self.out.as_deref();

        match self.command {
            Commands::Reduce(args) => {
                log_section("Reducing measurements");
                let samples = args.load_samples()?;
                write_output(&reducer.reduce(samples), out)
            }
            Commands::Compare(args) => {
                log_section("Comparing results");
                let mut current = read_measurements(&args.current)?;
                let mut baseline = read_measurements(&args.baseline)?;
                if args.reduce {
                    current = reducer.reduce(current);
                    baseline = reducer.reduce(baseline);
                }
                let comparisons = Comparator.compare(&current, &baseline);
                info!(
                    "Compared {} benchmarks against {} baseline results",
                    comparisons.len(),
                    baseline.len()
                );
                write_output(&comparisons, out)
            }
            Commands::LatestRelease(args) => {
                log_section("Selecting the latest release");
                let listing = fs::read_to_string(&args.tags)
                    .with_context(|| format!("Failed to read {}", args.tags.display()))?;
                let releases = parse_ls_remote_tags(&listing)?;
                let latest = ReleaseSelector.select_latest(&releases)?;
                info!("Latest release is {}", latest.name);
                write_output(latest, out)
            }
        }
    }
}

impl ReduceArgs {
    fn load_samples(&self) -> Result<Vec<MicroBenchmarkDetails>> {
        ensure!(
            !self.input.is_empty() || !self.go_test_json.is_empty(),
            "Nothing to reduce: provide --input or --go-test-json"
        );

        let mut samples = Vec::new();
        for path in &self.input {
            samples.extend(read_measurements(path)?);
        }
        if let Some(git_ref) = &self.git_ref {
            for path in &self.go_test_json {
                let stdout = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                samples.extend(golang::parse_go_test_json(&stdout, git_ref)?);
            }
        }
        Ok(samples)
    }
}

fn write_output<T: Serialize + ?Sized>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("Output written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
