use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

use phrasefreq::pipeline::observer::StageTimingObserver;
use phrasefreq::pipeline::runner::PhraseFreqPipeline;
use phrasefreq::pipeline::spec::PhraseSpec;
use phrasefreq::pipeline::validation::ValidationEngine;
use phrasefreq::{Error, Result};

/// Find the most frequently repeated phrases in a text document.
///
/// Prints one line per ranked phrase, `#rank:  (count) phrase`, best first.
/// Ties are ranked in arbitrary order.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input text file to scan
    #[arg(short = 'i', long, value_name = "FILE")]
    input: PathBuf,

    /// JSON run specification; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum phrase length in words
    #[arg(long, value_name = "WORDS")]
    min_len: Option<usize>,

    /// Maximum phrase length in words
    #[arg(long, value_name = "WORDS")]
    max_len: Option<usize>,

    /// Number of top phrases to report
    #[arg(long, value_name = "N")]
    top_k: Option<usize>,

    /// Treat unrecognized config fields as errors instead of warnings
    #[arg(long)]
    strict: bool,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut spec = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
                path: path.clone(),
                source,
            })?;
            PhraseSpec::from_json(&json).map_err(|source| Error::ParseConfig {
                path: path.clone(),
                source,
            })?
        }
        None => PhraseSpec::default(),
    };
    spec.strict |= cli.strict;
    spec.apply_overrides(cli.min_len, cli.max_len, cli.top_k);

    let report = ValidationEngine::with_defaults().validate(&spec);
    if report.has_errors() {
        return Err(Error::InvalidConfig(report));
    }
    for warning in report.warnings() {
        warn!("{warning}");
    }
    let cfg = spec.resolve();

    let text = fs::read_to_string(&cli.input).map_err(|source| Error::ReadInput {
        path: cli.input.clone(),
        source,
    })?;

    let pipeline = PhraseFreqPipeline::standard();
    let mut observer = StageTimingObserver::new();
    let result = pipeline.run(&text, &cfg, &mut observer);

    for (stage, stage_report) in observer.reports() {
        debug!(
            stage = %stage,
            elapsed_us = stage_report.elapsed().as_micros() as u64,
            "pipeline stage finished"
        );
    }

    for line in &result.lines {
        writeln!(out, "{line}").map_err(|source| Error::WriteOutput { source })?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_log_directive = match cli.debug {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_log_directive.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        error!("{e}");
        exit(1);
    }
}
