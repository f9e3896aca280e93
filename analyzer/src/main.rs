mod generator;
mod workflow;

use anyhow::{bail, Context};
use clap::Parser;
use generator::profile::{write_trajectory, GeneratorConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use trajcore::report::{format_decimal, DEFAULT_LOG_PATH};
use trajcore::{FirstSamplePolicy, TimeRequest};
use workflow::config::WorkflowConfig;
use workflow::runner::{Runner, WorkflowResult};

#[derive(Parser)]
#[command(author, version, about = "Velocity queries over recorded WGS84 trajectory logs")]
struct Args {
    /// Trajectory log with time, latitude, longitude and altitude columns
    #[arg(long)]
    input: Option<PathBuf>,
    /// Query time in seconds since the Unix epoch (repeatable)
    #[arg(long = "at")]
    at: Vec<TimeRequest>,
    /// Append-only report log [default: stdout.txt]
    #[arg(long)]
    log: Option<PathBuf>,
    /// Value of the first speed sample: zero, nan or drop [default: zero]
    #[arg(long)]
    first_sample: Option<FirstSamplePolicy>,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Print a summary of the profile and the head of each column
    #[arg(long, default_value_t = false)]
    describe: bool,
    /// Write the computed profile as JSON
    #[arg(long)]
    dump_json: Option<PathBuf>,
    /// Write a synthetic trajectory log and exit unless a query run is configured
    #[arg(long)]
    generate: Option<PathBuf>,
    #[arg(long, default_value_t = 2500)]
    samples: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.generate {
        let config = GeneratorConfig {
            samples: args.samples,
            seed: args.seed,
            ..Default::default()
        };
        let rows = write_trajectory(path, &config)?;
        println!("Generated {} samples -> {}", rows, path.display());
    }

    let workflow_config = match (&args.workflow, &args.input) {
        (Some(path), input) => WorkflowConfig::load(path)?
            .with_overrides(input.clone(), args.log.clone(), args.first_sample)
            .with_extra_queries(args.at.iter().copied()),
        (None, Some(input)) => WorkflowConfig::from_args(
            input.clone(),
            args.log.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
            args.first_sample.unwrap_or_default(),
            args.at.clone(),
        ),
        (None, None) if args.generate.is_some() => return Ok(()),
        (None, None) => bail!("either --input or --workflow is required"),
    };

    let runner = Runner::new(workflow_config);
    let result = runner.execute()?;

    if args.describe {
        describe(&result, &mut io::stdout().lock()).context("printing profile description")?;
    }

    if let Some(path) = &args.dump_json {
        let file = File::create(path)
            .with_context(|| format!("creating profile dump {}", path.display()))?;
        result
            .profile
            .write_json(BufWriter::new(file))
            .with_context(|| format!("writing profile dump {}", path.display()))?;
    }

    Ok(())
}

/// Rows shown per column by `--describe`.
const HEAD: usize = 10;

fn describe<W: Write>(result: &WorkflowResult, out: &mut W) -> io::Result<()> {
    let summary = &result.summary;
    writeln!(out, "Answered {} velocity queries", result.reports.len())?;
    writeln!(
        out,
        "Speed samples {} (finite {}), mean {} m/s, min {} m/s, max {} m/s",
        summary.count,
        summary.finite,
        format_decimal(summary.mean),
        format_decimal(summary.min),
        format_decimal(summary.max)
    )?;

    let anomalies = result.profile.speed.anomalies();
    if !anomalies.is_empty() {
        writeln!(out, "Non-finite speed samples at indices {:?}", anomalies)?;
    }

    writeln!(out, "First samples [s, deg, deg, km]:")?;
    for (index, sample) in result.profile.samples.samples().iter().take(HEAD).enumerate() {
        writeln!(
            out,
            "  {:>4}  t={}  lat={}  lon={}  alt={}",
            index,
            format_decimal(sample.time),
            format_decimal(sample.latitude),
            format_decimal(sample.longitude),
            format_decimal(sample.altitude)
        )?;
    }

    writeln!(out, "First ECEF positions [meters]:")?;
    for (index, position) in result.profile.positions.positions().take(HEAD).enumerate() {
        writeln!(
            out,
            "  {:>4}  x={:.3}  y={:.3}  z={:.3}",
            index, position.x, position.y, position.z
        )?;
    }

    writeln!(out, "First speed samples [m/s]:")?;
    let speed = &result.profile.speed;
    for (index, (time, value)) in speed.time().iter().zip(speed.speed()).take(HEAD).enumerate() {
        writeln!(
            out,
            "  {:>4}  t={}  v={}",
            index,
            format_decimal(*time),
            format_decimal(*value)
        )?;
    }
    Ok(())
}
