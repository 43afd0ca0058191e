use anyhow::Context;
use clap::Parser;
use series_bucketizer::logging;
use series_bucketizer::series::{
    MalformedPolicy, RangeMode, SeriesOptions, SeriesRequest, TabularResult, TimeBucketizer,
};
use series_bucketizer::shared::config::load_settings;
use series_bucketizer::shared::datetime::Granularity;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "series-bucketizer")]
#[command(
    about = "Regularize a tabular query result into a gap-filled chart series",
    long_about = None
)]
struct Args {
    /// JSON result file shaped like {"rows": [...]} (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Column holding timestamps
    #[arg(short, long)]
    time_column: String,

    /// Column holding values
    #[arg(short = 'c', long)]
    value_column: String,

    /// yearly, monthly, daily, hourly, minutely or secondly (unknown names mean hourly)
    #[arg(short, long, default_value = "hourly")]
    granularity: String,

    /// Drop rows with unparseable timestamps instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Require rows in time order and bound the axis by the first and last row
    #[arg(long)]
    ascending: bool,

    /// Maximum number of buckets before giving up
    #[arg(long)]
    max_buckets: Option<usize>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn read_result(input: Option<&PathBuf>) -> anyhow::Result<TabularResult> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("parsing query result JSON")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings().context("loading configuration")?;
    logging::init(&settings.logging)?;

    let mut options = SeriesOptions::from_settings(&settings);
    if args.skip_malformed {
        options = options.with_malformed(MalformedPolicy::Skip);
    }
    if args.ascending {
        options = options.with_range(RangeMode::Ascending);
    }
    if let Some(max_buckets) = args.max_buckets {
        options = options.with_max_buckets(max_buckets);
    }

    let result = read_result(args.input.as_ref())?;
    let request = SeriesRequest::new(
        &args.time_column,
        &args.value_column,
        Granularity::parse_or_default(&args.granularity),
    );
    info!(
        rows = result.len(),
        granularity = %request.granularity,
        "Computing series"
    );

    let chart = TimeBucketizer::new(options)
        .compute_request(&result, &request)
        .inspect_err(|e| e.log_error())?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    println!("{out}");
    Ok(())
}
