use std::path::PathBuf;

use overtime_grid::api::{
    ColumnPolicy, DisplayTarget, GridPlotter, PlotterConfig, SeriesKind, show,
};
use overtime_grid::data::{DEFAULT_INPUT_PATH, DEFAULT_SPECIES_KEYS, Dataset};
use overtime_grid::telemetry::init_default_tracing;
use tracing::info;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    headless: bool,
    columns: Option<ColumnPolicy>,
    histogram: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => PlotterConfig::load(path).map_err(|err| err.to_string())?,
        None => PlotterConfig::default(),
    };
    if let Some(policy) = args.columns {
        config.column_policy = policy;
    }
    if args.histogram {
        config.series_kind = SeriesKind::Histogram;
    }
    if let Some(output) = args.output {
        config.display = DisplayTarget::Png(output);
    } else if args.headless {
        config.display = DisplayTarget::Headless;
    }

    let dataset = Dataset::load(&args.input).map_err(|err| err.to_string())?;
    let figure = GridPlotter::new(config.clone())
        .plot(&dataset, &DEFAULT_SPECIES_KEYS)
        .map_err(|err| err.to_string())?;
    info!(
        input = %args.input.display(),
        rows = figure.rows(),
        cols = figure.cols(),
        subplots = figure.populated_count(),
        "plotted overtime series"
    );

    show(&figure, &config).map_err(|err| err.to_string())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = PathBuf::from(DEFAULT_INPUT_PATH);
    let mut config: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut headless = false;
    let mut columns: Option<ColumnPolicy> = None;
    let mut histogram = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--columns" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --columns".to_owned())?;
                columns = Some(parse_columns(&value)?);
            }
            "--headless" => headless = true,
            "--histogram" => histogram = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        input,
        config,
        output,
        headless,
        columns,
        histogram,
    })
}

fn parse_columns(value: &str) -> Result<ColumnPolicy, String> {
    if value == "dynamic" {
        return Ok(ColumnPolicy::Dynamic);
    }
    match value.parse::<usize>() {
        Ok(columns) if columns > 0 => Ok(ColumnPolicy::Fixed(columns)),
        _ => Err(format!(
            "invalid value for --columns: `{value}` (expected `dynamic` or a positive integer)"
        )),
    }
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: overtime-grid [options]\n\nOptions:\n  --input <path>       Statistics dump to plot (default: {DEFAULT_INPUT_PATH})\n  --config <path>      PlotterConfig json file\n  --output <png>       Write the figure as PNG (feature `cairo-backend`)\n  --headless           Lay out and validate the figure without drawing\n  --columns <n>        Grid columns: `dynamic` or a fixed count (legacy: 2)\n  --histogram          Draw unit-width histograms instead of lines\n  -h, --help           Show this message"
    )
}
