// File: crates/sparkline-demo/src/main.rs
// Summary: Demo loads a numeric column from CSV (or inline values) and writes an SVG sparkline.

use anyhow::{Context, Result};
use clap::Parser;
use sparkline_core::{IdAllocator, PointerEvent, Sparkline, SparklineConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sparkline-demo", about = "Render a sparkline SVG from CSV or inline values")]
struct Cli {
    /// CSV file to read samples from
    input: Option<PathBuf>,

    /// Column to plot (defaults to close/value, then the first numeric column)
    #[arg(long)]
    column: Option<String>,

    /// Inline samples, comma separated (overrides CSV and config data)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<f64>>,

    /// TOML file with options and optional `data`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    stroke_width: Option<f64>,
    #[arg(long)]
    background: Option<String>,
    #[arg(long)]
    no_animate: bool,
    #[arg(long)]
    no_dots: bool,
    #[arg(long)]
    no_tooltip: bool,

    /// Render a hover frame with the pointer at this x offset instead of the animated document
    #[arg(long)]
    hover_x: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(p) => SparklineConfig::load(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => SparklineConfig::default(),
    };
    apply_overrides(&cli, &mut config);

    if let Some(values) = &cli.values {
        config.data = values.clone();
    } else if let Some(raw) = &cli.input {
        tracing::info!("Using input file: {}", raw.display());
        config.data = load_column_csv(raw, cli.column.as_deref())
            .with_context(|| format!("failed to load CSV '{}'", raw.display()))?;
    }
    tracing::info!("Loaded {} samples", config.data.len());
    if config.data.is_empty() {
        tracing::warn!("empty series; nothing to render");
        return Ok(());
    }

    let out = cli.out.clone().unwrap_or_else(|| out_name_for(cli.input.as_deref()));
    let mut ids = IdAllocator::default();
    let mut chart = Sparkline::from_config(ids.allocate(), config)?;

    match cli.hover_x {
        Some(x) => {
            let idx = chart.handle_event(PointerEvent::Move { x });
            tracing::info!("Hover at x={x} -> index {idx:?}");
            // a single saved frame has no later frames to play the reveal in
            chart.finish_reveal();
            let frame = chart.render().context("render hover frame")?;
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, frame).with_context(|| format!("writing {}", out.display()))?;
        }
        None => {
            chart.write_svg(&out)?;
        }
    }
    tracing::info!("Wrote {}", out.display());
    Ok(())
}

fn apply_overrides(cli: &Cli, config: &mut SparklineConfig) {
    let o = &mut config.options;
    if let Some(w) = cli.width { o.width = w; }
    if let Some(h) = cli.height { o.height = h; }
    if let Some(s) = cli.stroke_width { o.stroke_width = s; }
    if let Some(bg) = &cli.background { o.background_color = bg.clone(); }
    if cli.no_animate { o.animate = false; }
    if cli.no_dots { o.show_dots = false; }
    if cli.no_tooltip { o.show_tooltip = false; }
}

/// Produce output file name like target/out/sparkline_<stem>.svg
fn out_name_for(input: Option<&Path>) -> PathBuf {
    let stem = input.and_then(|p| p.file_stem()).and_then(|s| s.to_str()).unwrap_or("");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push("sparkline.svg");
    } else {
        out.push(format!("sparkline_{stem}.svg"));
    }
    out
}

/// Load one numeric column from a CSV with headers. Rows whose cell does not
/// parse as a number are skipped.
fn load_column_csv(path: &Path, column: Option<&str>) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let parse = |rec: &csv::StringRecord, ix: usize| rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok());

    let col = match column {
        Some(name) => idx(&[name.to_lowercase().as_str()])
            .with_context(|| format!("column '{}' not found in {:?}", name, headers))?,
        None => match idx(&["close", "value", "c", "y"]) {
            Some(ix) => ix,
            None => (0..headers.len())
                .find(|&ix| records.first().and_then(|r| parse(r, ix)).is_some())
                .context("no numeric column found")?,
        },
    };
    tracing::info!("Plotting column '{}'", headers[col]);

    Ok(records.iter().filter_map(|r| parse(r, col)).collect())
}
