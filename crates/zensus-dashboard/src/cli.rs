use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use zensus_model::{RegionLevel, Selection};
use zensus_xlsx::load_dataset;

use crate::{render, DashboardView};

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// CLI arguments for the `zensus-dashboard` binary.
///
/// This lives in the library crate so the binary stays a thin wrapper.
#[derive(Parser)]
#[command(
    name = "zensus-dashboard",
    about = "Render Zensus 2022 housing statistics for a region as text or JSON."
)]
pub struct Args {
    /// Source workbook (e.g. `Data_wohnungen.xlsx`).
    data: PathBuf,

    /// Region level: `federal`, `state`, or `district` (German source labels
    /// are accepted as well).
    #[arg(long, default_value = "federal")]
    level: RegionLevel,

    /// Region name. Defaults to the first region at the chosen level, in the
    /// alphabetical order the region selector would offer.
    #[arg(long)]
    region: Option<String>,

    /// List the region names available at the chosen level and exit.
    #[arg(long)]
    list_regions: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub fn run(args: Args) -> Result<()> {
    let result = load_dataset(&args.data)
        .with_context(|| format!("failed to load dataset from {}", args.data.display()))?;
    for warning in &result.warnings {
        eprintln!("warning: {}", warning.message);
    }
    let dataset = result.dataset;

    if args.list_regions {
        for region in dataset.regions_at(args.level) {
            println!("{region}");
        }
        return Ok(());
    }

    let region = match args.region {
        Some(region) => region,
        None => dataset
            .regions_at(args.level)
            .first()
            .map(|name| name.to_string())
            .with_context(|| format!("no regions at level {}", args.level))?,
    };

    let selection = Selection::new(args.level, region);
    let view = render(&dataset, &selection)?;

    match args.format {
        OutputFormat::Text => print_text(&view),
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &view)?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn print_text(view: &DashboardView) {
    println!("{}", view.title);
    println!();
    println!("  Net cold rent per m²: {}", view.headline.avg_rent_per_sqm);
    println!("  Vacancy rate:         {}", view.headline.vacancy_rate_pct);
    println!("  Ownership rate:       {}", view.headline.ownership_rate_pct);
    println!("  Area per apartment:   {}", view.headline.avg_area_per_apartment);

    for chart in &view.charts {
        println!();
        println!("{}", chart.title);
        for (index, category) in chart.categories.iter().enumerate() {
            let value = match (chart.percents[index], chart.values[index]) {
                (Some(percent), _) => format!("{percent:.2} %"),
                (None, Some(quantity)) => format!("{quantity}"),
                (None, None) => "no data".to_string(),
            };
            println!("  {category}: {value}");
        }
    }
}
