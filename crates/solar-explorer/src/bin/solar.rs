//! solar: offline conversion and rendering for the explorer dataset
//!
//! Run with: cargo run -p solar-explorer --features cli --bin solar -- --help

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solar_explorer::chart::generate_chart;
use solar_explorer::config::ExplorerConfig;
use solar_explorer::ingestion::{ConvertOptions, CsvConverter};
use solar_explorer::loader::{DataLoader, DatasetSource};
use solar_explorer::render::Page;
use solar_explorer::{SortDirection, SortField, ViewModel};

#[derive(Parser)]
#[command(name = "solar")]
#[command(about = "Solar-system dataset tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV source file into the JSON dataset
    Convert(ConvertArgs),

    /// Print the dataset as a table
    Table(TableArgs),

    /// Write the radius bar chart as SVG
    Chart(ChartArgs),
}

#[derive(Parser)]
struct ConvertArgs {
    /// Input CSV file
    input: PathBuf,

    /// Output JSON file
    output: PathBuf,

    /// Ignore the first (index) column
    #[arg(long)]
    skip_first_column: bool,

    /// Strip separators and units from numeric cells
    #[arg(long)]
    clean_numbers: bool,
}

#[derive(Parser)]
struct SortArgs {
    /// Field to sort by
    #[arg(long)]
    sort: Option<SortField>,

    /// Sort direction (asc or desc)
    #[arg(long, default_value = "desc")]
    dir: SortDirection,
}

#[derive(Parser)]
struct TableArgs {
    /// Dataset path or http(s) URL
    source: String,

    #[command(flatten)]
    sort: SortArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = TableFormat::Text)]
    format: TableFormat,
}

#[derive(Parser)]
struct ChartArgs {
    /// Dataset path or http(s) URL
    source: String,

    /// Output SVG file
    output: PathBuf,

    #[command(flatten)]
    sort: SortArgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableFormat {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "solar_explorer=debug"
    } else {
        "solar_explorer=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert(args) => convert(args),
        Commands::Table(args) => table(args).await,
        Commands::Chart(args) => chart(args).await,
    }
}

fn convert(args: ConvertArgs) -> anyhow::Result<()> {
    let converter = CsvConverter::new(ConvertOptions {
        skip_first_column: args.skip_first_column,
        clean_numbers: args.clean_numbers,
    });
    let count = converter
        .convert_file(&args.input, &args.output)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;
    println!(
        "{} {} bodies: {} -> {}",
        style("Converted").green().bold(),
        count,
        args.input.display(),
        args.output.display()
    );
    Ok(())
}

async fn load_view(source: &str, sort: &SortArgs) -> anyhow::Result<ViewModel> {
    let source = DatasetSource::parse(source);
    let bodies = DataLoader::new()
        .load(&source)
        .await
        .with_context(|| format!("Failed to load {}", source))?;
    let mut view = ViewModel::new(bodies);
    view.apply(sort.sort, sort.dir);
    Ok(view)
}

async fn table(args: TableArgs) -> anyhow::Result<()> {
    let view = load_view(&args.source, &args.sort).await?;
    let table = view.render();

    match args.format {
        TableFormat::Text => {
            let text = table.to_text();
            let mut lines = text.lines();
            if let Some(header) = lines.next() {
                println!("{}", style(header).bold());
            }
            for line in lines {
                println!("{}", line);
            }
        }
        TableFormat::Html => {
            let config = ExplorerConfig::load()?;
            let html = Page::new(&config.server.title, &table)
                .with_sort(view.field(), view.direction())
                .render();
            print!("{}", html);
        }
    }
    Ok(())
}

async fn chart(args: ChartArgs) -> anyhow::Result<()> {
    let view = load_view(&args.source, &args.sort).await?;
    let config = ExplorerConfig::load()?;
    let svg = generate_chart(view.records(), &config.chart)?;
    std::fs::write(&args.output, svg)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "{} {} bars to {}",
        style("Wrote").green().bold(),
        view.records().len(),
        args.output.display()
    );
    Ok(())
}
