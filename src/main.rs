//! shopstat CLI - synthetic e-commerce analytics reports.

use clap::{Parser, Subcommand};
use shopstat::Shopstat;
use std::path::PathBuf;
use std::process;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "shopstat")]
#[command(version)]
#[command(about = "Synthetic e-commerce analytics: charts, correlations, and KPI reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory to write charts and reports into
    #[arg(short, long, global = true)]
    out_dir: Option<PathBuf>,

    /// Records per sampled dataset
    #[arg(short, long, global = true, default_value = "1000")]
    samples: usize,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analysis and write all artifacts
    Report,

    /// Print the fixed KPI report
    Kpi,

    /// Write the styled catalog table and print its location
    Table,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(cli: Cli) -> shopstat::Result<()> {
    let mut builder = Shopstat::builder().samples(cli.samples);
    if let Some(dir) = cli.out_dir {
        builder = builder.out_dir(dir);
    }
    let shop = builder.build()?;

    match cli.command {
        Commands::Report => {
            let summary = shop.run_report()?;

            println!("Price vs discount  : r = {:.3}", summary.pricing.correlation);
            println!(
                "Price vs rating    : Pearson: {:.3}, Spearman: {:.3}",
                summary.ratings.pearson, summary.ratings.spearman
            );
            println!(
                "Discount vs rating : Correlation: {:.3}, P-value: {:.3}",
                summary.discounts.correlation, summary.discounts.p_value
            );
            println!(
                "Discount trend     : {:.1}% avg over {} days",
                summary.trend.avg_discount, summary.trend.days
            );
            println!();
            println!("{}", shop.kpi().render());
            println!("Artifacts in {}:", shop.workspace().out_dir.display());
            for name in shop.artifacts() {
                println!("  {name}");
            }
        }
        Commands::Kpi => {
            print!("{}", shop.kpi().render());
        }
        Commands::Table => {
            let path = shop.catalog().write()?;
            println!("Styled catalog written to {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{e}");
        process::exit(1);
    }
}
