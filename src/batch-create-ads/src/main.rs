//! Batch Create Ads — prepare one paused ad per creative in a JSON file.
//!
//! Dry run only: ads are printed and logged, never submitted to Meta.

use std::path::PathBuf;

use clap::Parser;
use creative_ads::{BatchAdCreator, BatchItem, BatchReport};
use creative_core::config::AppConfig;
use creative_core::store::{read_json_value, write_json_array};
use creative_core::telemetry::init_tracing;
use creative_core::{CreativeError, CreativeResult};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "batch-create-ads")]
#[command(about = "Batch create ads from creatives")]
#[command(version)]
struct Cli {
    /// Meta Business Account ID
    #[arg(long)]
    account_id: String,

    /// Ad Set ID for ad creation
    #[arg(long)]
    adset_id: String,

    /// Path to creatives JSON file
    #[arg(long)]
    creatives: PathBuf,

    /// Write the prepared ads to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(report) if report.has_errors() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => exit_with(&e),
    }
}

fn exit_with(err: &CreativeError) -> ! {
    match err {
        CreativeError::Config(_)
        | CreativeError::Validation(_)
        | CreativeError::FileNotFound(_)
        | CreativeError::Parse(_) => eprintln!("{err}"),
        _ => eprintln!("Error creating ads: {err}"),
    }
    std::process::exit(1);
}

fn run(cli: &Cli, config: &AppConfig) -> CreativeResult<BatchReport> {
    config.meta.require_access_token()?;
    let creatives = read_json_value(&cli.creatives)?;

    info!(account_id = %cli.account_id, adset_id = %cli.adset_id, "preparing ads");
    let report = BatchAdCreator::dry_run().run(&cli.adset_id, &creatives)?;

    print_report(&report);

    if let Some(path) = &cli.output {
        write_json_array(path, &report.prepared)?;
        println!("Prepared ads saved to: {}", path.display());
    }

    Ok(report)
}

fn print_report(report: &BatchReport) {
    println!(
        "\nCreating {} ads in AdSet {}...\n",
        report.total(),
        report.adset_id
    );
    println!("{}", "=".repeat(80));

    for item in report.items() {
        match item {
            BatchItem::Prepared(ad) => {
                println!("Creating Ad {}: {}", ad.index, ad.name);
                println!("  Headline: {}", ad.headline.as_deref().unwrap_or("N/A"));
                println!("  Description: {}", ad.description.as_deref().unwrap_or("N/A"));
                println!("  CTA: {}", ad.cta.as_deref().unwrap_or("N/A"));
                println!("  Status: {}", ad.status);
                println!(
                    "  [DRY RUN] Ad prepared but NOT created in Meta (API call not yet active)\n"
                );
            }
            BatchItem::Failed(error) => eprintln!("{error}"),
        }
    }

    println!("{}", "=".repeat(80));
    println!(
        "Summary: {} ads prepared (dry run), {} errors\n",
        report.prepared.len(),
        report.errors.len()
    );
}
