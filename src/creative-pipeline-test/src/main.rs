//! Creative Pipeline Test — run the fixed brand/product fixtures through the
//! template pipeline and save the result.

use std::path::PathBuf;

use clap::Parser;
use creative_core::config::AppConfig;
use creative_core::store::write_json_array;
use creative_core::telemetry::init_tracing;
use creative_core::CreativeResult;
use creative_dco::templates::{fixture_creatives, PIPELINE_FIXTURES};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "creative-pipeline-test")]
#[command(about = "Test creative generation pipeline with sample data")]
#[command(version)]
struct Cli {
    /// Where to write the generated creatives
    #[arg(long, default_value = "test_creatives_output.json")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result = AppConfig::load().and_then(|config| {
        init_tracing(&config.logging);
        run(&cli)
    });

    if let Err(e) = result {
        eprintln!("Error in test pipeline: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CreativeResult<()> {
    let rule = "=".repeat(80);
    println!("\n{rule}");
    println!("CREATIVE GENERATION TEST");
    println!("{rule}\n");

    let mut generated = Vec::new();

    for (offset, fixture) in PIPELINE_FIXTURES.iter().enumerate() {
        let index = offset + 1;
        println!("Test Case {index}: {} - {}", fixture.brand, fixture.product);
        println!("Tone: {}\n", fixture.tone);

        for creative in fixture_creatives(index, fixture) {
            println!("  Creative ID: {}", creative.id);
            println!("  Headline: {}", creative.headline);
            println!("  Description: {}", creative.description);
            println!("  CTA: {}", creative.cta);
            println!("{}", "-".repeat(80));
            generated.push(creative);
        }
    }

    write_json_array(&cli.output, &generated)?;
    info!(count = generated.len(), path = %cli.output.display(), "fixture creatives saved");

    println!("\nTest complete. Generated {} creatives.", generated.len());
    println!("Results saved to: {}\n", cli.output.display());
    Ok(())
}
