//! Generate Creatives — produce N Meta ad creative variations, rotating hook
//! types and formats, with Gemini-written copy when `GEMINI_API_KEY` is set.

use std::path::PathBuf;

use clap::Parser;
use creative_core::config::AppConfig;
use creative_core::store::write_json_array;
use creative_core::telemetry::init_tracing;
use creative_core::types::AdFormat;
use creative_core::CreativeResult;
use creative_dco::CreativeGenerator;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "generate-creatives")]
#[command(about = "Generate Meta ad creatives with AI")]
#[command(version)]
struct Cli {
    /// Meta ad account ID
    #[arg(long)]
    account_id: String,

    /// Product or service name
    #[arg(long)]
    product: String,

    /// Target audience description
    #[arg(long)]
    audience: String,

    /// Number of variations
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Comma-separated ad formats (single_image, carousel)
    #[arg(
        long = "format",
        value_delimiter = ',',
        default_value = "single_image,carousel"
    )]
    formats: Vec<AdFormat>,

    /// Output file
    #[arg(long, default_value = "generated_creatives.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.logging);

    match run(&cli, &config).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the file was written but some copy failed.
async fn run(cli: &Cli, config: &AppConfig) -> CreativeResult<bool> {
    println!("\nGenerating {} creative variations", cli.count);
    println!("{}", "=".repeat(60));

    let generator = CreativeGenerator::from_config(cli.account_id.clone(), &config.gemini)?;
    info!(
        account_id = %generator.account_id(),
        ai = generator.uses_model(),
        model = %config.gemini.model,
        "creative generator ready"
    );

    let report = generator
        .generate_variations(&cli.product, &cli.audience, cli.count, &cli.formats)
        .await?;

    write_json_array(&cli.output, &report.variations)?;

    println!("\nGenerated {} creatives", report.variations.len());
    println!("Saved to: {}", cli.output.display());

    for variation in report.variations.iter().take(3) {
        println!(
            "\n  {}: {}",
            variation.variation_id,
            variation.copy.as_deref().unwrap_or("<generation failed>")
        );
    }

    if report.variations.len() > 3 {
        println!(
            "\n  ... and {} more variations",
            report.variations.len() - 3
        );
    }

    if report.has_failures() {
        eprintln!(
            "\n{} of {} variations failed copy generation",
            report.failed,
            report.variations.len()
        );
        return Ok(false);
    }

    Ok(true)
}
