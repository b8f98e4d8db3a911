//! Tone Creatives — template creatives for a brand and product in one of
//! the fixed tones. No model calls.

use std::path::PathBuf;

use clap::Parser;
use creative_core::config::AppConfig;
use creative_core::store::write_json_array;
use creative_core::telemetry::init_tracing;
use creative_core::types::{AdFormat, Tone};
use creative_core::CreativeResult;
use creative_dco::ToneTemplateGenerator;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tone-creatives")]
#[command(about = "Generate template creatives in a fixed tone")]
#[command(version)]
struct Cli {
    /// Brand name
    #[arg(long)]
    brand: String,

    /// Product name
    #[arg(long)]
    product: String,

    /// Tone: energetic, professional, casual, luxury
    #[arg(long, default_value = "energetic")]
    tone: Tone,

    /// Number of creatives
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Comma-separated ad formats (single_image, carousel)
    #[arg(
        long = "format",
        value_delimiter = ',',
        default_value = "single_image,carousel"
    )]
    formats: Vec<AdFormat>,

    /// Also write the creatives to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = AppConfig::load().and_then(|config| {
        init_tracing(&config.logging);
        run(&cli)
    });

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CreativeResult<()> {
    let generator = ToneTemplateGenerator::new(&cli.brand, &cli.product, cli.tone);
    let creatives = generator.generate(cli.count, &cli.formats)?;

    println!("\n{} {} ({})", cli.brand, cli.product, cli.tone);
    println!("Tone: {}", cli.tone.description());
    println!("{}", "=".repeat(60));

    for creative in &creatives {
        println!("  Creative ID: {}", creative.id);
        println!("  Headline: {}", creative.headline);
        println!("  Description: {}", creative.description);
        println!("  CTA: {}", creative.cta);
        if let Some(format) = creative.format {
            println!("  Format: {format}");
        }
        println!("{}", "-".repeat(60));
    }

    if let Some(path) = &cli.output {
        write_json_array(path, &creatives)?;
        info!(count = creatives.len(), path = %path.display(), "tone creatives saved");
        println!("Saved to: {}", path.display());
    }

    Ok(())
}
