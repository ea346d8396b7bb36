//! Merchmock CLI — print-on-demand mockup workflow simulator.
//!
//! Delays and output directory are configurable via MOCKUP_* environment
//! variables; see merchmock-core's config module.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use merchmock_cli::{banner, init_tracing};
use merchmock_core::GeneratorConfig;
use merchmock_processing::{process_product_mockup, run_pipeline, ProductContentGenerator};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "merchmock", about = "Print-on-demand mockup workflow simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mockup from a product data JSON file
    Mockup {
        /// Path to the product data file
        file: PathBuf,
    },
    /// Generate a sample product data package
    Product {
        /// Theme tag to match: vintage, coffee, space, ... or "random"
        #[arg(long, default_value = "random")]
        theme: String,
    },
    /// Run the full demo pipeline (product generation, then mockup)
    Pipeline {
        /// Theme tag to match, or "random"
        #[arg(long, default_value = "random")]
        theme: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = GeneratorConfig::from_env().context("Failed to load generator configuration")?;

    match cli.command {
        Commands::Mockup { file } => {
            println!("{}", banner('=', 50));
            // Failure is logged inside the pipeline and reported here with
            // exit code 0; the exit code does not distinguish outcomes.
            match process_product_mockup(&file, config).await {
                Some(response) => {
                    print_json(&response.summarize())?;
                    println!("Mockup processing completed successfully");
                }
                None => println!("Mockup processing failed"),
            }
            println!("{}", banner('=', 50));
        }
        Commands::Product { theme } => {
            let generator = ProductContentGenerator::new(config.output_dir.clone());
            let product = generator.generate(&theme);
            generator.write_package(&product).await?;
            print_json(&product)?;
        }
        Commands::Pipeline { theme } => {
            let result = run_pipeline(&theme, config).await?;
            print_json(&result.mockup_data.summarize())?;
        }
    }

    Ok(())
}
