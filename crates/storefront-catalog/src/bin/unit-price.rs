//! # Unit Price Report
//!
//! Prints the unit-economics summary of product snapshots as JSON.
//!
//! ## Usage
//! ```bash
//! # Summarize a catalog API response
//! cargo run -p storefront-catalog --bin unit-price -- products.json
//!
//! # Read from stdin, indented output
//! curl -s "$STORE/products?fields=*variants.calculated_price" | unit-price --pretty
//!
//! # Also match English option titles
//! STOREFRONT_QUANTITY_MARKERS="количество,quantity" unit-price products.json
//! ```

use std::env;
use std::process::ExitCode;

use storefront_catalog::{logging, report, CatalogConfig, CatalogResult, SnapshotSource};
use storefront_core::PriceNormalizer;
use tracing::error;

fn print_help() {
    println!("Storefront Unit Price Report");
    println!();
    println!("Usage: unit-price [OPTIONS] [FILE...]");
    println!();
    println!("Reads product snapshots (JSON) from each FILE, or stdin when none is given");
    println!("or FILE is '-', and prints one unit-economics summary per product.");
    println!();
    println!("Options:");
    println!("  -p, --pretty       Indent the JSON output");
    println!("  -h, --help         Show this help message");
    println!();
    println!("Environment:");
    println!("  STOREFRONT_QUANTITY_MARKERS     Comma-separated option title markers");
    println!("  STOREFRONT_LEGACY_TITLE_MATCH   Match quantity option by title (default: true)");
    println!("  STOREFRONT_PRETTY_JSON          Indent the JSON output (default: false)");
    println!("  RUST_LOG                        Log filter (default: warn)");
}

fn run(args: &[String]) -> CatalogResult<()> {
    let config = CatalogConfig::load()?;
    let normalizer = PriceNormalizer::new(config.pricing_config()?);

    let mut pretty = config.pretty_json;
    let mut sources = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--pretty" | "-p" => pretty = true,
            _ => sources.push(SnapshotSource::from_arg(arg)),
        }
    }

    if sources.is_empty() {
        sources.push(SnapshotSource::Stdin);
    }

    let mut products = Vec::new();
    for source in &sources {
        products.extend(source.load()?);
    }

    let summaries = report::summarize_all(&normalizer, &products);
    println!("{}", report::render(&summaries, pretty)?);

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }

    logging::init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "unit-price failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
