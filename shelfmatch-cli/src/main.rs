//! shelfmatch command-line front-end
//!
//! Thin glue over `shelfmatch-core`: reads NDJSON product and listing
//! feeds, runs the matching engine, and writes one result object per
//! product. The `compare` subcommand diffs two results files.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shelfmatch_core::{
    match_listings, Catalog, Listing, MatchError, PreparedCatalog, PreparedProduct, Product,
};

mod compare;

#[derive(Parser)]
#[command(
    name = "shelfmatch",
    about = "Matches items from merchant listings to known products",
    version
)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match listings against the product catalog
    Match(MatchArgs),
    /// Diff two results files
    Compare(compare::CompareArgs),
}

#[derive(Args)]
struct MatchArgs {
    /// File containing JSON objects (one per line) describing the products
    #[arg(short, long, value_name = "PRODUCTS_FILE", default_value = "data/products.txt")]
    products: PathBuf,

    /// File containing JSON objects (one per line) containing the listings
    #[arg(short, long, value_name = "LISTINGS_FILE", default_value = "data/listings.txt")]
    listings: PathBuf,

    /// Write results to this file (one JSON object per line, naming a
    /// product and giving an array of matched listing objects)
    #[arg(short, long, value_name = "RESULTS_FILE", default_value = "data/results.txt")]
    results: PathBuf,

    /// Do not write result objects for products with no matched listings
    #[arg(long)]
    suppress_empty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Match(args) => run_match(args),
        Command::Compare(args) => compare::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "shelfmatch=debug,shelfmatch_core=debug"
    } else {
        "shelfmatch=info,shelfmatch_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_match(args: MatchArgs) -> Result<()> {
    let products = read_records(&args.products, Product::parse)?;
    let listings = read_records(&args.listings, Listing::parse)?;
    info!(
        products = products.len(),
        listings = listings.len(),
        "read input data"
    );

    let mut catalog = Catalog::from_products(products).prepare()?;
    match_listings(&mut catalog, &listings);

    write_results(&args.results, &catalog, &listings, args.suppress_empty)
        .with_context(|| format!("writing results to {}", args.results.display()))
}

/// Read one record per non-blank line, aborting on the first malformed one.
fn read_records<T>(path: &Path, parse: fn(&str) -> Result<T, MatchError>) -> Result<Vec<T>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut records = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse(line)
            .with_context(|| format!("{}:{}", path.display(), number + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn write_results(
    path: &Path,
    catalog: &PreparedCatalog,
    listings: &[Listing],
    suppress_empty: bool,
) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    for product in catalog.products_in_input_order() {
        if product.listings.is_empty() && suppress_empty {
            continue;
        }
        out.write_all(result_line(product, listings)?.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// One compact result object. Matched listings keep their original
/// serialization verbatim.
fn result_line(product: &PreparedProduct, listings: &[Listing]) -> Result<String> {
    let mut line = format!(
        "{{\"product_name\":{},\"listings\":[",
        serde_json::to_string(&product.product.name)?
    );
    for (i, id) in product.listings.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&listings[id.0].source);
    }
    line.push_str("]}\n");
    Ok(line)
}
