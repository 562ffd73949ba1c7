//! Results diffing
//!
//! Pairs up listings between two results files product by product and
//! emits a diff-style report: `-` for listings only in the first file,
//! `+` for listings only in the second.

use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

#[derive(Args)]
pub struct CompareArgs {
    /// First file containing JSON objects (one per line) describing the results
    #[arg(value_name = "FILENAME")]
    results_a: PathBuf,

    /// Second file containing JSON objects (one per line) describing the results
    #[arg(value_name = "FILENAME")]
    results_b: PathBuf,

    /// Write the differences between the results to this file
    #[arg(short, long, value_name = "FILENAME", default_value = "compare.diff")]
    output: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    product_name: String,
    listings: Vec<RawListing>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    title: String,
    manufacturer: String,
    price: String,
    currency: String,
}

/// A listing reduced to its comparable fields, with pairing state.
#[derive(Debug)]
struct ComparableListing {
    title: String,
    manufacturer: String,
    price: String,
    currency: String,
    matched: bool,
}

impl From<RawListing> for ComparableListing {
    fn from(raw: RawListing) -> Self {
        Self {
            title: raw.title.to_lowercase(),
            manufacturer: raw.manufacturer.to_lowercase(),
            price: raw.price,
            currency: raw.currency,
            matched: false,
        }
    }
}

impl PartialEq for ComparableListing {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.manufacturer == other.manufacturer
            && self.currency == other.currency
            && self.price == other.price
    }
}

/// Read a results file, keeping product order; listings are sorted by price
/// so pairing is insensitive to result ordering.
fn read_results(path: &Path) -> Result<Vec<(String, Vec<ComparableListing>)>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut results = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawResult = serde_json::from_str(line)
            .with_context(|| format!("{}:{}", path.display(), number + 1))?;
        let mut listings: Vec<ComparableListing> =
            raw.listings.into_iter().map(Into::into).collect();
        listings.sort_by(|a, b| a.price.cmp(&b.price));
        results.push((raw.product_name, listings));
    }
    Ok(results)
}

pub fn run(args: CompareArgs) -> Result<()> {
    let results_a = read_results(&args.results_a)?;
    let mut results_b: HashMap<String, Vec<ComparableListing>> =
        read_results(&args.results_b)?.into_iter().collect();

    let file = fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    for (name, mut listings_a) in results_a {
        if let Some(listings_b) = results_b.get_mut(&name) {
            for a in listings_a.iter_mut() {
                for b in listings_b.iter_mut() {
                    if b.matched {
                        continue;
                    }
                    if *a == *b {
                        a.matched = true;
                        b.matched = true;
                        break;
                    }
                }
            }
        }

        let mut first_diff = true;
        for a in &listings_a {
            if !a.matched {
                if first_diff {
                    writeln!(out, "{name}:")?;
                    first_diff = false;
                }
                writeln!(out, "- {}", a.title)?;
            }
        }
        if let Some(listings_b) = results_b.get(&name) {
            for b in listings_b {
                if !b.matched {
                    if first_diff {
                        writeln!(out, "{name}:")?;
                        first_diff = false;
                    }
                    writeln!(out, "+ {}", b.title)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
