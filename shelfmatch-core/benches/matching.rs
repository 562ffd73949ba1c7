//! Matching benchmarks
//!
//! Run with: cargo bench --package shelfmatch-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shelfmatch_core::{match_listings, Catalog, Listing, Product};

fn synthetic_products() -> Vec<Product> {
    let mut products = Vec::new();
    for m in 0..20 {
        for p in 0..50 {
            let line = format!(
                r#"{{"product_name":"Maker{m} Cam {p}","manufacturer":"Maker{m}","model":"mk-{p}x{m}","family":"proline"}}"#
            );
            products.push(Product::parse(&line).unwrap());
        }
    }
    products
}

fn synthetic_listings() -> Vec<Listing> {
    let mut listings = Vec::new();
    for m in 0..20 {
        for p in 0..50 {
            let line = format!(
                r#"{{"title":"maker{m} proline mk {p}x{m} digital camera bundle","manufacturer":"maker{m} retail","price":"199.99","currency":"USD"}}"#
            );
            listings.push(Listing::parse(&line).unwrap());
        }
    }
    listings
}

fn bench_prepare(c: &mut Criterion) {
    let products = synthetic_products();
    c.bench_function("catalog_prepare_1000_products", |b| {
        b.iter(|| {
            let catalog = Catalog::from_products(black_box(products.clone()));
            black_box(catalog.prepare().unwrap())
        })
    });
}

fn bench_match(c: &mut Criterion) {
    let products = synthetic_products();
    let listings = synthetic_listings();
    c.bench_function("match_1000_listings", |b| {
        b.iter(|| {
            let mut catalog = Catalog::from_products(products.clone()).prepare().unwrap();
            black_box(match_listings(&mut catalog, black_box(&listings)))
        })
    });
}

criterion_group!(benches, bench_prepare, bench_match);
criterion_main!(benches);
