//! Benchmarks for the listing merge and cheapest-offer selection.
//!
//! Run with: cargo bench --bench movie_merge

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use movie_gateway::domain::entities::{Movie, MovieDetail};
use movie_gateway::domain::services::{cheapest, merge_listings};
use movie_gateway::domain::value_objects::MovieId;
use rust_decimal::Decimal;
use std::hint::black_box;

fn listing(start: usize, len: usize) -> Vec<Movie> {
    (start..start + len)
        .map(|n| {
            Movie::new(
                MovieId::new(format!("{n:07}")),
                format!("Movie {n}"),
                "movie",
                "",
                "2000",
            )
        })
        .collect()
}

fn bench_merge_listings(c: &mut Criterion) {
    // Half of each listing overlaps with the other.
    let cinema = listing(0, 1_000);
    let film = listing(500, 1_000);

    c.bench_function("merge_listings_2x1000", |b| {
        b.iter_batched(
            || vec![cinema.clone(), film.clone()],
            |listings| black_box(merge_listings(listings)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_cheapest(c: &mut Criterion) {
    let offers: Vec<MovieDetail> = (0..16)
        .map(|n| {
            MovieDetail::new(
                Movie::new(MovieId::new("0076759"), "A New Hope", "movie", "", "1977"),
                Decimal::new(2_000 - n * 37, 2),
            )
        })
        .collect();

    c.bench_function("cheapest_of_16", |b| {
        b.iter_batched(
            || offers.clone(),
            |offers| black_box(cheapest(offers)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_merge_listings, bench_cheapest);
criterion_main!(benches);
