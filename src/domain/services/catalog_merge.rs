//! # Catalog Merge
//!
//! Pure merge rules applied to provider answers.
//!
//! - [`merge_listings`]: concatenates listings in provider order and keeps the
//!   first entry seen for each identifier
//! - [`cheapest`]: picks the detail record with the lowest price, keeping the
//!   earlier provider on ties

use crate::domain::entities::{Movie, MovieDetail};
use std::collections::HashSet;

/// Merges listings from several providers.
///
/// Listings are consumed in the order given; for each identifier only the
/// first occurrence survives. Order of the surviving entries follows the
/// order they were first seen.
#[must_use]
pub fn merge_listings<I>(listings: I) -> Vec<Movie>
where
    I: IntoIterator<Item = Vec<Movie>>,
{
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .flatten()
        .filter(|movie| seen.insert(movie.id.clone()))
        .collect()
}

/// Returns the detail record with the lowest price, if any.
#[must_use]
pub fn cheapest<I>(details: I) -> Option<MovieDetail>
where
    I: IntoIterator<Item = MovieDetail>,
{
    details.into_iter().min_by_key(MovieDetail::price)
}
