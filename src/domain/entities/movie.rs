//! # Movie Entities
//!
//! Provider-independent movie records.
//!
//! [`Movie`] is the listing summary returned by every provider's catalog
//! endpoint. [`MovieDetail`] adds the descriptive fields and the
//! provider-specific price used to choose between duplicate lookups.
//!
//! Both are transient: they are built from a provider response, live for the
//! duration of one aggregation, and are then mapped to wire responses.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::domain::entities::movie::{Movie, MovieDetail};
//! use movie_gateway::domain::value_objects::MovieId;
//! use rust_decimal::Decimal;
//!
//! let movie = Movie::new(
//!     MovieId::new("0076759"),
//!     "Star Wars",
//!     "movie",
//!     "https://img/sw.jpg",
//!     "1977",
//! );
//! let detail = MovieDetail::new(movie, Decimal::new(1299, 2));
//! assert_eq!(detail.id().as_str(), "0076759");
//! ```

use crate::domain::value_objects::MovieId;
use rust_decimal::Decimal;

/// Listing summary of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Normalized identifier.
    pub id: MovieId,
    /// Title.
    pub title: String,
    /// Kind of entry, usually `movie`.
    pub movie_type: String,
    /// Poster image URL.
    pub poster: String,
    /// Release year as published by the provider.
    pub year: String,
}

impl Movie {
    /// Creates a listing summary.
    #[must_use]
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        movie_type: impl Into<String>,
        poster: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            movie_type: movie_type.into(),
            poster: poster.into(),
            year: year.into(),
        }
    }
}

/// Full description of a movie from one provider.
///
/// The descriptive fields are optional because upstream catalogs omit them
/// freely. `price` is always present; it decides which provider's record
/// wins when both know the movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    /// Summary fields.
    pub movie: Movie,
    /// Provider price.
    pub price: Decimal,
    /// Plot synopsis.
    pub plot: Option<String>,
    /// Director(s).
    pub director: Option<String>,
    /// Main cast.
    pub actors: Option<String>,
    /// Running time, e.g. `121 min`.
    pub runtime: Option<String>,
    /// Release date, e.g. `25 May 1977`.
    pub released: Option<String>,
    /// Audience rating.
    pub rating: Option<String>,
    /// Spoken language(s).
    pub language: Option<String>,
    /// Production country.
    pub country: Option<String>,
    /// Awards summary.
    pub awards: Option<String>,
    /// Content rating, e.g. `PG`.
    pub rated: Option<String>,
    /// Genre list.
    pub genre: Option<String>,
    /// Writer credits.
    pub writer: Option<String>,
    /// Metacritic score.
    pub metascore: Option<String>,
    /// Number of rating votes.
    pub votes: Option<String>,
}

impl MovieDetail {
    /// Creates a detail record with only the summary and price set.
    #[must_use]
    pub fn new(movie: Movie, price: Decimal) -> Self {
        Self {
            movie,
            price,
            plot: None,
            director: None,
            actors: None,
            runtime: None,
            released: None,
            rating: None,
            language: None,
            country: None,
            awards: None,
            rated: None,
            genre: None,
            writer: None,
            metascore: None,
            votes: None,
        }
    }

    /// Returns the movie identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &MovieId {
        &self.movie.id
    }

    /// Returns the provider price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}
