//! # Provider Payloads
//!
//! Wire formats returned by upstream movie catalogs and their mapping into
//! domain entities.
//!
//! Upstream catalogs are not consistent about casing (`id` vs `ID`,
//! `title` vs `Title`) or about scalar types (`year` and `price` arrive as
//! numbers or strings). Decoding accepts both spellings so a cosmetic
//! upstream change does not turn into an outage.

use crate::domain::entities::{Movie, MovieDetail};
use crate::domain::value_objects::MovieId;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Listing endpoint body: `{ "movies": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListPayload {
    /// Movie summaries.
    #[serde(alias = "Movies", default)]
    pub movies: Vec<MovieSummaryPayload>,
}

/// One entry of a listing, identifier still carrying the provider prefix.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummaryPayload {
    /// Prefixed identifier, e.g. `cw0076759`.
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    /// Title.
    #[serde(alias = "Title", default)]
    pub title: String,
    /// Entry type.
    #[serde(rename = "type", alias = "Type", default)]
    pub movie_type: String,
    /// Release year.
    #[serde(alias = "Year", default, deserialize_with = "string_or_number")]
    pub year: String,
    /// Poster URL.
    #[serde(alias = "Poster", default)]
    pub poster: String,
}

/// Detail endpoint body.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailPayload {
    /// Prefixed identifier.
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    /// Title.
    #[serde(alias = "Title", default)]
    pub title: String,
    #[serde(rename = "type", alias = "Type", default)]
    movie_type: String,
    #[serde(alias = "Year", default, deserialize_with = "string_or_number")]
    year: String,
    #[serde(alias = "Poster", default)]
    poster: String,
    /// Provider price.
    #[serde(alias = "Price")]
    pub price: Decimal,
    #[serde(alias = "Plot", default)]
    plot: Option<String>,
    #[serde(alias = "Director", default)]
    director: Option<String>,
    #[serde(alias = "Actors", default)]
    actors: Option<String>,
    #[serde(alias = "Runtime", default)]
    runtime: Option<String>,
    #[serde(alias = "Released", default)]
    released: Option<String>,
    #[serde(alias = "Rating", alias = "imdbRating", default)]
    rating: Option<String>,
    #[serde(alias = "Language", default)]
    language: Option<String>,
    #[serde(alias = "Country", default)]
    country: Option<String>,
    #[serde(alias = "Awards", default)]
    awards: Option<String>,
    #[serde(alias = "Rated", default)]
    rated: Option<String>,
    #[serde(alias = "Genre", default)]
    genre: Option<String>,
    #[serde(alias = "Writer", default)]
    writer: Option<String>,
    #[serde(alias = "Metascore", default)]
    metascore: Option<String>,
    #[serde(alias = "Votes", default)]
    votes: Option<String>,
}

impl From<MovieSummaryPayload> for Movie {
    fn from(payload: MovieSummaryPayload) -> Self {
        Movie::new(
            MovieId::from_provider(&payload.id),
            payload.title,
            payload.movie_type,
            payload.poster,
            payload.year,
        )
    }
}

impl From<MovieDetailPayload> for MovieDetail {
    fn from(payload: MovieDetailPayload) -> Self {
        Self {
            movie: Movie::new(
                MovieId::from_provider(&payload.id),
                payload.title,
                payload.movie_type,
                payload.poster,
                payload.year,
            ),
            price: payload.price,
            plot: payload.plot,
            director: payload.director,
            actors: payload.actors,
            runtime: payload.runtime,
            released: payload.released,
            rating: payload.rating,
            language: payload.language,
            country: payload.country,
            awards: payload.awards,
            rated: payload.rated,
            genre: payload.genre,
            writer: payload.writer,
            metascore: payload.metascore,
            votes: payload.votes,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        None => String::new(),
    })
}
