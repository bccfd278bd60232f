//! Core domain types for the movie catalog.
//!
//! The `Catalog` is the single owner of the movie and rating
//! collections. It deliberately holds no derived structures: the
//! rating matrix, similarity matrix and title index are caches owned
//! by the engine crate and rebuilt from the catalog on demand.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// Represents a movie in the catalog.
///
/// `genres` is kept as the raw pipe-separated tag text
/// (e.g. `"Action|Crime|Drama"`); the content featurizer tokenizes it
/// together with the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: String,
}

impl Movie {
    /// Free-text used for content-based similarity: title plus tags.
    pub fn content(&self) -> String {
        format!("{} {}", self.title, self.genres)
    }
}

/// Represents a single rating from a user for a movie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value, typically 1.0 to 5.0 (range enforced by the UI
    /// layer, not here)
    pub score: f32,
}

/// Owner of the movie and rating collections.
///
/// Ratings are an append-only log: `add_rating` never dedups, so a
/// `(user, movie)` pair may appear more than once. Consumers that
/// pivot the log into a matrix resolve duplicates last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-loaded collections
    pub fn from_parts(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        Self { movies, ratings }
    }

    /// All movies, in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// The full rating log, in insertion order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Look up a movie by id
    pub fn movie_by_id(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Look up a movie by exact title.
    ///
    /// If duplicate titles exist, the first-loaded movie wins; later
    /// duplicates are unreachable by title.
    pub fn movie_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }

    /// Append a rating to the log. Never fails, never dedups.
    pub fn add_rating(&mut self, user_id: UserId, movie_id: MovieId, score: f32) {
        self.ratings.push(Rating {
            user_id,
            movie_id,
            score,
        });
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.ratings.len())
    }
}
