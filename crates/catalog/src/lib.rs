//! # Catalog Crate
//!
//! This crate owns the movie and rating data consumed by the
//! recommendation engine.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, Catalog)
//! - **parser**: Parse movies/ratings CSV files into Rust structs
//! - **sample**: Built-in 15-movie sample dataset
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, parser};
//! use std::path::Path;
//!
//! let movies = parser::load_movies(Path::new("data/movies.csv"))?;
//! let ratings = parser::load_ratings(Path::new("data/ratings.csv"))?;
//! let catalog = Catalog::from_parts(movies, ratings);
//!
//! let movie = catalog.movie_by_title("The Matrix").unwrap();
//! println!("{} -> {}", movie.id, movie.genres);
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use sample::sample_catalog;
pub use types::{Catalog, Movie, MovieId, Rating, UserId};
