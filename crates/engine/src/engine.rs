//! # Recommendation Engine
//!
//! The facade that ties the pieces together:
//! 1. Owns the catalog and both derived caches
//! 2. Routes every mutation through `add_rating`
//! 3. Serves collaborative, content-based and hybrid queries
//!
//! The engine is an explicit value, not a global: callers construct
//! one, hold it, and serialize access through it. All queries are
//! `&self` reads over the current cache snapshot; `add_rating` takes
//! `&mut self` and finishes every rebuild before returning, so a
//! query can never observe a half-built cache.

use crate::collaborative::CollaborativeRecommender;
use crate::content::ContentIndex;
use crate::hybrid::merge_ranked;
use crate::matrix::RatingMatrix;
use catalog::{Catalog, Movie, MovieId, Rating, UserId, sample_catalog};
use tracing::{debug, instrument};

/// Hybrid movie recommendation engine.
pub struct RecommendationEngine {
    catalog: Catalog,
    matrix: RatingMatrix,
    content: ContentIndex,
    collaborative: CollaborativeRecommender,
    /// Set when the movie set has changed since the last content
    /// build. Rating mutations leave it untouched: content similarity
    /// is independent of ratings, so `add_rating` only rebuilds the
    /// rating matrix.
    content_stale: bool,
}

impl RecommendationEngine {
    /// Build an engine over an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let mut engine = Self {
            catalog,
            matrix: RatingMatrix::default(),
            content: ContentIndex::default(),
            collaborative: CollaborativeRecommender::new(),
            content_stale: true,
        };
        engine.rebuild();
        engine
    }

    /// Build an engine from loaded movie and rating collections.
    pub fn load(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        Self::from_catalog(Catalog::from_parts(movies, ratings))
    }

    /// Build an engine over the built-in sample dataset.
    pub fn with_sample_data() -> Self {
        Self::from_catalog(sample_catalog())
    }

    /// The owned catalog (read-only; mutate through `add_rating`).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rebuild derived caches from the catalog. The rating matrix is
    /// cheap and always rebuilt; the content index only when the
    /// movie set changed.
    fn rebuild(&mut self) {
        self.matrix = RatingMatrix::build(self.catalog.ratings());
        debug!(
            users = self.matrix.n_users(),
            movies = self.matrix.n_movies(),
            "Rebuilt rating matrix"
        );

        if self.content_stale {
            self.content = ContentIndex::build(self.catalog.movies());
            self.content_stale = false;
        }
    }

    /// Append a rating and refresh the rating-derived cache.
    ///
    /// No score-range validation happens here; that belongs to the
    /// caller. Always succeeds.
    #[instrument(skip(self))]
    pub fn add_rating(&mut self, user_id: UserId, movie_id: MovieId, score: f32) {
        self.catalog.add_rating(user_id, movie_id, score);
        self.rebuild();
    }

    /// Top `k` movie titles for a user via user-neighborhood
    /// collaborative filtering. Unknown users get an empty list.
    #[instrument(skip(self))]
    pub fn get_collaborative_recommendations(&self, user_id: UserId, k: usize) -> Vec<String> {
        self.collaborative
            .recommend(&self.matrix, user_id, k)
            .into_iter()
            .filter_map(|(movie_id, _)| {
                // Ratings for movies missing from the catalog are
                // silently skipped at resolution time
                self.catalog.movie_by_id(movie_id).map(|m| m.title.clone())
            })
            .collect()
    }

    /// Top `k` titles most similar to the given title by content.
    /// Unknown titles get an empty list; the queried title itself is
    /// never included.
    #[instrument(skip(self))]
    pub fn get_content_based_recommendations(&self, title: &str, k: usize) -> Vec<String> {
        let Some(row) = self.content.row_of_title(title) else {
            debug!("Title not found in content index: {}", title);
            return Vec::new();
        };

        self.content
            .similar_to(row, k)
            .into_iter()
            .map(|(other, _)| self.catalog.movies()[other].title.clone())
            .collect()
    }

    /// Collaborative results for the user merged with content results
    /// for an optional reference title: collaborative-first, stable
    /// first-seen dedup, at most `k` titles.
    #[instrument(skip(self))]
    pub fn get_hybrid_recommendations(
        &self,
        user_id: UserId,
        title: Option<&str>,
        k: usize,
    ) -> Vec<String> {
        let collaborative = self.get_collaborative_recommendations(user_id, k);
        let content = match title {
            Some(title) => self.get_content_based_recommendations(title, k),
            None => Vec::new(),
        };
        merge_ranked(collaborative, content, k)
    }

    /// Movie record for a title, first-loaded movie winning
    /// duplicates. None means "not found".
    pub fn get_movie_info(&self, title: &str) -> Option<&Movie> {
        self.catalog.movie_by_title(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_over_sample_data() {
        let engine = RecommendationEngine::with_sample_data();
        let (movies, ratings) = engine.catalog().counts();
        assert_eq!(movies, 15);
        assert_eq!(ratings, 60);
    }

    #[test]
    fn test_empty_engine_degrades_to_empty_results() {
        let engine = RecommendationEngine::load(Vec::new(), Vec::new());
        assert!(engine.get_collaborative_recommendations(1, 5).is_empty());
        assert!(
            engine
                .get_content_based_recommendations("Anything", 5)
                .is_empty()
        );
        assert!(
            engine
                .get_hybrid_recommendations(1, Some("Anything"), 5)
                .is_empty()
        );
        assert!(engine.get_movie_info("Anything").is_none());
    }

    #[test]
    fn test_add_rating_is_visible_to_next_query() {
        let mut engine = RecommendationEngine::with_sample_data();

        // A brand-new user appears in the matrix after rating once
        assert!(engine.get_collaborative_recommendations(42, 5).is_empty());
        engine.add_rating(42, 1, 5.0);
        engine.add_rating(42, 2, 5.0);

        let recs = engine.get_collaborative_recommendations(42, 5);
        assert!(!recs.is_empty());
        assert!(!recs.contains(&"The Shawshank Redemption".to_string()));
        assert!(!recs.contains(&"The Godfather".to_string()));
    }

    #[test]
    fn test_movie_info_lookup() {
        let engine = RecommendationEngine::with_sample_data();
        let movie = engine.get_movie_info("Inception").unwrap();
        assert_eq!(movie.id, 7);
        assert_eq!(movie.genres, "Action|Sci-Fi|Thriller");
        assert!(engine.get_movie_info("inception").is_none());
    }
}
