//! # Engine Crate
//!
//! Hybrid movie recommendation engine combining two strategies over
//! an in-memory catalog:
//!
//! - **Collaborative filtering**: rank unseen movies for a user by
//!   the votes of the users whose rating rows look most like theirs.
//! - **Content-based filtering**: rank movies by TF-IDF cosine
//!   similarity of their title and genre text.
//!
//! The [`RecommendationEngine`] facade owns the catalog and the two
//! derived caches (rating matrix, content similarity matrix) and
//! routes all mutation through `add_rating`. Queries are synchronous,
//! read-only and infallible: unknown users or titles yield empty
//! lists rather than errors.
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::RecommendationEngine;
//!
//! let mut engine = RecommendationEngine::with_sample_data();
//!
//! let for_user = engine.get_collaborative_recommendations(1, 5);
//! let similar = engine.get_content_based_recommendations("The Dark Knight", 5);
//! let mixed = engine.get_hybrid_recommendations(2, Some("The Matrix"), 5);
//!
//! engine.add_rating(1, 8, 4.5);
//! ```

// Public modules
pub mod collaborative;
pub mod content;
pub mod engine;
pub mod hybrid;
pub mod matrix;
pub mod similarity;

// Re-export commonly used types
pub use collaborative::{CollaborativeRecommender, NEIGHBOR_COUNT};
pub use content::ContentIndex;
pub use engine::RecommendationEngine;
pub use matrix::RatingMatrix;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_wires_components_together() {
        let engine = RecommendationEngine::with_sample_data();
        let hybrid = engine.get_hybrid_recommendations(2, Some("The Matrix"), 3);
        assert!(hybrid.len() <= 3);
    }
}
