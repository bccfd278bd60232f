//! User-neighborhood collaborative filtering.
//!
//! "Users who rate like you also rated these movies." The requesting
//! user's rating row is compared against every other row by cosine
//! similarity; the top neighbors vote for the movies the requester
//! has not rated yet, weighted by their similarity.

use crate::matrix::RatingMatrix;
use crate::similarity::cosine;
use catalog::{MovieId, UserId};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// How many similar users vote for candidates, independent of the
/// requested result count.
pub const NEIGHBOR_COUNT: usize = 10;

/// Collaborative recommender over a rating matrix.
///
/// Pure reader: each call is a function of the matrix snapshot it is
/// handed, so the engine can rebuild the matrix between calls freely.
#[derive(Debug, Clone)]
pub struct CollaborativeRecommender {
    /// Number of neighbors considered per query
    neighbor_count: usize,
}

impl CollaborativeRecommender {
    pub fn new() -> Self {
        Self {
            neighbor_count: NEIGHBOR_COUNT,
        }
    }

    /// Configure the neighborhood size (default: 10)
    pub fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    /// Rank unseen movies for a user.
    ///
    /// Returns at most `k` `(movie_id, score)` pairs, best first. An
    /// unknown user yields an empty list, not an error.
    ///
    /// ## Algorithm
    /// 1. Cosine similarity between the user's row and every other
    ///    row (zero-magnitude rows score 0.0)
    /// 2. Keep the top `neighbor_count` users, ties broken by row
    ///    index ascending
    /// 3. For each movie the user has not rated that a neighbor has,
    ///    accumulate `neighbor_rating * neighbor_similarity`
    /// 4. Rank by accumulated score descending, ties by movie id
    ///    ascending
    #[instrument(skip(self, matrix))]
    pub fn recommend(
        &self,
        matrix: &RatingMatrix,
        user_id: UserId,
        k: usize,
    ) -> Vec<(MovieId, f32)> {
        let Some(target_row) = matrix.row_index(user_id) else {
            debug!("User {} not present in rating matrix", user_id);
            return Vec::new();
        };
        let user_vec = matrix.row_at(target_row);

        let mut neighbors: Vec<(usize, f32)> = (0..matrix.n_users())
            .into_par_iter()
            .filter(|&row| row != target_row)
            .map(|row| (row, cosine(user_vec, matrix.row_at(row))))
            .collect();
        neighbors.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        neighbors.truncate(self.neighbor_count);

        // A candidate is any movie unrated by the requester that at
        // least one selected neighbor rated; zero-similarity
        // neighbors still nominate, they just contribute no score.
        let mut scores: HashMap<usize, f32> = HashMap::new();
        for &(row, sim) in &neighbors {
            let neighbor_vec = matrix.row_at(row);
            for (col, (&mine, &theirs)) in user_vec.iter().zip(neighbor_vec.iter()).enumerate() {
                if mine == 0.0 && theirs > 0.0 {
                    *scores.entry(col).or_insert(0.0) += theirs * sim;
                }
            }
        }

        let mut ranked: Vec<(usize, f32)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(k);

        debug!(
            "Ranked {} collaborative candidates for user {}",
            ranked.len(),
            user_id
        );
        ranked
            .into_iter()
            .map(|(col, score)| (matrix.movie_id_at(col), score))
            .collect()
    }
}

impl Default for CollaborativeRecommender {
    fn default() -> Self {
        Self::new()
    }
}
