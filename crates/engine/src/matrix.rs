//! Dense user-by-movie rating matrix.
//!
//! The matrix is a cache derived from the catalog's rating log. Rows
//! are the sorted distinct user ids and columns the sorted distinct
//! movie ids at build time; a cell of 0.0 means "unrated", never
//! "rated zero". It is rebuilt in full whenever the log changes,
//! never patched incrementally.

use catalog::{MovieId, Rating, UserId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Dense user-by-movie rating matrix with id-to-offset lookups.
#[derive(Debug, Clone, Default)]
pub struct RatingMatrix {
    /// Sorted distinct user ids (row order)
    user_ids: Vec<UserId>,
    /// Sorted distinct movie ids (column order)
    movie_ids: Vec<MovieId>,
    user_rows: HashMap<UserId, usize>,
    movie_cols: HashMap<MovieId, usize>,
    /// Row-major cells, `user_ids.len() * movie_ids.len()` entries
    cells: Vec<f32>,
}

impl RatingMatrix {
    /// Pivot a rating log into a dense matrix.
    ///
    /// Duplicate `(user, movie)` pairs are resolved by the last
    /// occurrence in insertion order. An empty log yields an empty
    /// matrix with no rows or columns.
    pub fn build(ratings: &[Rating]) -> Self {
        // Later entries overwrite earlier ones
        let mut resolved: BTreeMap<(UserId, MovieId), f32> = BTreeMap::new();
        let mut users: BTreeSet<UserId> = BTreeSet::new();
        let mut movies: BTreeSet<MovieId> = BTreeSet::new();
        for rating in ratings {
            resolved.insert((rating.user_id, rating.movie_id), rating.score);
            users.insert(rating.user_id);
            movies.insert(rating.movie_id);
        }

        let user_ids: Vec<UserId> = users.into_iter().collect();
        let movie_ids: Vec<MovieId> = movies.into_iter().collect();
        let user_rows: HashMap<UserId, usize> = user_ids
            .iter()
            .enumerate()
            .map(|(row, &id)| (id, row))
            .collect();
        let movie_cols: HashMap<MovieId, usize> = movie_ids
            .iter()
            .enumerate()
            .map(|(col, &id)| (id, col))
            .collect();

        let mut cells = vec![0.0_f32; user_ids.len() * movie_ids.len()];
        let width = movie_ids.len();
        for ((user_id, movie_id), score) in resolved {
            let row = user_rows[&user_id];
            let col = movie_cols[&movie_id];
            cells[row * width + col] = score;
        }

        Self {
            user_ids,
            movie_ids,
            user_rows,
            movie_cols,
            cells,
        }
    }

    /// Number of user rows
    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    /// Number of movie columns
    pub fn n_movies(&self) -> usize {
        self.movie_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sorted distinct user ids
    pub fn user_ids(&self) -> &[UserId] {
        &self.user_ids
    }

    /// Sorted distinct movie ids
    pub fn movie_ids(&self) -> &[MovieId] {
        &self.movie_ids
    }

    /// Row index for a user id
    pub fn row_index(&self, user_id: UserId) -> Option<usize> {
        self.user_rows.get(&user_id).copied()
    }

    /// A user's full rating row, or None for an unknown user
    pub fn row(&self, user_id: UserId) -> Option<&[f32]> {
        let row = *self.user_rows.get(&user_id)?;
        Some(self.row_at(row))
    }

    /// Rating row by row index
    pub fn row_at(&self, row: usize) -> &[f32] {
        let width = self.movie_ids.len();
        &self.cells[row * width..(row + 1) * width]
    }

    /// The movie id at a column index
    pub fn movie_id_at(&self, col: usize) -> MovieId {
        self.movie_ids[col]
    }

    /// A single cell; 0.0 for unknown ids or unrated pairs
    pub fn score(&self, user_id: UserId, movie_id: MovieId) -> f32 {
        match (self.user_rows.get(&user_id), self.movie_cols.get(&movie_id)) {
            (Some(&row), Some(&col)) => self.cells[row * self.movie_ids.len() + col],
            _ => 0.0,
        }
    }
}
