//! Content-based similarity over movie metadata.
//!
//! Each movie's title and genre tags are tokenized into a TF-IDF
//! vector, and the pairwise cosine similarities form an N×N matrix.
//! The matrix depends only on the movie set: rating changes never
//! invalidate it.
//!
//! Vectorization is O(N·V) and the pairwise matrix O(N²·V) for
//! vocabulary size V, which is fine for the modest catalogs this
//! engine targets.

use catalog::Movie;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Tokens dropped before weighting. Covers the function words that
/// show up in titles and connective tag text.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "he", "her",
    "his", "if", "in", "into", "is", "it", "its", "no", "not", "of", "on", "or", "she", "such",
    "that", "the", "their", "then", "there", "these", "they", "this", "to", "was", "were", "will",
    "with",
];

/// Lowercase a text and split it on non-alphanumeric boundaries,
/// dropping stop words. `"The Dark Knight Action|Crime|Drama"` becomes
/// `["dark", "knight", "action", "crime", "drama"]`.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// TF-IDF vectors and the item-item similarity matrix, plus the
/// title-to-row index.
///
/// Row order matches the movie order of the catalog the index was
/// built from, so a row index doubles as a catalog offset.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    /// title -> row; first occurrence wins, later duplicate titles
    /// are unreachable by lookup
    title_rows: HashMap<String, usize>,
    /// N×N cosine similarities, symmetric, diagonal 1.0
    similarity: Vec<Vec<f32>>,
}

impl ContentIndex {
    /// Vectorize every movie and compute the pairwise similarity
    /// matrix.
    pub fn build(movies: &[Movie]) -> Self {
        let n = movies.len();

        let mut title_rows = HashMap::with_capacity(n);
        for (row, movie) in movies.iter().enumerate() {
            title_rows.entry(movie.title.clone()).or_insert(row);
        }

        let docs: Vec<Vec<String>> = movies.iter().map(|m| tokenize(&m.content())).collect();

        // Document frequency per term
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            let mut seen: Vec<&str> = doc.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Sorted vocabulary keeps vector layout deterministic
        let vocab: BTreeMap<&str, usize> = df
            .keys()
            .copied()
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        let vectors: Vec<Vec<f32>> = docs
            .iter()
            .map(|doc| {
                let mut vector = vec![0.0_f32; vocab.len()];
                // Raw term counts
                for term in doc {
                    vector[vocab[term.as_str()]] += 1.0;
                }
                // Weight by inverse document frequency
                for (term, &idx) in &vocab {
                    if vector[idx] > 0.0 {
                        vector[idx] *= (n as f32 / df[term] as f32).ln();
                    }
                }
                // L2-normalize so pairwise cosine reduces to a dot
                // product and self-similarity is exactly 1.0
                let norm: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for w in &mut vector {
                        *w /= norm;
                    }
                }
                vector
            })
            .collect();

        let similarity: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            // Pinned even for all-stop-word items whose
                            // vector is zero
                            1.0
                        } else {
                            vectors[i]
                                .iter()
                                .zip(vectors[j].iter())
                                .map(|(a, b)| a * b)
                                .sum()
                        }
                    })
                    .collect()
            })
            .collect();

        debug!(
            movies = n,
            vocabulary = vocab.len(),
            "Built content similarity matrix"
        );

        Self {
            title_rows,
            similarity,
        }
    }

    /// Number of indexed movies
    pub fn n_items(&self) -> usize {
        self.similarity.len()
    }

    /// Row index for a title, first-loaded movie winning duplicates
    pub fn row_of_title(&self, title: &str) -> Option<usize> {
        self.title_rows.get(title).copied()
    }

    /// Similarity between two rows
    pub fn similarity(&self, i: usize, j: usize) -> f32 {
        self.similarity[i][j]
    }

    /// Rows most similar to `row`, excluding `row` itself.
    ///
    /// Ranked descending by similarity; ties break by row index
    /// ascending so repeated queries are reproducible.
    pub fn similar_to(&self, row: usize, k: usize) -> Vec<(usize, f32)> {
        let mut scored: Vec<(usize, f32)> = self.similarity[row]
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != row)
            .map(|(other, &score)| (other, score))
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(k);
        scored
    }
}
