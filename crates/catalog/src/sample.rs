//! Built-in sample dataset.
//!
//! A small 15-movie, 5-user catalog used by the CLI when no CSV files
//! are supplied, and by tests and benches. The rating log repeats
//! each row three times on purpose: duplicate `(user, movie)` entries
//! exercise the last-write-wins resolution in the matrix build.

use crate::types::{Catalog, Movie, Rating};

const SAMPLE_MOVIES: &[(u32, &str, &str)] = &[
    (1, "The Shawshank Redemption", "Drama"),
    (2, "The Godfather", "Crime|Drama"),
    (3, "The Dark Knight", "Action|Crime|Drama"),
    (4, "Pulp Fiction", "Crime|Drama"),
    (5, "Fight Club", "Drama"),
    (6, "Forrest Gump", "Drama|Romance"),
    (7, "Inception", "Action|Sci-Fi|Thriller"),
    (8, "The Matrix", "Action|Sci-Fi"),
    (9, "Goodfellas", "Crime|Drama"),
    (
        10,
        "The Lord of the Rings: The Return of the King",
        "Action|Adventure|Drama",
    ),
    (
        11,
        "The Lord of the Rings: The Fellowship of the Ring",
        "Action|Adventure|Drama",
    ),
    (12, "Star Wars: Episode IV", "Action|Adventure|Fantasy"),
    (13, "The Avengers", "Action|Adventure|Sci-Fi"),
    (14, "Interstellar", "Adventure|Drama|Sci-Fi"),
    (15, "The Lion King", "Animation|Adventure|Drama"),
];

const SAMPLE_RATINGS: &[(u32, u32, f32)] = &[
    (1, 1, 5.0),
    (1, 2, 5.0),
    (1, 3, 4.0),
    (2, 1, 4.0),
    (2, 4, 5.0),
    (2, 5, 4.0),
    (3, 2, 5.0),
    (3, 3, 4.0),
    (3, 6, 5.0),
    (4, 4, 4.0),
    (4, 7, 5.0),
    (4, 8, 4.0),
    (5, 5, 5.0),
    (5, 9, 4.0),
    (5, 10, 5.0),
    (1, 11, 4.0),
    (2, 12, 5.0),
    (3, 13, 4.0),
    (4, 14, 5.0),
    (5, 15, 4.0),
];

/// Build the sample catalog.
pub fn sample_catalog() -> Catalog {
    let movies = SAMPLE_MOVIES
        .iter()
        .map(|&(id, title, genres)| Movie {
            id,
            title: title.to_string(),
            genres: genres.to_string(),
        })
        .collect();

    // The rating log is the sample set repeated three times
    let mut ratings = Vec::with_capacity(SAMPLE_RATINGS.len() * 3);
    for _ in 0..3 {
        ratings.extend(SAMPLE_RATINGS.iter().map(|&(user_id, movie_id, score)| {
            Rating {
                user_id,
                movie_id,
                score,
            }
        }));
    }

    Catalog::from_parts(movies, ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts() {
        let catalog = sample_catalog();
        let (movies, ratings) = catalog.counts();
        assert_eq!(movies, 15);
        assert_eq!(ratings, 60);
    }

    #[test]
    fn test_sample_titles_unique() {
        let catalog = sample_catalog();
        let mut titles: Vec<_> = catalog.movies().iter().map(|m| &m.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 15);
    }

    #[test]
    fn test_sample_contains_known_movie() {
        let catalog = sample_catalog();
        let movie = catalog.movie_by_title("The Dark Knight").unwrap();
        assert_eq!(movie.id, 3);
        assert_eq!(movie.genres, "Action|Crime|Drama");
    }
}
