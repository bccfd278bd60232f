//! Parser for catalog CSV files.
//!
//! Two file formats are supported:
//! - movies.csv: `movieId,title,genres` (title may be quoted and
//!   contain commas)
//! - ratings.csv: `userId,movieId,rating`
//!
//! The first line is treated as a header and skipped. Errors carry
//! the file name and 1-based line number.

use crate::error::{CatalogError, Result};
use crate::types::{Movie, Rating};
use std::fs;
use std::path::Path;

/// Split a single CSV line into fields, honoring double quotes.
///
/// A quoted field may contain commas; `""` inside a quoted field is
/// an escaped quote. This is enough for the movie-title files we
/// consume; it is not a general CSV implementation.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn field<'a>(
    fields: &'a [String],
    idx: usize,
    name: &str,
    file: &str,
    line_no: usize,
) -> Result<&'a str> {
    fields
        .get(idx)
        .map(|s| s.trim())
        .ok_or_else(|| CatalogError::Parse {
            file: file.to_string(),
            line: line_no,
            reason: format!("Missing {}", name),
        })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    name: &str,
    file: &str,
    line_no: usize,
) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| CatalogError::Parse {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid {}: {}", name, e),
    })
}

/// Parse a movies CSV file
///
/// Format: `movieId,title,genres`
pub fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "movies.csv".to_string());
    let content = fs::read_to_string(path)?;
    let mut movies = Vec::new();

    // Skip the header line, then read line by line
    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields = split_csv_line(trimmed);
        let id = field(&fields, 0, "movieId", &file_name, line_no)?;
        let title = field(&fields, 1, "title", &file_name, line_no)?;
        let genres = field(&fields, 2, "genres", &file_name, line_no)?;

        movies.push(Movie {
            id: parse_number(id, "movieId", &file_name, line_no)?,
            title: title.to_string(),
            genres: genres.to_string(),
        });
    }

    Ok(movies)
}

/// Parse a ratings CSV file
///
/// Format: `userId,movieId,rating`
pub fn load_ratings(path: &Path) -> Result<Vec<Rating>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ratings.csv".to_string());
    let content = fs::read_to_string(path)?;
    let mut ratings = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields = split_csv_line(trimmed);
        let user_id = field(&fields, 0, "userId", &file_name, line_no)?;
        let movie_id = field(&fields, 1, "movieId", &file_name, line_no)?;
        let score = field(&fields, 2, "rating", &file_name, line_no)?;

        ratings.push(Rating {
            user_id: parse_number(user_id, "userId", &file_name, line_no)?,
            movie_id: parse_number(movie_id, "movieId", &file_name, line_no)?,
            score: parse_number(score, "rating", &file_name, line_no)?,
        });
    }

    Ok(ratings)
}
