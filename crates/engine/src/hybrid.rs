//! Merge policy for combining recommendation strategies.
//!
//! The merge is deliberately stable: collaborative results keep their
//! rank, content-based results that are not already present are
//! appended in their own rank order, and the combined list is cut to
//! `k`. Re-running the same query always yields the same list.

use std::collections::HashSet;

/// Deduplicating first-seen merge of two ranked title lists,
/// truncated to `k`.
pub fn merge_ranked(collaborative: Vec<String>, content: Vec<String>, k: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for title in collaborative.into_iter().chain(content) {
        if merged.len() == k {
            break;
        }
        if seen.insert(title.clone()) {
            merged.push(title);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collaborative_ranks_first() {
        let merged = merge_ranked(titles(&["A", "B"]), titles(&["C", "D"]), 10);
        assert_eq!(merged, titles(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let merged = merge_ranked(titles(&["A", "B"]), titles(&["B", "C", "A"]), 10);
        assert_eq!(merged, titles(&["A", "B", "C"]));
    }

    #[test]
    fn test_truncates_to_k() {
        let merged = merge_ranked(titles(&["A", "B", "C"]), titles(&["D", "E"]), 2);
        assert_eq!(merged, titles(&["A", "B"]));
    }

    #[test]
    fn test_empty_collaborative_side() {
        let merged = merge_ranked(Vec::new(), titles(&["X", "Y"]), 10);
        assert_eq!(merged, titles(&["X", "Y"]));
    }

    #[test]
    fn test_both_sides_empty() {
        assert!(merge_ranked(Vec::new(), Vec::new(), 5).is_empty());
    }
}
