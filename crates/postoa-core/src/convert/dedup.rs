use std::collections::HashSet;
use std::hash::Hash;

/// Concatenate two sequences keeping only the first item seen per key.
///
/// Order is preserved: unique items of `first`, then items of `second`
/// whose key was not already seen. Duplicates inside `first` are dropped too.
pub fn dedup_concat<T, K, F>(first: Vec<T>, second: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    first
        .into_iter()
        .chain(second)
        .filter(|item| seen.insert(key(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_then_novel_second() {
        let merged = dedup_concat(vec!["a", "b", "a"], vec!["b", "c"], |s| *s);
        assert_eq!(merged, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let merged = dedup_concat(
            vec![("id", 1), ("id", 2)],
            vec![("id", 3), ("name", 4)],
            |(k, _): &(&str, i32)| *k,
        );
        assert_eq!(merged, vec![("id", 1), ("name", 4)]);
    }

    #[test]
    fn test_empty_inputs() {
        let merged: Vec<&str> = dedup_concat(Vec::new(), Vec::new(), |s| *s);
        assert!(merged.is_empty());
        assert_eq!(dedup_concat(Vec::new(), vec!["x", "x"], |s| *s), vec!["x"]);
    }
}
