/// Elements present on only one side of a pairwise comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDiff<'a, T> {
    /// Elements of the current collection with no match in the previous one
    pub added: Vec<&'a T>,
    /// Elements of the previous collection with no match in the current one
    pub removed: Vec<&'a T>,
}

impl<T> CollectionDiff<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare two collections with a caller-supplied equality predicate.
///
/// Every element is checked against the whole other side, so duplicates are
/// matched and reported independently. Each side keeps its input order. The
/// predicate need not be hashable, which makes this O(n·m).
pub fn diff_by<'a, T, F>(previous: &'a [T], current: &'a [T], eq: F) -> CollectionDiff<'a, T>
where
    F: Fn(&T, &T) -> bool,
{
    let removed = previous
        .iter()
        .filter(|&old| !current.iter().any(|new| eq(old, new)))
        .collect();

    let added = current
        .iter()
        .filter(|&new| !previous.iter().any(|old| eq(old, new)))
        .collect();

    CollectionDiff { added, removed }
}

/// [`diff_by`] using `PartialEq`
pub fn diff<'a, T: PartialEq>(previous: &'a [T], current: &'a [T]) -> CollectionDiff<'a, T> {
    diff_by(previous, current, |a, b| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_and_removed() {
        let previous = vec!["a", "b", "c"];
        let current = vec!["b", "c", "d"];

        let result = diff(&previous, &current);
        assert_eq!(result.removed, vec![&"a"]);
        assert_eq!(result.added, vec![&"d"]);
    }

    #[test]
    fn test_identical_collections() {
        let items = vec![1, 2, 3];
        assert!(diff(&items, &items).is_empty());
    }

    #[test]
    fn test_empty_sides() {
        let empty: Vec<i32> = Vec::new();
        let items = vec![1, 2];

        let added_only = diff(&empty, &items);
        assert_eq!(added_only.added.len(), 2);
        assert!(added_only.removed.is_empty());

        let removed_only = diff(&items, &empty);
        assert_eq!(removed_only.removed.len(), 2);
        assert!(removed_only.added.is_empty());
    }

    #[test]
    fn test_unmatched_duplicates_reported_each() {
        let previous = vec!["x", "y", "y"];
        let current = vec!["x"];

        let result = diff(&previous, &current);
        assert_eq!(result.removed, vec![&"y", &"y"]);
    }

    #[test]
    fn test_matched_duplicates_not_reported() {
        let previous = vec!["x", "x"];
        let current = vec!["x"];
        assert!(diff(&previous, &current).is_empty());
    }

    #[test]
    fn test_custom_predicate() {
        let previous = vec!["Alpha", "Beta"];
        let current = vec!["alpha", "gamma"];

        let result = diff_by(&previous, &current, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(result.removed, vec![&"Beta"]);
        assert_eq!(result.added, vec![&"gamma"]);
    }

    #[test]
    fn test_input_order_preserved() {
        let previous: Vec<i32> = Vec::new();
        let current = vec![3, 1, 2];
        assert_eq!(diff(&previous, &current).added, vec![&3, &1, &2]);
    }
}
