//! Keyed data join
//!
//! Compares the keys currently in a layer with the keys of the new data and
//! splits them into the three reconciliation sets.

use std::collections::HashSet;
use std::hash::Hash;

/// Result of joining new keys against old keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join<K> {
    /// Keys only in the new data, in new order
    pub enter: Vec<K>,
    /// Keys in both, in new order
    pub update: Vec<K>,
    /// Keys only in the old data, in old order
    pub exit: Vec<K>,
}

/// Split `old` and `new` keys into enter/update/exit sets
pub fn join<K: Eq + Hash + Clone>(old: &[K], new: &[K]) -> Join<K> {
    let old_keys: HashSet<&K> = old.iter().collect();
    let new_keys: HashSet<&K> = new.iter().collect();

    let (update, enter): (Vec<K>, Vec<K>) = new
        .iter()
        .cloned()
        .partition(|k| old_keys.contains(k));
    let exit = old
        .iter()
        .filter(|k| !new_keys.contains(k))
        .cloned()
        .collect();

    Join {
        enter,
        update,
        exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_grow() {
        let result = join(&[0, 1], &[0, 1, 2, 3]);
        assert_eq!(result.update, vec![0, 1]);
        assert_eq!(result.enter, vec![2, 3]);
        assert!(result.exit.is_empty());
    }

    #[test]
    fn test_join_shrink() {
        let result = join(&[0, 1, 2], &[0]);
        assert_eq!(result.update, vec![0]);
        assert!(result.enter.is_empty());
        assert_eq!(result.exit, vec![1, 2]);
    }

    #[test]
    fn test_join_same() {
        let result = join(&["a", "b"], &["a", "b"]);
        assert!(result.enter.is_empty());
        assert!(result.exit.is_empty());
        assert_eq!(result.update, vec!["a", "b"]);
    }

    #[test]
    fn test_join_disjoint() {
        let result = join(&["a"], &["b"]);
        assert_eq!(
            result,
            Join {
                enter: vec!["b"],
                update: vec![],
                exit: vec!["a"],
            }
        );
    }
}
