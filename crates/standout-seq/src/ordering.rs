//! Sort direction and keyed stable sorting.
//!
//! Provides [`Dir`] for sort direction and the buffer sorts used by
//! [`OrderBy`](crate::OrderBy) and [`OrderByPartial`](crate::OrderByPartial).

use std::cmp::Ordering;

use crate::error::{Result, SeqError};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest key first).
    #[default]
    Asc,
    /// Descending order (largest key first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering. `Equal` stays `Equal`, which is
    /// what keeps descending sorts stable.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Drains `upstream` and stable-sorts it by `key`.
///
/// The key selector runs exactly once per element, in upstream order.
pub(crate) fn sort_by_key<I, K, F>(upstream: I, mut key: F, dir: Dir) -> Vec<I::Item>
where
    I: Iterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut keyed: Vec<(K, I::Item)> = upstream.map(|item| (key(&item), item)).collect();
    keyed.sort_by(|a, b| dir.apply(a.0.cmp(&b.0)));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Like [`sort_by_key`], but for keys that only have a partial order.
///
/// Sorts by stable binary insertion, so the comparator never has to invent
/// an answer for incomparable keys. Fails with [`SeqError::UnorderedKeys`]
/// on the first comparison that returns `None` (including a NaN key), or
/// if the finished sequence is not a chain of comparable neighbours.
pub(crate) fn try_sort_by_key<I, K, F>(upstream: I, mut key: F, dir: Dir) -> Result<Vec<I::Item>>
where
    I: Iterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    let mut sorted: Vec<(K, I::Item)> = Vec::with_capacity(upstream.size_hint().0);

    for item in upstream {
        let k = key(&item);
        if k.partial_cmp(&k).is_none() {
            return Err(SeqError::UnorderedKeys);
        }

        // Upper bound: equal keys go after existing ones, which keeps the sort stable.
        let (mut lo, mut hi) = (0, sorted.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match k.partial_cmp(&sorted[mid].0).map(|o| dir.apply(o)) {
                Some(Ordering::Less) => hi = mid,
                Some(_) => lo = mid + 1,
                None => return Err(SeqError::UnorderedKeys),
            }
        }
        sorted.insert(lo, (k, item));
    }

    // Binary search skips most pairs. Ordered neighbours imply a total order
    // by transitivity, so checking them is enough.
    let chained = sorted.windows(2).all(|pair| {
        matches!(
            pair[0].0.partial_cmp(&pair[1].0).map(|o| dir.apply(o)),
            Some(Ordering::Less | Ordering::Equal)
        )
    });
    if !chained {
        return Err(SeqError::UnorderedKeys);
    }
    Ok(sorted.into_iter().map(|(_, item)| item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn sort_ascending_and_descending() {
        let asc = sort_by_key(vec![5, 3, 8, 1].into_iter(), |x| *x, Dir::Asc);
        assert_eq!(asc, vec![1, 3, 5, 8]);

        let desc = sort_by_key(vec![5, 3, 8, 1].into_iter(), |x| *x, Dir::Desc);
        assert_eq!(desc, vec![8, 5, 3, 1]);
    }

    #[test]
    fn sort_is_stable_both_ways() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];

        let asc = sort_by_key(items.clone().into_iter(), |(k, _)| *k, Dir::Asc);
        assert_eq!(asc, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);

        let desc = sort_by_key(items.into_iter(), |(k, _)| *k, Dir::Desc);
        assert_eq!(desc, vec![(1, 'a'), (1, 'c'), (0, 'b'), (0, 'd')]);
    }

    #[test]
    fn key_selector_runs_once_per_element() {
        let mut calls = 0;
        let sorted = sort_by_key(
            vec![4, 2, 9, 7, 1].into_iter(),
            |x| {
                calls += 1;
                *x
            },
            Dir::Asc,
        );
        assert_eq!(sorted, vec![1, 2, 4, 7, 9]);
        assert_eq!(calls, 5);
    }

    #[test]
    fn partial_sort_orders_floats() {
        let sorted = try_sort_by_key(vec![2.5, -1.0, 0.0].into_iter(), |x| *x, Dir::Asc);
        assert_eq!(sorted, Ok(vec![-1.0, 0.0, 2.5]));
    }

    #[test]
    fn partial_sort_rejects_nan() {
        let sorted = try_sort_by_key(vec![1.0, f64::NAN].into_iter(), |x| *x, Dir::Desc);
        assert_eq!(sorted, Err(SeqError::UnorderedKeys));
    }

    /// Component-wise order: `(0, 5)` and `(5, 0)` are incomparable.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair(i32, i32);

    impl PartialOrd for Pair {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            match (self.0.cmp(&other.0), self.1.cmp(&other.1)) {
                (a, b) if a == b => Some(a),
                (Ordering::Equal, b) => Some(b),
                (a, Ordering::Equal) => Some(a),
                _ => None,
            }
        }
    }

    #[test]
    fn partial_sort_rejects_incomparable_keys() {
        let items = vec![Pair(0, 0), Pair(1, 5), Pair(5, 1)];
        let sorted = try_sort_by_key(items.into_iter(), |p| *p, Dir::Asc);
        assert_eq!(sorted, Err(SeqError::UnorderedKeys));
    }

    #[test]
    fn partial_sort_rejects_incomparable_keys_in_large_input() {
        let items: Vec<Pair> = (0..200).map(|i| Pair((i * 37) % 23, (i * 53) % 29)).collect();

        let asc = try_sort_by_key(items.clone().into_iter(), |p| *p, Dir::Asc);
        assert_eq!(asc, Err(SeqError::UnorderedKeys));

        let desc = try_sort_by_key(items.into_iter(), |p| *p, Dir::Desc);
        assert_eq!(desc, Err(SeqError::UnorderedKeys));
    }

    #[test]
    fn partial_sort_accepts_a_chain_of_pairs() {
        let items: Vec<Pair> = (0..40).rev().map(|i| Pair(i / 2, i / 3)).collect();
        let sorted = try_sort_by_key(items.into_iter(), |p| *p, Dir::Asc);

        let expected: Vec<Pair> = (0..40).map(|i| Pair(i / 2, i / 3)).collect();
        assert_eq!(sorted, Ok(expected));
    }

    #[test]
    fn partial_sort_is_stable() {
        let items = vec![(1.0, 'a'), (0.0, 'b'), (1.0, 'c'), (0.0, 'd')];

        let asc = try_sort_by_key(items.clone().into_iter(), |(k, _)| *k, Dir::Asc);
        assert_eq!(asc, Ok(vec![(0.0, 'b'), (0.0, 'd'), (1.0, 'a'), (1.0, 'c')]));

        let desc = try_sort_by_key(items.into_iter(), |(k, _)| *k, Dir::Desc);
        assert_eq!(desc, Ok(vec![(1.0, 'a'), (1.0, 'c'), (0.0, 'b'), (0.0, 'd')]));
    }

    #[test]
    fn partial_sort_of_empty_is_ok() {
        let sorted = try_sort_by_key(Vec::<f64>::new().into_iter(), |x| *x, Dir::Asc);
        assert_eq!(sorted, Ok(vec![]));
    }
}
