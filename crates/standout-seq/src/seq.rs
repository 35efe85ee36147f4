//! The [`LazySeq`] extension trait.
//!
//! Every [`Iterator`] is a lazy sequence: `next()` is the pull, `None` is
//! exhaustion. `LazySeq` adds the pipeline operators on top of that protocol
//! through a blanket implementation, so any source can be chained without
//! wrapping it first.

use crate::buffered::{OrderBy, OrderByPartial, Reversed};
use crate::error::{Result, SeqError};
use crate::ordering::Dir;
use crate::streaming::{Filter, Limit, Offset, Select, SelectMany};
use crate::traits::Summable;

/// Pipeline operators for any iterator.
///
/// Operators that return an adapter are lazy: they capture `self` and the
/// closure and return immediately. The remaining methods are terminal: they
/// consume the pipeline and drive it, pulling only as far as the result
/// requires.
pub trait LazySeq: Iterator + Sized {
    // ========================================================================
    // Streaming operators
    // ========================================================================

    /// Keeps the elements for which `predicate` returns `true`.
    ///
    /// The predicate runs at most once per upstream element, only when the
    /// consumer pulls far enough to reach it.
    fn filter_by<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Projects each element through `selector`, preserving order and count.
    fn select<U, F>(self, selector: F) -> Select<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Select::new(self, selector)
    }

    /// Projects each element to a sequence and flattens the results.
    ///
    /// The inner sequence for one element is fully yielded before the next
    /// upstream element is pulled.
    fn select_many<U, F>(self, selector: F) -> SelectMany<Self, F, U>
    where
        F: FnMut(Self::Item) -> U,
        U: IntoIterator,
    {
        SelectMany::new(self, selector)
    }

    /// Yields at most the first `n` elements.
    ///
    /// Upstream is pulled at most `n` times, so this terminates on infinite
    /// sources.
    fn limit(self, n: usize) -> Limit<Self> {
        Limit::new(self, n)
    }

    /// Skips the first `n` elements and yields the rest.
    fn offset(self, n: usize) -> Offset<Self> {
        Offset::new(self, n)
    }

    // ========================================================================
    // Buffering operators
    // ========================================================================

    /// Sorts ascending by `key`, keeping equal keys in upstream order.
    ///
    /// Buffers the whole upstream on the first pull.
    fn order_by<K, F>(self, key: F) -> OrderBy<Self, F>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        OrderBy::new(self, key, Dir::Asc)
    }

    /// Sorts descending by `key`, keeping equal keys in upstream order.
    fn order_by_desc<K, F>(self, key: F) -> OrderBy<Self, F>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        OrderBy::new(self, key, Dir::Desc)
    }

    /// Sorts by a key that is only `PartialOrd`, such as `f64`.
    ///
    /// Items come out wrapped in `Ok`. If the keys are not totally ordered
    /// the sequence yields one `Err(SeqError::UnorderedKeys)` instead.
    ///
    /// ```
    /// use standout_seq::{Dir, LazySeq, SeqError};
    ///
    /// let sorted: Result<Vec<f64>, SeqError> = vec![2.0, 0.5]
    ///     .into_iter()
    ///     .order_by_partial(|x| *x, Dir::Asc)
    ///     .collect();
    /// assert_eq!(sorted, Ok(vec![0.5, 2.0]));
    /// ```
    fn order_by_partial<K, F>(self, key: F, dir: Dir) -> OrderByPartial<Self, F>
    where
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        OrderByPartial::new(self, key, dir)
    }

    /// Yields the elements in reverse order, buffering like [`order_by`](LazySeq::order_by).
    fn reversed(self) -> Reversed<Self> {
        Reversed::new(self)
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Returns the first element, or [`SeqError::EmptySequence`].
    fn first(mut self) -> Result<Self::Item> {
        self.next().ok_or(SeqError::EmptySequence)
    }

    /// Returns the first element matching `predicate`, or [`SeqError::NoMatch`].
    fn first_where<P>(self, predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.first_where_or_none(predicate).ok_or(SeqError::NoMatch)
    }

    /// Returns the first element, or `Self::Item::default()` if there is none.
    fn first_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.first_or_none().unwrap_or_default()
    }

    /// Returns the first element matching `predicate`, or the default value.
    fn first_where_or_default<P>(self, predicate: P) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Default,
    {
        self.first_where_or_none(predicate).unwrap_or_default()
    }

    /// Returns the first element, or `None` if there is none.
    fn first_or_none(mut self) -> Option<Self::Item> {
        self.next()
    }

    /// Returns the first element matching `predicate`, or `None`.
    fn first_where_or_none<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_by(predicate).next()
    }

    // ========================================================================
    // Quantifiers
    // ========================================================================

    /// Returns `true` if the sequence yields at least one element.
    ///
    /// Pulls at most one element.
    fn has_any(mut self) -> bool {
        self.next().is_some()
    }

    /// Returns `true` if any element matches, stopping at the first match.
    fn any_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_by(predicate).has_any()
    }

    /// Returns `true` if every element matches, stopping at the first
    /// element that does not. An empty sequence is vacuously `true`.
    fn all_match<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any_match(|item| !predicate(item))
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Counts every element. Always drains the sequence.
    fn count_all(self) -> usize {
        let mut count = 0;
        for _ in self {
            count += 1;
        }
        count
    }

    /// Counts the elements matching `predicate`. Always drains the sequence.
    fn count_where<P>(self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_by(predicate).count_all()
    }

    /// Adds up every element in source order.
    ///
    /// An empty sequence sums to [`Summable::zero`].
    ///
    /// ```
    /// use standout_seq::LazySeq;
    ///
    /// let sum: i32 = vec![1, 2, 3].iter().total();
    /// assert_eq!(sum, 6);
    ///
    /// let empty: i32 = std::iter::empty::<i32>().total();
    /// assert_eq!(empty, 0);
    /// ```
    fn total<S>(self) -> S
    where
        S: Summable<Self::Item>,
    {
        let mut sum = S::zero();
        for item in self {
            sum = sum.accumulate(item);
        }
        sum
    }

    // ========================================================================
    // Materialization
    // ========================================================================

    /// Drains the sequence into an owned `Vec`.
    fn to_list(self) -> Vec<Self::Item> {
        let mut list = Vec::with_capacity(self.size_hint().0);
        list.extend(self);
        list
    }
}

impl<I: Iterator> LazySeq for I {}
