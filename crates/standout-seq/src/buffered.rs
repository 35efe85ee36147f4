//! Buffering operators.
//!
//! Sorting and reversal cannot be decided from a prefix, so these adapters
//! drain their entire upstream into an owned buffer on the first pull and
//! then stream that buffer. Memory use is proportional to the upstream
//! length, and on an infinite upstream the first pull never returns.
//!
//! Construction is still free: nothing is pulled and no key selector runs
//! until the adapter itself is advanced.

use std::iter::FusedIterator;
use std::vec;

use crate::error::Result;
use crate::ordering::{sort_by_key, try_sort_by_key, Dir};

/// Stable sort by a totally ordered key.
///
/// Created by [`LazySeq::order_by`](crate::LazySeq::order_by) and
/// [`LazySeq::order_by_desc`](crate::LazySeq::order_by_desc).
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct OrderBy<I: Iterator, F> {
    upstream: Option<I>,
    key: F,
    dir: Dir,
    sorted: vec::IntoIter<I::Item>,
}

impl<I: Iterator, F> OrderBy<I, F> {
    pub(crate) fn new(upstream: I, key: F, dir: Dir) -> Self {
        OrderBy {
            upstream: Some(upstream),
            key,
            dir,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<I, F, K> Iterator for OrderBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(upstream) = self.upstream.take() {
            let sorted = sort_by_key(upstream, &mut self.key, self.dir);
            tracing::trace!(len = sorted.len(), dir = %self.dir, "materialized sort buffer");
            self.sorted = sorted.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.upstream {
            Some(upstream) => upstream.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}

impl<I, F, K> FusedIterator for OrderBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
}

/// Stable sort by a partially ordered key, such as a float.
///
/// Yields `Ok` items in sorted order. If the keys turn out not to be totally
/// ordered, the first pull yields a single
/// `Err(SeqError::UnorderedKeys)` and the sequence is exhausted after it.
///
/// Created by [`LazySeq::order_by_partial`](crate::LazySeq::order_by_partial).
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct OrderByPartial<I: Iterator, F> {
    upstream: Option<I>,
    key: F,
    dir: Dir,
    sorted: vec::IntoIter<I::Item>,
}

impl<I: Iterator, F> OrderByPartial<I, F> {
    pub(crate) fn new(upstream: I, key: F, dir: Dir) -> Self {
        OrderByPartial {
            upstream: Some(upstream),
            key,
            dir,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<I, F, K> Iterator for OrderByPartial<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialOrd,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Result<I::Item>> {
        if let Some(upstream) = self.upstream.take() {
            match try_sort_by_key(upstream, &mut self.key, self.dir) {
                Ok(sorted) => {
                    tracing::trace!(len = sorted.len(), dir = %self.dir, "materialized sort buffer");
                    self.sorted = sorted.into_iter();
                }
                Err(err) => {
                    tracing::trace!(%err, "sort keys rejected");
                    return Some(Err(err));
                }
            }
        }
        self.sorted.next().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.upstream {
            Some(upstream) => upstream.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}

impl<I, F, K> FusedIterator for OrderByPartial<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialOrd,
{
}

/// Yields the upstream elements back to front.
///
/// Created by [`LazySeq::reversed`](crate::LazySeq::reversed).
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct Reversed<I: Iterator> {
    upstream: Option<I>,
    buffer: Vec<I::Item>,
}

impl<I: Iterator> Reversed<I> {
    pub(crate) fn new(upstream: I) -> Self {
        Reversed {
            upstream: Some(upstream),
            buffer: Vec::new(),
        }
    }
}

impl<I: Iterator> Iterator for Reversed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(upstream) = self.upstream.take() {
            self.buffer = upstream.collect();
            tracing::trace!(len = self.buffer.len(), "materialized reverse buffer");
        }
        // Popping from the end streams the buffer back to front.
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.upstream {
            Some(upstream) => upstream.size_hint(),
            None => (self.buffer.len(), Some(self.buffer.len())),
        }
    }
}

impl<I: Iterator> FusedIterator for Reversed<I> {}
