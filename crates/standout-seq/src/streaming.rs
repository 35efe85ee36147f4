//! Streaming operators.
//!
//! Each adapter pulls from its upstream only when it is itself pulled, and
//! never buffers more than the element in hand (or, for [`SelectMany`], the
//! current inner iterator). Constructing an adapter does no work.

use std::iter::{Fuse, FusedIterator};

/// Yields the upstream elements for which a predicate holds.
///
/// Created by [`LazySeq::filter_by`](crate::LazySeq::filter_by).
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: Fuse<I>,
    predicate: P,
}

impl<I: Iterator, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Filter {
            iter: iter.fuse(),
            predicate,
        }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> FusedIterator for Filter<I, P> {}

/// Maps each upstream element through a selector, one to one.
///
/// Created by [`LazySeq::select`](crate::LazySeq::select).
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct Select<I, F> {
    iter: Fuse<I>,
    selector: F,
}

impl<I: Iterator, F> Select<I, F> {
    pub(crate) fn new(iter: I, selector: F) -> Self {
        Select {
            iter: iter.fuse(),
            selector,
        }
    }
}

impl<I, F, U> Iterator for Select<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.iter.next().map(&mut self.selector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Iterator, F: FnMut(I::Item) -> U, U> FusedIterator for Select<I, F> {}

/// Flattens the inner sequence produced for each upstream element.
///
/// An inner sequence is drained completely before the next upstream element
/// is pulled. Empty inner sequences contribute nothing.
///
/// Created by [`LazySeq::select_many`](crate::LazySeq::select_many).
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct SelectMany<I, F, U: IntoIterator> {
    iter: Fuse<I>,
    selector: F,
    inner: Option<U::IntoIter>,
}

impl<I: Iterator, F, U: IntoIterator> SelectMany<I, F, U> {
    pub(crate) fn new(iter: I, selector: F) -> Self {
        SelectMany {
            iter: iter.fuse(),
            selector,
            inner: None,
        }
    }
}

impl<I, F, U> Iterator for SelectMany<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            let outer = self.iter.next()?;
            self.inner = Some((self.selector)(outer).into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.as_ref().map_or((0, Some(0)), |inner| inner.size_hint());
        match self.iter.size_hint() {
            // Nothing left upstream, so the current inner is all there is.
            (_, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

impl<I, F, U> FusedIterator for SelectMany<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
}

/// Yields at most the first `n` upstream elements.
///
/// Upstream is never pulled past the `n`th element, so this is safe to use
/// on infinite sources.
///
/// Created by [`LazySeq::limit`](crate::LazySeq::limit).
#[derive(Debug, Clone)]
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct Limit<I> {
    iter: I,
    remaining: usize,
}

impl<I> Limit<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Limit { iter, remaining: n }
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Limit<I> {}

/// Discards the first `n` upstream elements, then yields the rest.
///
/// The skip happens on the first pull, not at construction.
///
/// Created by [`LazySeq::offset`](crate::LazySeq::offset).
#[derive(Debug, Clone)]
#[must_use = "sequence operators are lazy and do nothing unless consumed"]
pub struct Offset<I> {
    iter: Fuse<I>,
    pending: usize,
}

impl<I: Iterator> Offset<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Offset {
            iter: iter.fuse(),
            pending: n,
        }
    }
}

impl<I: Iterator> Iterator for Offset<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

impl<I: Iterator> FusedIterator for Offset<I> {}
