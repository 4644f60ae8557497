//! Overlapping window iteration.
//!
//! [`SlidingWindow`] walks a finite sequence and yields every run of `size`
//! consecutive items: `[a, b, c, d]` with size 2 yields `[a, b]`, `[b, c]`,
//! `[c, d]`. A sequence shorter than the window yields nothing, as does a
//! window of size zero.
//!
//! The adapter is lazy and holds at most `size` items. It is not meant for
//! unbounded sources; each call site builds a fresh adapter from its input.

use std::{collections::VecDeque, iter::Fuse};

/// Iterator adapter yielding overlapping windows of a fixed size.
#[derive(Debug, Clone)]
pub struct SlidingWindow<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    size: usize,
    window: VecDeque<I::Item>,
    primed: bool,
}

impl<I> SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Creates a window adapter of `size` items over `iter`.
    pub fn new(iter: impl IntoIterator<IntoIter = I>, size: usize) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
            size,
            window: VecDeque::with_capacity(size),
            primed: false,
        }
    }

    fn snapshot(&self) -> Vec<I::Item> {
        self.window.iter().cloned().collect()
    }
}

impl<I> Iterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }

        if !self.primed {
            self.primed = true;
            while self.window.len() < self.size {
                self.window.push_back(self.iter.next()?);
            }
            return Some(self.snapshot());
        }

        let item = self.iter.next()?;
        self.window.pop_front();
        self.window.push_back(item);
        Some(self.snapshot())
    }
}

/// Extension methods for building windows from any iterator.
pub trait WindowExt: Iterator + Sized
where
    Self::Item: Clone,
{
    /// Returns overlapping windows of `size` items.
    fn sliding_window(self, size: usize) -> SlidingWindow<Self> {
        SlidingWindow::new(self, size)
    }

    /// Returns each item paired with its successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use colony_graph_core::window::WindowExt;
    ///
    /// let pairs: Vec<_> = ['a', 'b', 'c', 'd'].into_iter().pairwise().collect();
    /// assert_eq!(pairs, vec![('a', 'b'), ('b', 'c'), ('c', 'd')]);
    /// ```
    fn pairwise(self) -> impl Iterator<Item = (Self::Item, Self::Item)> {
        self.sliding_window(2)
            .filter_map(|window| <[Self::Item; 2]>::try_from(window).ok())
            .map(|[first, second]| (first, second))
    }
}

impl<I> WindowExt for I
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_over_four_items() {
        let windows: Vec<Vec<char>> = SlidingWindow::new(['a', 'b', 'c', 'd'], 2).collect();
        assert_eq!(
            windows,
            vec![vec!['a', 'b'], vec!['b', 'c'], vec!['c', 'd']]
        );
    }

    #[test]
    fn test_single_item_yields_nothing() {
        assert_eq!(['a'].into_iter().pairwise().count(), 0);
    }

    #[test]
    fn test_empty_yields_nothing() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(empty.into_iter().pairwise().count(), 0);
    }

    #[test]
    fn test_exact_length_yields_one_window() {
        let windows: Vec<Vec<u32>> = vec![1, 2, 3].into_iter().sliding_window(3).collect();
        assert_eq!(windows, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_zero_size_yields_nothing() {
        assert_eq!(vec![1, 2, 3].into_iter().sliding_window(0).count(), 0);
    }

    #[test]
    fn test_exhausted_adapter_stays_exhausted() {
        let mut windows = vec![1].into_iter().sliding_window(2);
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn test_restart_by_rebuilding() {
        let items = vec![1, 2, 3];
        let first: Vec<_> = items.iter().pairwise().collect();
        let second: Vec<_> = items.iter().pairwise().collect();
        assert_eq!(first, second);
    }
}
