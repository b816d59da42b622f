//! Page allocation
//!
//! Splits an ordered page sequence into the pieces that end up in the
//! spread directory:
//!
//! - an optional leading cover (`single_top`)
//! - consecutive pairs, ordered by reading direction
//! - an optional trailing single when the pairable remainder is odd
//!
//! **Left-to-right, 5 pages:** pairs [1|2] [3|4], trailing 5
//!
//! **Left-to-right, 5 pages, cover:** cover 1, pairs [2|3] [4|5]
//!
//! **Right-to-left, 4 pages:** pairs [2|1] [4|3]

use crate::types::ReadingDirection;

// =============================================================================
// Plan Types
// =============================================================================

/// Two pages composited into one spread, already in on-screen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

impl<T> Pair<T> {
    /// Order two consecutive pages for the given reading direction.
    ///
    /// `first` must precede `second` in the source document.
    pub fn ordered(first: T, second: T, direction: ReadingDirection) -> Self {
        match direction {
            ReadingDirection::LeftToRight => Pair {
                left: first,
                right: second,
            },
            ReadingDirection::RightToLeft => Pair {
                left: second,
                right: first,
            },
        }
    }
}

/// How a page sequence is split into singles and spreads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan<T> {
    /// First page, emitted unpaired
    pub cover: Option<T>,
    /// Spreads in document order
    pub pairs: Vec<Pair<T>>,
    /// Last page, emitted unpaired because the remainder was odd
    pub trailing: Option<T>,
}

// =============================================================================
// Allocation
// =============================================================================

impl<T> AllocationPlan<T> {
    /// Allocate `pages` (in document order) into cover, pairs and trailing single.
    ///
    /// Parity is taken after the cover has been removed, so an odd document
    /// with a cover has no trailing single.
    pub fn new(pages: Vec<T>, single_top: bool, direction: ReadingDirection) -> Self {
        let mut remaining = pages.into_iter();

        let cover = if single_top { remaining.next() } else { None };

        let mut rest: Vec<T> = remaining.collect();
        let trailing = if rest.len() % 2 == 1 { rest.pop() } else { None };

        let mut pairs = Vec::with_capacity(rest.len() / 2);
        let mut iter = rest.into_iter();
        while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
            pairs.push(Pair::ordered(first, second, direction));
        }

        Self {
            cover,
            pairs,
            trailing,
        }
    }

    /// Singles in output order (cover first)
    pub fn singles(&self) -> impl Iterator<Item = &T> {
        self.cover.iter().chain(self.trailing.iter())
    }

    pub fn single_count(&self) -> usize {
        self.singles().count()
    }

    /// Total number of pages covered by the plan
    pub fn page_count(&self) -> usize {
        self.single_count() + self.pairs.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.page_count() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    fn pair(left: usize, right: usize) -> Pair<usize> {
        Pair { left, right }
    }

    #[test]
    fn test_odd_without_cover() {
        let plan = AllocationPlan::new(pages(5), false, ReadingDirection::LeftToRight);

        assert_eq!(plan.cover, None);
        assert_eq!(plan.pairs, vec![pair(1, 2), pair(3, 4)]);
        assert_eq!(plan.trailing, Some(5));
    }

    #[test]
    fn test_odd_with_cover() {
        let plan = AllocationPlan::new(pages(5), true, ReadingDirection::LeftToRight);

        assert_eq!(plan.cover, Some(1));
        assert_eq!(plan.pairs, vec![pair(2, 3), pair(4, 5)]);
        assert_eq!(plan.trailing, None);
    }

    #[test]
    fn test_three_pages_with_cover() {
        let plan = AllocationPlan::new(pages(3), true, ReadingDirection::LeftToRight);

        assert_eq!(plan.cover, Some(1));
        assert_eq!(plan.pairs, vec![pair(2, 3)]);
        assert_eq!(plan.trailing, None);
    }

    #[test]
    fn test_even_with_cover_leaves_trailing() {
        let plan = AllocationPlan::new(pages(4), true, ReadingDirection::LeftToRight);

        assert_eq!(plan.cover, Some(1));
        assert_eq!(plan.pairs, vec![pair(2, 3)]);
        assert_eq!(plan.trailing, Some(4));
        assert_eq!(plan.singles().copied().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_right_to_left_swaps_pairs() {
        let plan = AllocationPlan::new(pages(2), false, ReadingDirection::RightToLeft);
        assert_eq!(plan.pairs, vec![pair(2, 1)]);

        let plan = AllocationPlan::new(pages(6), true, ReadingDirection::RightToLeft);
        assert_eq!(plan.cover, Some(1));
        assert_eq!(plan.pairs, vec![pair(3, 2), pair(5, 4)]);
        assert_eq!(plan.trailing, Some(6));
    }

    #[test]
    fn test_tiny_sequences() {
        let plan = AllocationPlan::new(Vec::<usize>::new(), false, ReadingDirection::LeftToRight);
        assert!(plan.is_empty());

        let plan = AllocationPlan::new(Vec::<usize>::new(), true, ReadingDirection::LeftToRight);
        assert!(plan.is_empty());

        let plan = AllocationPlan::new(pages(1), false, ReadingDirection::LeftToRight);
        assert_eq!(plan.trailing, Some(1));
        assert!(plan.pairs.is_empty());

        let plan = AllocationPlan::new(pages(1), true, ReadingDirection::LeftToRight);
        assert_eq!(plan.cover, Some(1));
        assert_eq!(plan.trailing, None);
        assert!(plan.pairs.is_empty());
    }

    #[test]
    fn test_every_page_allocated_once() {
        for n in 0..20 {
            for single_top in [false, true] {
                for direction in [ReadingDirection::LeftToRight, ReadingDirection::RightToLeft] {
                    let plan = AllocationPlan::new(pages(n), single_top, direction);

                    let mut seen: Vec<usize> = plan.singles().copied().collect();
                    for p in &plan.pairs {
                        seen.push(p.left);
                        seen.push(p.right);
                    }
                    seen.sort_unstable();
                    assert_eq!(seen, pages(n), "n={n} single_top={single_top}");

                    for p in &plan.pairs {
                        match direction {
                            ReadingDirection::LeftToRight => assert!(p.left < p.right),
                            ReadingDirection::RightToLeft => assert!(p.left > p.right),
                        }
                        assert_eq!(p.left.abs_diff(p.right), 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_counts_without_cover() {
        for n in 1..20 {
            let plan = AllocationPlan::new(pages(n), false, ReadingDirection::LeftToRight);
            assert_eq!(plan.pairs.len(), n / 2);
            assert_eq!(plan.single_count(), n % 2);
            if n % 2 == 1 {
                assert_eq!(plan.trailing, Some(n));
            }
        }
    }
}
