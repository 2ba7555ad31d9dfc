// SPDX-License-Identifier: MIT
//
// Swizzle pattern enumeration.
//
// The canonical enumeration is staged: pick how many times each axis
// appears (a count tuple whose total is at most 4), lay those copies out as
// a multiset, then insert every permutation of that multiset into an
// ordered set. Count tuples are walked with nested ranges, fourth axis
// outermost:
//
//   for c3 in 0..=4
//     for c2 in 0..=4-c3
//       for c1 in 0..=4-c3-c2
//         for c0 in 0..=4-c3-c2-c1
//           multiset = [3; c3] ++ [2; c2] ++ [1; c1] ++ [0; c0]
//
// Permutations are produced over positions, lexicographically, so a
// multiset with repeated axes yields the same sequence several times; the
// set keeps the first. The header's line order is exactly this insertion
// order, which is why the walk above must not be reordered.
//
// The result is every sequence of length 2..=4 over 4 axes (336 of them).
// `direct` builds the same set by counting through all tuples and exists to
// cross-check `staged`.

use crate::axis::{AXIS_COUNT, Axis};
use crate::pattern::{MAX_LEN, MIN_LEN, Pattern, PatternSet};

/// How many copies of each axis a multiset holds, indexed by axis.
pub type CountTuple = [usize; AXIS_COUNT];

/// The canonical pattern set, in header order.
#[must_use]
pub fn generate() -> PatternSet {
    staged()
}

/// Total number of swizzles: `4^2 + 4^3 + 4^4`.
#[must_use]
pub fn expected_count() -> usize {
    (MIN_LEN..=MAX_LEN)
        .map(|len| (0..len).fold(1, |acc, _| acc * AXIS_COUNT))
        .sum()
}

/// All count tuples with total `<= MAX_LEN`, in nested-range order.
///
/// `tuple[3]` varies slowest, `tuple[0]` fastest.
#[must_use]
pub fn count_tuples() -> Vec<CountTuple> {
    let mut tuples = Vec::new();
    for c3 in 0..=MAX_LEN {
        for c2 in 0..=MAX_LEN - c3 {
            for c1 in 0..=MAX_LEN - c3 - c2 {
                for c0 in 0..=MAX_LEN - c3 - c2 - c1 {
                    tuples.push([c0, c1, c2, c3]);
                }
            }
        }
    }
    tuples
}

/// Lay out a count tuple as a multiset, highest axis first.
///
/// `[2, 0, 1, 0]` (two of axis 0, one of axis 2) → `[2, 0, 0]`.
#[must_use]
pub fn multiset(counts: &CountTuple) -> Vec<Axis> {
    let mut axes = Vec::with_capacity(counts.iter().sum());
    for axis in Axis::ALL.into_iter().rev() {
        axes.extend(std::iter::repeat_n(axis, counts[axis.index()]));
    }
    axes
}

/// Every ordering of `items` by position, lexicographic in the positions.
///
/// Repeated items produce repeated sequences; `[a, a]` yields `[a, a]` twice.
#[must_use]
pub fn permutations<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut used = vec![false; items.len()];
    let mut current = Vec::with_capacity(items.len());
    permute(items, &mut used, &mut current, &mut out);
    out
}

fn permute<T: Copy>(items: &[T], used: &mut [bool], current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if current.len() == items.len() {
        out.push(current.clone());
        return;
    }
    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(items[i]);
        permute(items, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// Staged enumeration: count tuples → multisets → permutations.
#[must_use]
pub fn staged() -> PatternSet {
    let mut set = PatternSet::new();
    for counts in count_tuples() {
        let axes = multiset(&counts);
        if axes.len() < MIN_LEN {
            continue;
        }
        set.extend(
            permutations(&axes)
                .iter()
                .filter_map(|perm| Pattern::new(perm)),
        );
    }
    set
}

/// Direct enumeration: every tuple of each length, counted like an odometer
/// (last position fastest).
#[must_use]
pub fn direct() -> PatternSet {
    let mut set = PatternSet::new();
    for len in MIN_LEN..=MAX_LEN {
        let mut digits = vec![0usize; len];
        'odometer: loop {
            let axes: Vec<Axis> = digits.iter().map(|&d| Axis::ALL[d]).collect();
            if let Some(pattern) = Pattern::new(&axes) {
                set.insert(pattern);
            }

            let mut pos = len;
            loop {
                if pos == 0 {
                    break 'odometer;
                }
                pos -= 1;
                digits[pos] += 1;
                if digits[pos] < AXIS_COUNT {
                    break;
                }
                digits[pos] = 0;
            }
        }
    }
    set
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::alphabet::Alphabet;

    fn p(indices: &[u8]) -> Pattern {
        Pattern::from_indices(indices).unwrap()
    }

    fn factorial(n: usize) -> usize {
        (1..=n).product()
    }

    #[test]
    fn expected_count_is_336() {
        assert_eq!(expected_count(), 16 + 64 + 256);
    }

    #[test]
    fn generates_every_swizzle() {
        let set = generate();
        assert_eq!(set.len(), 336);
        assert_eq!(set.len(), expected_count());
    }

    #[test]
    fn lengths_are_two_to_four() {
        let set = generate();
        assert!(set.iter().all(|p| (2..=4).contains(&p.len())));
        let per_len = |n| set.iter().filter(|p| p.len() == n).count();
        assert_eq!(per_len(2), 16);
        assert_eq!(per_len(3), 64);
        assert_eq!(per_len(4), 256);
    }

    #[test]
    fn no_duplicates_in_order() {
        let set = generate();
        let unique: HashSet<Pattern> = set.iter().copied().collect();
        assert_eq!(unique.len(), set.as_slice().len());
    }

    #[test]
    fn every_pair_appears_once() {
        let set = generate();
        for a in 0..4u8 {
            for b in 0..4u8 {
                let pair = p(&[a, b]);
                let hits = set.iter().filter(|&&q| q == pair).count();
                assert_eq!(hits, 1, "({a}, {b}) appeared {hits} times");
            }
        }
    }

    #[test]
    fn repeated_single_axis_is_included() {
        let set = generate();
        assert!(set.contains(&p(&[2, 2, 2])));
        assert!(set.contains(&p(&[0, 0])));
        assert!(set.contains(&p(&[3, 3, 3, 3])));
    }

    #[test]
    fn staged_matches_direct() {
        let staged = staged();
        let direct = direct();
        assert_eq!(staged.len(), direct.len());
        assert!(staged.same_members(&direct));
    }

    #[test]
    fn header_order_starts_with_first_axis_runs() {
        let set = generate();
        let first: Vec<String> = set
            .iter()
            .take(8)
            .map(|p| p.spell(Alphabet::Positional))
            .collect();
        assert_eq!(
            first,
            ["xx", "xxx", "xxxx", "yx", "xy", "yxx", "xyx", "xxy"]
        );
    }

    #[test]
    fn header_order_ends_with_wwww() {
        let set = generate();
        assert_eq!(set.as_slice().last(), Some(&p(&[3, 3, 3, 3])));
    }

    #[test]
    fn direct_order_is_odometer() {
        let set = direct();
        let first: Vec<String> = set.iter().take(5).map(ToString::to_string).collect();
        assert_eq!(first, ["xx", "xy", "xz", "xw", "yx"]);
    }

    #[test]
    fn count_tuples_are_bounded_and_complete() {
        let tuples = count_tuples();
        // Weak compositions of at most 4 into 4 parts: C(8, 4).
        assert_eq!(tuples.len(), 70);
        assert!(tuples.iter().all(|t| t.iter().sum::<usize>() <= 4));
        assert_eq!(tuples[0], [0, 0, 0, 0]);
        assert_eq!(tuples[1], [1, 0, 0, 0]);
        assert_eq!(tuples.last(), Some(&[0, 0, 0, 4]));
    }

    #[test]
    fn multiset_lays_out_highest_axis_first() {
        let axes = multiset(&[2, 0, 1, 1]);
        let indices: Vec<usize> = axes.iter().map(|a| a.index()).collect();
        assert_eq!(indices, vec![3, 2, 0, 0]);
        assert!(multiset(&[0, 0, 0, 0]).is_empty());
    }

    #[test]
    fn permutations_are_positional_lexicographic() {
        let perms = permutations(&[1, 2, 3]);
        assert_eq!(
            perms,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn permutations_keep_repeats() {
        assert_eq!(permutations(&['a', 'a']), vec![vec!['a', 'a'], vec!['a', 'a']]);
        assert_eq!(permutations::<u8>(&[]), vec![Vec::<u8>::new()]);
    }

    proptest! {
        /// Distinct orderings of a multiset follow the multinomial
        /// coefficient n! / (c0! c1! c2! c3!).
        #[test]
        fn prop_distinct_permutations_are_multinomial(
            indices in proptest::collection::vec(0u8..4, 0..=4)
        ) {
            let perms = permutations(&indices);
            prop_assert_eq!(perms.len(), factorial(indices.len()));

            let distinct: HashSet<Vec<u8>> = perms.into_iter().collect();
            let mut counts = [0usize; 4];
            for &i in &indices {
                counts[i as usize] += 1;
            }
            let expected = factorial(indices.len())
                / counts.iter().map(|&c| factorial(c)).product::<usize>();
            prop_assert_eq!(distinct.len(), expected);
        }

        /// Any in-range sequence of length 2..=4 is a generated swizzle.
        #[test]
        fn prop_any_sequence_is_generated(
            indices in proptest::collection::vec(0u8..4, 2..=4)
        ) {
            let set = generate();
            prop_assert!(set.contains(&p(&indices)));
        }
    }
}
