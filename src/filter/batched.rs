//! Batched column-major filtering
//!
//! The data-parallel path over a [`PackedCorpus`]. Each batch keeps a u64
//! alive mask, one bit per word lane, initialized to the live (non-padding)
//! lanes. Every predicate is applied as a lane mask ANDed into the alive set;
//! the popcount of the surviving bits is the batch's contribution to the
//! count. The result is bit-for-bit identical to the row-major count; a
//! fully dead batch is skipped early, which cannot change the result.

use crate::core::Constraint;
use crate::corpus::PackedCorpus;
use crate::filter::kernels::UNKNOWN;

/// Mask with one bit set per live lane
#[inline]
const fn lane_mask(live: usize) -> u64 {
    if live >= 64 {
        u64::MAX
    } else {
        (1u64 << live) - 1
    }
}

/// Lanes of a column equal to `letter`
#[inline]
fn eq_mask(column: &[u8], letter: u8) -> u64 {
    let mut mask = 0u64;
    for (k, &b) in column.iter().enumerate() {
        mask |= u64::from(b == letter) << k;
    }
    mask
}

/// Lanes whose word contains `letter` at any position
#[inline]
fn presence_mask(packed: &PackedCorpus, batch: usize, letter: u8) -> u64 {
    let mut mask = 0u64;
    for j in 0..5 {
        mask |= eq_mask(packed.column(batch, j), letter);
    }
    mask
}

/// Count packed words passing the constraint
///
/// Behaviorally equivalent to [`crate::filter::row::count_passing`] over the
/// same logical corpus, for every corpus size and constraint.
#[must_use]
pub fn count_passing(constraint: &Constraint, packed: &PackedCorpus) -> usize {
    let lanes = packed.width().lanes();
    let mut count = 0usize;

    for batch in 0..packed.batches() {
        let live = packed.len().saturating_sub(batch * lanes).min(lanes);
        let mut alive = lane_mask(live);
        if alive == 0 {
            continue;
        }

        for (j, &letter) in constraint.correct().iter().enumerate() {
            if letter != UNKNOWN {
                alive &= eq_mask(packed.column(batch, j), letter);
            }
        }
        if alive == 0 {
            continue;
        }

        for j in 0..5 {
            for &m in constraint.misplaced(j) {
                alive &= !eq_mask(packed.column(batch, j), m) & presence_mask(packed, batch, m);
            }
        }
        if alive == 0 {
            continue;
        }

        for &w in constraint.wrong() {
            alive &= !presence_mask(packed, batch, w);
        }

        count += alive.count_ones() as usize;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, PackWidth};
    use crate::filter::row;

    fn numbered_word(i: usize) -> String {
        // distinct deterministic 5-letter words: "aaaab", "aaaac", ...
        let mut chars = [b'a'; 5];
        let mut n = i;
        for slot in chars.iter_mut().rev() {
            *slot = b'a' + (n % 26) as u8;
            n /= 26;
        }
        String::from_utf8(chars.to_vec()).unwrap()
    }

    fn numbered_corpus(len: usize) -> Corpus {
        let texts: Vec<String> = (0..len).map(numbered_word).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        Corpus::from_strs(&refs).unwrap()
    }

    fn test_constraints() -> Vec<Constraint> {
        vec![
            Constraint::default(),
            Constraint::new(
                [UNKNOWN, UNKNOWN, UNKNOWN, UNKNOWN, b'b'],
                Default::default(),
                b"",
            )
            .unwrap(),
            Constraint::new(
                [UNKNOWN; 5],
                [vec![], vec![], vec![], vec![b'b'], vec![]],
                b"",
            )
            .unwrap(),
            Constraint::new([UNKNOWN; 5], Default::default(), b"bc").unwrap(),
            Constraint::from_comparison(b"aaaab", b"aabba"),
            Constraint::from_comparison(b"aaabc", b"azzzc"),
        ]
    }

    #[test]
    fn layout_equivalence_at_batch_boundaries() {
        for width in [PackWidth::W32, PackWidth::W64] {
            let lanes = width.lanes();
            for len in [0, 1, lanes - 1, lanes, lanes + 1] {
                let corpus = numbered_corpus(len);
                let packed = PackedCorpus::build(&corpus, width);

                for (c, constraint) in test_constraints().iter().enumerate() {
                    assert_eq!(
                        count_passing(constraint, &packed),
                        row::count_passing(constraint, &corpus),
                        "constraint {c}, width {lanes}, corpus size {len}"
                    );
                }
            }
        }
    }

    #[test]
    fn layout_equivalence_multiple_batches() {
        for width in [PackWidth::W32, PackWidth::W64] {
            let corpus = numbered_corpus(3 * width.lanes() + 7);
            let packed = PackedCorpus::build(&corpus, width);

            for constraint in &test_constraints() {
                assert_eq!(
                    count_passing(constraint, &packed),
                    row::count_passing(constraint, &corpus)
                );
            }
        }
    }

    #[test]
    fn padding_lanes_never_counted() {
        // an all-unknown constraint must count exactly the logical words,
        // not the zero-padded tail lanes
        let corpus = numbered_corpus(5);
        for width in [PackWidth::W32, PackWidth::W64] {
            let packed = PackedCorpus::build(&corpus, width);
            assert_eq!(count_passing(&Constraint::default(), &packed), 5);
        }
    }

    #[test]
    fn empty_corpus_counts_zero() {
        let packed = PackedCorpus::build(&Corpus::default(), PackWidth::W64);
        assert_eq!(count_passing(&Constraint::default(), &packed), 0);
    }

    #[test]
    fn exact_match_constraint_counts_one() {
        let corpus = Corpus::from_strs(&["abcde", "edcba"]).unwrap();
        let packed = PackedCorpus::build(&corpus, PackWidth::W32);

        let constraint = Constraint::from_comparison(b"abcde", b"abcde");
        assert_eq!(count_passing(&constraint, &packed), 1);
    }

    #[test]
    fn lane_mask_boundaries() {
        assert_eq!(lane_mask(0), 0);
        assert_eq!(lane_mask(1), 1);
        assert_eq!(lane_mask(32), u64::from(u32::MAX));
        assert_eq!(lane_mask(64), u64::MAX);
    }
}
