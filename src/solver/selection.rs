//! Top-N selection over the score table
//!
//! Partial selection of the K best (lowest) scores; lower means fewer
//! candidates expected to survive the guess, so more information gained.

/// Indices of the `n` smallest scores, ascending
///
/// Ties are broken by ascending original index, so selection is stable and
/// deterministic. Returns `min(n, scores.len())` indices; empty when `n` is
/// zero or `scores` is empty.
///
/// # Examples
/// ```
/// use wordle_rank::solver::selection::smallest_n;
///
/// let scores = [4.0, 1.0, 3.0, 1.0];
/// assert_eq!(smallest_n(&scores, 3), vec![1, 3, 2]);
/// assert_eq!(smallest_n(&scores, 10), vec![1, 3, 2, 0]);
/// assert!(smallest_n(&scores, 0).is_empty());
/// ```
#[must_use]
pub fn smallest_n(scores: &[f32], n: usize) -> Vec<usize> {
    if n == 0 || scores.is_empty() {
        return Vec::new();
    }

    let n = n.min(scores.len());
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    let compare =
        |&a: &usize, &b: &usize| scores[a].total_cmp(&scores[b]).then_with(|| a.cmp(&b));

    // partial selection: partition the n smallest to the front, sort only those
    if n < indices.len() {
        indices.select_nth_unstable_by(n - 1, compare);
        indices.truncate(n);
    }
    indices.sort_unstable_by(compare);

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_min_of_n_and_len() {
        let scores = [3.0, 1.0, 2.0];
        assert_eq!(smallest_n(&scores, 2).len(), 2);
        assert_eq!(smallest_n(&scores, 3).len(), 3);
        assert_eq!(smallest_n(&scores, 50).len(), 3);
    }

    #[test]
    fn empty_for_zero_n_or_empty_scores() {
        assert!(smallest_n(&[1.0, 2.0], 0).is_empty());
        assert!(smallest_n(&[], 5).is_empty());
    }

    #[test]
    fn selects_smallest_in_ascending_order() {
        let scores = [5.0, 0.5, 4.0, 2.5, 1.0];
        assert_eq!(smallest_n(&scores, 3), vec![1, 4, 3]);
    }

    #[test]
    fn returned_scores_non_decreasing() {
        let scores = [2.0, 7.0, 1.0, 1.0, 9.0, 3.0, 0.0];
        let picked = smallest_n(&scores, 5);

        for pair in picked.windows(2) {
            assert!(scores[pair[0]] <= scores[pair[1]]);
        }
    }

    #[test]
    fn omitted_scores_not_smaller_than_returned() {
        let scores = [2.0, 7.0, 1.0, 1.0, 9.0, 3.0, 0.0];
        let picked = smallest_n(&scores, 3);
        let max_returned = picked
            .iter()
            .map(|&i| scores[i])
            .fold(f32::NEG_INFINITY, f32::max);

        for i in 0..scores.len() {
            if !picked.contains(&i) {
                assert!(scores[i] >= max_returned);
            }
        }
    }

    #[test]
    fn ties_broken_by_ascending_index() {
        let scores = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(smallest_n(&scores, 2), vec![0, 1]);
        assert_eq!(smallest_n(&scores, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn tie_at_the_selection_boundary() {
        // indices 1 and 3 tie; only the lower index makes the cut
        let scores = [0.0, 2.0, 1.0, 2.0, 2.0];
        assert_eq!(smallest_n(&scores, 3), vec![0, 2, 1]);
    }
}
