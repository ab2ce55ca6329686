//! Predicate kernels for 5-byte word comparison
//!
//! Fixed-contract boolean predicates over packed word bytes. These are the
//! leaf comparisons of every filtering path; they carry no state and work on
//! plain byte slices, so the optimizer is free to vectorize them. The fast
//! wrong-letter path takes a zero-padded 16-byte needle block because a zero
//! byte can never collide with an ASCII lowercase letter.

/// Sentinel byte for an unknown correct-position letter
pub const UNKNOWN: u8 = b' ';

/// Check that no needle byte occurs anywhere in the 5-byte haystack
///
/// Returns `true` when `needles` is empty.
#[inline]
#[must_use]
pub fn no_common_chars(haystack: &[u8; 5], needles: &[u8]) -> bool {
    needles.iter().all(|&n| !haystack.contains(&n))
}

/// `no_common_chars` for needle sets of at most 16 bytes, zero-padded
///
/// The padding bytes are zero and never match a lowercase letter, so the
/// whole block can be scanned unconditionally.
#[inline]
#[must_use]
pub fn fast_no_common_chars(haystack: &[u8; 5], needles: &[u8; 16]) -> bool {
    let mut found = false;
    for &n in needles {
        let mut hit = false;
        for &h in haystack {
            hit |= h == n;
        }
        // n == 0 padding can never equal a letter byte
        found |= hit;
    }
    !found
}

/// Check every known correct-slot letter against the word
///
/// Slots holding [`UNKNOWN`] match any letter.
#[inline]
#[must_use]
pub fn correct_letters_match(correct: &[u8; 5], word: &[u8; 5]) -> bool {
    let mut ok = true;
    for j in 0..5 {
        ok &= correct[j] == UNKNOWN || correct[j] == word[j];
    }
    ok
}

/// Check the misplaced-letter constraints against the word
///
/// `misplaced_flat` concatenates the per-position misplaced lists in
/// position order; `counts[j]` gives the length of position j's list. Each
/// recorded letter must appear somewhere in the word but not at its
/// recorded position.
#[inline]
#[must_use]
pub fn misplaced_letters_ok(word: &[u8; 5], misplaced_flat: &[u8], counts: &[u8; 5]) -> bool {
    let mut offset = 0usize;
    for j in 0..5 {
        let end = offset + counts[j] as usize;
        for &m in &misplaced_flat[offset..end] {
            if word[j] == m || !word.contains(&m) {
                return false;
            }
        }
        offset = end;
    }
    true
}
