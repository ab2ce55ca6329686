//! Fixed-width column-major batch layout
//!
//! Reorganizes a row-major corpus into batches of 32 or 64 words where
//! character k of all words in a batch is stored contiguously. One wide
//! comparison can then test character k across the whole batch at once. The
//! tail batch is zero-padded; a zero byte never matches a letter, and the
//! batched counter masks the padding lanes off before counting anyway.

use super::Corpus;

/// Batch width of the packed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackWidth {
    /// 32 words per batch
    W32,
    /// 64 words per batch
    #[default]
    W64,
}

impl PackWidth {
    /// Number of word lanes per batch
    #[inline]
    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

/// A corpus packed into fixed-width column-major batches
///
/// Batch b occupies bytes `[b * lanes * 5, (b + 1) * lanes * 5)`; within a
/// batch, character j of lane k sits at offset `j * lanes + k`. Built once
/// per run and broadcast read-only into every worker's private scratch, so
/// it is cheap to clone by design.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedCorpus {
    width: PackWidth,
    len: usize,
    bytes: Vec<u8>,
}

impl PackedCorpus {
    /// Pack a row-major corpus into column-major batches
    ///
    /// # Examples
    /// ```
    /// use wordle_rank::corpus::{Corpus, PackWidth, PackedCorpus};
    ///
    /// let corpus = Corpus::from_strs(&["apple", "grape"]).unwrap();
    /// let packed = PackedCorpus::build(&corpus, PackWidth::W32);
    ///
    /// assert_eq!(packed.len(), 2);
    /// assert_eq!(packed.word(1), *b"grape");
    /// // character 0 of both words sits at the front of the first column
    /// assert_eq!(&packed.column(0, 0)[..2], b"ag");
    /// ```
    #[must_use]
    pub fn build(corpus: &Corpus, width: PackWidth) -> Self {
        let lanes = width.lanes();
        let len = corpus.len();
        let batches = len.div_ceil(lanes).max(1);
        let mut bytes = vec![0u8; batches * lanes * 5];

        for (i, word) in corpus.words().iter().enumerate() {
            let base = (i / lanes) * lanes * 5;
            let lane = i % lanes;
            for (j, &ch) in word.chars().iter().enumerate() {
                bytes[base + j * lanes + lane] = ch;
            }
        }

        Self { width, len, bytes }
    }

    /// Number of logical words (excluding tail padding)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no words are packed
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Batch width
    #[inline]
    #[must_use]
    pub const fn width(&self) -> PackWidth {
        self.width
    }

    /// Number of batches, counting the zero-padded tail
    #[inline]
    #[must_use]
    pub const fn batches(&self) -> usize {
        self.bytes.len() / (self.width.lanes() * 5)
    }

    /// The lane bytes of character `j` in batch `b`
    ///
    /// # Panics
    /// Panics if `b >= batches()` or `j >= 5`
    #[inline]
    #[must_use]
    pub fn column(&self, b: usize, j: usize) -> &[u8] {
        assert!(j < 5);
        let lanes = self.width.lanes();
        let start = b * lanes * 5 + j * lanes;
        &self.bytes[start..start + lanes]
    }

    /// Gather word `i` back out of the column-major layout
    ///
    /// The packed corpus is the only per-worker copy of the candidate list,
    /// so candidate iteration reads words through this accessor.
    ///
    /// # Panics
    /// Panics if `i >= len()`
    #[inline]
    #[must_use]
    pub fn word(&self, i: usize) -> [u8; 5] {
        assert!(i < self.len);
        let lanes = self.width.lanes();
        let base = (i / lanes) * lanes * 5;
        let lane = i % lanes;

        let mut chars = [0u8; 5];
        for (j, ch) in chars.iter_mut().enumerate() {
            *ch = self.bytes[base + j * lanes + lane];
        }
        chars
    }
}
