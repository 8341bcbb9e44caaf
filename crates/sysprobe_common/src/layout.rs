//! Layout constants for the buffer and alignment checks.
//!
//! These are fixed for a normal run. They are kept in one struct so the
//! arithmetic can be exercised with other values in tests.

use std::ops::RangeInclusive;

/// Size of the scratch buffer
pub const DEFAULT_BUFFER_LEN: usize = 256;

/// Offset the tagline must end at
pub const DEFAULT_ORIG_OFFSET: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeLayout {
    /// Length of the zeroed scratch buffer
    pub buffer_len: usize,

    /// Position the copied tagline must end at
    pub orig_offset: usize,

    /// Width of the blank padding string
    pub blank_width: usize,

    /// Leading word of the tagline
    pub tag_word: String,

    /// Fixed part of the aligned size
    pub align_base: usize,

    /// Header bytes added before rounding
    pub align_header: usize,

    /// Rounding boundary, must be a power of two
    pub align_to: usize,

    /// Payload lengths printed by the alignment step
    pub align_lengths: RangeInclusive<usize>,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self {
            buffer_len: DEFAULT_BUFFER_LEN,
            orig_offset: DEFAULT_ORIG_OFFSET,
            blank_width: 40,
            tag_word: "commit".to_string(),
            align_base: 62,
            align_header: 8,
            align_to: 8,
            align_lengths: 1..=19,
        }
    }
}

impl ProbeLayout {
    /// Bytes left in the buffer after skipping `orig_offset`
    pub fn tail_len(&self) -> usize {
        self.buffer_len.saturating_sub(self.orig_offset)
    }
}
