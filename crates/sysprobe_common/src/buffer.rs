//! Padding and tagline placement inside a fixed scratch buffer.

use crate::error::ProbeError;

/// `width` ASCII spaces
pub fn blank_padding(width: usize) -> String {
    " ".repeat(width)
}

/// NUL-terminated `"<word> <tail_len>"`
pub fn make_tagline(word: &str, tail_len: usize) -> String {
    format!("{} {}\0", word, tail_len)
}

/// Whether the last byte is NUL
pub fn has_terminator(tagline: &str) -> bool {
    tagline.as_bytes().last() == Some(&0)
}

/// Where a tagline landed in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub offset: usize,
    pub copied: usize,
}

impl Placement {
    /// The copy ends exactly at `orig_offset`
    pub fn is_aligned(&self, orig_offset: usize) -> bool {
        self.offset + self.copied == orig_offset
    }

    pub fn end(&self) -> usize {
        self.offset + self.copied
    }
}

/// Copy `tagline` so that it ends at `orig_offset`.
///
/// Copies at most as many bytes as the buffer has room for past the offset.
pub fn place_tagline(
    buf: &mut [u8],
    tagline: &str,
    orig_offset: usize,
) -> Result<Placement, ProbeError> {
    let bytes = tagline.as_bytes();
    let offset = orig_offset
        .checked_sub(bytes.len())
        .ok_or(ProbeError::TaglineTooLong {
            len: bytes.len(),
            limit: orig_offset,
        })?;

    let dest = buf.get_mut(offset..).unwrap_or_default();
    let copied = dest.len().min(bytes.len());
    dest[..copied].copy_from_slice(&bytes[..copied]);

    Ok(Placement { offset, copied })
}
