//! Round-down alignment of record sizes.

/// `(base + len + header)` rounded down to a multiple of `align`.
///
/// `align` must be a non-zero power of two.
pub fn aligned_size(base: usize, len: usize, header: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (base + len + header) & !(align - 1)
}
