//! Set-like helpers over small ordered sequences.
//!
//! One-ring fans rarely exceed a handful of entries, so a linear scan over a
//! `Vec` beats hashing here and keeps insertion order intact.

/// Index of the first element equal to `value`.
#[inline]
pub fn index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().position(|x| x == value)
}

/// Push `value` unless it is already present. Returns `true` if it was pushed.
#[inline]
pub fn append_unique<T: PartialEq>(seq: &mut Vec<T>, value: T) -> bool {
    if index_of(seq, &value).is_some() {
        return false;
    }
    seq.push(value);
    true
}
