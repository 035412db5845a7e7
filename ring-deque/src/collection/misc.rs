/// Maps a logical index, relative to the front element at `head`, to the physical slot of a ring
/// buffer with `capacity` slots.
///
/// `head` must be less than `capacity` and `logical` must be equal or less than `capacity`, which
/// is always the case for live elements. An instance without capacity has no slots, so `0` is
/// returned.
///
/// ```rust
/// use ring_deque::collection::physical_idx;
///
/// assert_eq!(physical_idx(4, 1, 2), 3);
/// assert_eq!(physical_idx(4, 3, 2), 1);
/// assert_eq!(physical_idx(0, 0, 0), 0);
/// ```
#[inline]
pub const fn physical_idx(capacity: usize, head: usize, logical: usize) -> usize {
  if capacity == 0 {
    return 0;
  }
  let free_until_end = capacity.wrapping_sub(head);
  if logical < free_until_end {
    head.wrapping_add(logical)
  } else {
    logical.wrapping_sub(free_until_end)
  }
}

/// The physical slot that precedes `idx` in a ring buffer with `capacity` slots.
///
/// ```rust
/// use ring_deque::collection::prev_idx;
///
/// assert_eq!(prev_idx(4, 2), 1);
/// assert_eq!(prev_idx(4, 0), 3);
/// ```
#[inline]
pub const fn prev_idx(capacity: usize, idx: usize) -> usize {
  if idx == 0 {
    capacity.saturating_sub(1)
  } else {
    idx.wrapping_sub(1)
  }
}
