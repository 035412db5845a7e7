#[allow(clippy::panic, reason = "documented precondition of the caller")]
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn _empty_instance(method: &'static str) -> ! {
  panic!("`{method}` was called on an empty deque");
}

#[allow(clippy::panic, reason = "documented precondition of the caller")]
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn _out_of_bounds_idx(idx: usize, len: usize) -> ! {
  panic!("index out of bounds: the len is {len} but the index is {idx}");
}

#[allow(clippy::panic, reason = "programming error that should be unreachable")]
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) const fn _unlikely_unreachable() -> ! {
  panic!("Entered in a branch that should be impossible, which is likely a programming error");
}
