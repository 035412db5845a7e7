use crate::{collection::DequeError, misc::hints::_unlikely_unreachable};
use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::{marker::PhantomData, mem::size_of, ptr::NonNull};

/// Owned block of exactly `capacity` uninitialized slots.
///
/// Slots are never read, written or dropped by this structure. Keeping track of which slots hold
/// initialized elements is up to the owner, which must drop or move them out before the block is
/// released.
pub(crate) struct RawBuffer<T> {
  cap: usize,
  phantom: PhantomData<T>,
  ptr: NonNull<T>,
}

impl<T> RawBuffer<T> {
  const IS_ZST: bool = size_of::<T>() == 0;

  pub(crate) const fn new() -> Self {
    Self { cap: 0, phantom: PhantomData, ptr: NonNull::dangling() }
  }

  /// Requests a block of `cap` slots from the global allocator.
  pub(crate) fn with_capacity(cap: usize) -> Result<Self, DequeError> {
    if cap == 0 || Self::IS_ZST {
      return Ok(Self { cap, phantom: PhantomData, ptr: NonNull::dangling() });
    }
    let layout = Self::layout(cap)?;
    let Some(ptr) = Self::allocate(layout) else {
      _debug!(capacity = cap, size = layout.size(), "Memory allocation failure");
      return Err(DequeError::AllocationFailure);
    };
    Ok(Self { cap, phantom: PhantomData, ptr })
  }

  /// Same as [`Self::with_capacity`] but for capacities that are already known to be valid.
  /// Aborts through [`handle_alloc_error`] if the allocator fails.
  pub(crate) fn with_valid_capacity(cap: usize) -> Self {
    if cap == 0 || Self::IS_ZST {
      return Self { cap, phantom: PhantomData, ptr: NonNull::dangling() };
    }
    let Ok(layout) = Self::layout(cap) else {
      _unlikely_unreachable();
    };
    let Some(ptr) = Self::allocate(layout) else {
      handle_alloc_error(layout);
    };
    Self { cap, phantom: PhantomData, ptr }
  }

  pub(crate) const fn as_ptr(&self) -> *const T {
    self.ptr.as_ptr()
  }

  pub(crate) fn as_ptr_mut(&mut self) -> *mut T {
    self.ptr.as_ptr()
  }

  pub(crate) const fn capacity(&self) -> usize {
    self.cap
  }

  fn allocate(layout: Layout) -> Option<NonNull<T>> {
    // SAFETY: callers never pass zero-sized layouts
    let ptr = unsafe { alloc(layout) };
    NonNull::new(ptr.cast::<T>())
  }

  fn layout(cap: usize) -> Result<Layout, DequeError> {
    Layout::array::<T>(cap).map_err(|_err| DequeError::CapacityOverflow)
  }
}

impl<T> Drop for RawBuffer<T> {
  #[inline]
  fn drop(&mut self) {
    if self.cap == 0 || Self::IS_ZST {
      return;
    }
    let Ok(layout) = Self::layout(self.cap) else {
      return;
    };
    // SAFETY: `ptr` was allocated with the same layout in `with_capacity` or `with_valid_capacity`
    unsafe {
      dealloc(self.ptr.as_ptr().cast(), layout);
    }
  }
}

// SAFETY: the block is uniquely owned, as in `Vec<T>`
unsafe impl<T> Send for RawBuffer<T> where T: Send {}

// SAFETY: shared access never mutates the block, as in `Vec<T>`
unsafe impl<T> Sync for RawBuffer<T> where T: Sync {}
