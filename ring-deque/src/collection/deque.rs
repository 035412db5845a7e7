// 1. Valid instances
//
// Live elements always start at `head` and occupy `len` consecutive slots, wrapping around the
// physical end of the block when necessary.
//
// 1.1. Contiguous
//
// |   |   | A | B | C |   |   |   |   |
//
// 1.2. Wrapping
//
// 1.2.1 Pushing an element to the back of the queue.
//
// |   |   |   |   |   |   |   | A | B |
// -------------------------------------
// | C |   |   |   |   |   |   | A | B |
//
// 1.2.2 Prepending an element to the front of the queue.
//
// | A | B |   |   |   |   |   |   |   |
// -------------------------------------
// | A | B |   |   |   |   |   |   | C |
//
// 2. Growth
//
// When all slots are taken, a new block with twice the capacity is allocated and the elements are
// moved in logical order to its beginning.
//
// | C | D | A | B |
// -------------------------------------
// | A | B | C | D |   |   |   |   |

macro_rules! as_slices {
  ($empty:expr, $ptr:ident, $slice:ident, $this:expr, $($ref:tt)*) => {{
    let capacity = $this.data.capacity();
    let head = $this.head;
    let len = $this.len;
    let ptr = $this.data.$ptr();
    let front_len = capacity.wrapping_sub(head);
    // SAFETY: `head` is always equal or less than the capacity
    let head_ptr = unsafe { ptr.add(head) };
    if len > front_len {
      // SAFETY: `ìf` check ensures that all slots from `head` to the end are initialized
      let front = unsafe { $($ref)* *ptr::$slice(head_ptr, front_len) };
      // SAFETY: `ìf` check ensures that the remaining elements start at the first slot
      let back = unsafe { $($ref)* *ptr::$slice(ptr, len.wrapping_sub(front_len)) };
      (front, back)
    } else {
      // SAFETY: the `len` slots after `head` are initialized
      let front = unsafe { $($ref)* *ptr::$slice(head_ptr, len) };
      (front, $empty)
    }
  }}
}

#[cfg(kani)]
mod kani;
#[cfg(all(feature = "_proptest", test))]
mod _proptest;
#[cfg(test)]
mod tests;

use crate::{
  collection::{physical_idx, prev_idx, raw_buffer::RawBuffer},
  misc::hints::{_empty_instance, _out_of_bounds_idx},
};
use core::{
  fmt::{Debug, Display, Formatter},
  iter::Chain,
  ops::{Index, IndexMut},
  ptr, slice,
};

/// Errors of [Deque].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DequeError {
  #[doc = doc_alloc_failure!()]
  AllocationFailure,
  #[doc = doc_cap_overflow!()]
  CapacityOverflow,
}

impl Display for DequeError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl From<DequeError> for u8 {
  #[inline]
  fn from(from: DequeError) -> Self {
    match from {
      DequeError::AllocationFailure => 0,
      DequeError::CapacityOverflow => 1,
    }
  }
}

impl core::error::Error for DequeError {}

/// A double-ended queue implemented with a growable ring buffer.
///
/// Insertions that find the instance full double its capacity, starting at 1. Removals never
/// shrink the capacity.
//
// # Illustration
//
// | D |   |   |   | A | B | C |
//                   |           |--> data.capacity()
//                   |
//                   |----------------> head
//
// len = 4
pub struct Deque<T> {
  data: RawBuffer<T>,
  head: usize,
  len: usize,
}

impl<T> Deque<T> {
  /// Creates a new empty instance without allocating.
  #[inline]
  pub const fn new() -> Self {
    Self { data: RawBuffer::new(), head: 0, len: 0 }
  }

  /// Constructs a new, empty instance with exactly the specified capacity. A capacity of zero
  /// doesn't allocate.
  ///
  /// ```rust
  /// let queue = ring_deque::collection::Deque::<u8>::with_capacity(4).unwrap();
  /// assert_eq!((queue.len(), queue.capacity()), (0, 4));
  /// ```
  #[inline]
  pub fn with_capacity(capacity: usize) -> crate::Result<Self> {
    Ok(Self { data: RawBuffer::with_capacity(capacity)?, head: 0, len: 0 })
  }

  /// Creates a new instance with all the elements of the iterator, in order.
  ///
  /// ```rust
  /// let queue = ring_deque::collection::Deque::from_iterator([1, 2, 3]).unwrap();
  /// assert_eq!(queue.as_slices(), (&[1, 2, 3][..], &[][..]));
  /// ```
  #[inline]
  pub fn from_iterator(ii: impl IntoIterator<Item = T>) -> crate::Result<Self> {
    let mut this = Self::new();
    this.extend_back_from_iter(ii)?;
    Ok(this)
  }

  /// Returns a pair of slices which contain, in order, the contents of the queue.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::with_capacity(8).unwrap();
  /// queue.push_back(1).unwrap();
  /// queue.push_back(2).unwrap();
  /// queue.push_front(3).unwrap();
  /// assert_eq!(queue.as_slices(), (&[3][..], &[1, 2][..]));
  /// ```
  #[inline]
  pub fn as_slices(&self) -> (&[T], &[T]) {
    as_slices!(&[][..], as_ptr, slice_from_raw_parts, self, &)
  }

  /// Mutable version of [`Self::as_slices`].
  #[inline]
  pub fn as_slices_mut(&mut self) -> (&mut [T], &mut [T]) {
    as_slices!(&mut [][..], as_ptr_mut, slice_from_raw_parts_mut, self, &mut)
  }

  /// Reference to the element at the logical index `idx`.
  ///
  /// # Panics
  ///
  /// If `idx` is equal or greater than [`Self::len`].
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.push_back(1).unwrap().push_front(0).unwrap();
  /// assert_eq!(queue.at(0), &0);
  /// assert_eq!(queue.at(1), &1);
  /// ```
  #[inline]
  #[track_caller]
  pub fn at(&self, idx: usize) -> &T {
    match self.get(idx) {
      Some(elem) => elem,
      None => _out_of_bounds_idx(idx, self.len),
    }
  }

  /// Mutable version of [`Self::at`].
  ///
  /// # Panics
  ///
  /// If `idx` is equal or greater than [`Self::len`].
  #[inline]
  #[track_caller]
  pub fn at_mut(&mut self, idx: usize) -> &mut T {
    let len = self.len;
    match self.get_mut(idx) {
      Some(elem) => elem,
      None => _out_of_bounds_idx(idx, len),
    }
  }

  /// Reference to the last element.
  ///
  /// # Panics
  ///
  /// If the instance is empty.
  #[inline]
  #[track_caller]
  pub fn back(&self) -> &T {
    match self.last() {
      Some(elem) => elem,
      None => _empty_instance("back"),
    }
  }

  /// Mutable version of [`Self::back`].
  ///
  /// # Panics
  ///
  /// If the instance is empty.
  #[inline]
  #[track_caller]
  pub fn back_mut(&mut self) -> &mut T {
    match self.last_mut() {
      Some(elem) => elem,
      None => _empty_instance("back_mut"),
    }
  }

  /// Returns the number of elements the queue can hold without reallocating.
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.data.capacity()
  }

  /// Drops all elements. The capacity is kept.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::from_iterator([1, 2]).unwrap();
  /// queue.clear();
  /// assert_eq!((queue.len(), queue.capacity()), (0, 2));
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    let (front, back) = self.as_slices_mut();
    let front: *mut [T] = front;
    let back: *mut [T] = back;
    self.head = 0;
    self.len = 0;
    // SAFETY: elements are no longer reachable through the bookkeeping, so each one is dropped
    // only once
    unsafe {
      drop_elements(front, back);
    }
  }

  /// Appends all elements of the iterator.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.extend_back_from_iter([1, 2]).unwrap();
  /// assert_eq!(queue.as_slices(), (&[1, 2][..], &[][..]));
  /// ```
  #[inline]
  pub fn extend_back_from_iter(&mut self, ii: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in ii {
      let _ = self.push_back(elem)?;
    }
    Ok(())
  }

  /// Prepends all elements of the iterator. The last yielded element ends up at the front.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.extend_front_from_iter([1, 2]).unwrap();
  /// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 1]);
  /// ```
  #[inline]
  pub fn extend_front_from_iter(&mut self, ii: impl IntoIterator<Item = T>) -> crate::Result<()> {
    for elem in ii {
      let _ = self.push_front(elem)?;
    }
    Ok(())
  }

  /// Returns the first element, or `None` if the queue is empty.
  #[inline]
  pub fn first(&self) -> Option<&T> {
    self.get(0)
  }

  /// Returns the first mutable element, or `None` if the queue is empty.
  #[inline]
  pub fn first_mut(&mut self) -> Option<&mut T> {
    self.get_mut(0)
  }

  /// Reference to the first element.
  ///
  /// # Panics
  ///
  /// If the instance is empty.
  #[inline]
  #[track_caller]
  pub fn front(&self) -> &T {
    match self.first() {
      Some(elem) => elem,
      None => _empty_instance("front"),
    }
  }

  /// Mutable version of [`Self::front`].
  ///
  /// # Panics
  ///
  /// If the instance is empty.
  #[inline]
  #[track_caller]
  pub fn front_mut(&mut self) -> &mut T {
    match self.first_mut() {
      Some(elem) => elem,
      None => _empty_instance("front_mut"),
    }
  }

  /// Provides a reference to the element at the given index.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.push_back(1).unwrap();
  /// queue.push_back(3).unwrap();
  /// assert_eq!(queue.get(0), Some(&1));
  /// assert_eq!(queue.get(2), None);
  /// ```
  #[inline]
  pub fn get(&self, idx: usize) -> Option<&T> {
    if idx >= self.len {
      return None;
    }
    let slot = physical_idx(self.data.capacity(), self.head, idx);
    // SAFETY: `slot` points to an initialized element
    let rslt = unsafe { self.data.as_ptr().add(slot) };
    // SAFETY: `rslt` points to valid memory
    unsafe { Some(&*rslt) }
  }

  /// Mutable version of [`Self::get`].
  #[inline]
  pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
    if idx >= self.len {
      return None;
    }
    let slot = physical_idx(self.data.capacity(), self.head, idx);
    // SAFETY: `slot` points to an initialized element
    let rslt = unsafe { self.data.as_ptr_mut().add(slot) };
    // SAFETY: `rslt` points to valid memory
    unsafe { Some(&mut *rslt) }
  }

  /// Allocates a new block with twice the current capacity, or `1` if there is no capacity, and
  /// moves all elements to its beginning. Invoked automatically by insertions that find the
  /// instance full.
  ///
  /// The instance is left untouched if the allocation fails.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.grow().unwrap();
  /// assert_eq!(queue.capacity(), 1);
  /// queue.push_back(1).unwrap();
  /// queue.grow().unwrap();
  /// assert_eq!(queue.capacity(), 2);
  /// ```
  #[inline]
  pub fn grow(&mut self) -> crate::Result<()> {
    let prev_cap = self.data.capacity();
    let new_cap = if prev_cap == 0 {
      1
    } else {
      prev_cap.checked_mul(2).ok_or(DequeError::CapacityOverflow)?
    };
    let mut data = RawBuffer::with_capacity(new_cap)?;
    let (front, back) = self.as_slices();
    let front_len = front.len();
    let dst = data.as_ptr_mut();
    // SAFETY: the new block has room for all elements and doesn't overlap the current block
    unsafe {
      ptr::copy_nonoverlapping(front.as_ptr(), dst, front_len);
    }
    // SAFETY: the new block has room for all elements and doesn't overlap the current block
    unsafe {
      ptr::copy_nonoverlapping(back.as_ptr(), dst.add(front_len), back.len());
    }
    // Elements were relocated, the previous block is only deallocated.
    self.data = data;
    self.head = 0;
    _debug!(len = self.len, new_cap, prev_cap, "Deque has grown");
    Ok(())
  }

  /// Indicates whether the queue holds no elements.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Indicates whether all slots are taken. Empty instances without capacity are also full.
  #[inline]
  pub const fn is_full(&self) -> bool {
    self.len == self.data.capacity()
  }

  /// Indicates whether the elements cross the physical end of the internal block.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::with_capacity(2).unwrap();
  /// queue.push_back(1).unwrap();
  /// assert!(!queue.is_wrapping());
  /// queue.push_front(2).unwrap();
  /// assert!(queue.is_wrapping());
  /// ```
  #[inline]
  pub fn is_wrapping(&self) -> bool {
    self.len > self.data.capacity().wrapping_sub(self.head)
  }

  /// Returns a front-to-back iterator.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.push_back(1).unwrap();
  /// queue.push_front(3).unwrap();
  /// let mut iter = queue.iter();
  /// assert_eq!(iter.next(), Some(&3));
  /// assert_eq!(iter.next(), Some(&1));
  /// assert_eq!(iter.next(), None);
  /// ```
  #[inline]
  pub fn iter(&self) -> Chain<slice::Iter<'_, T>, slice::Iter<'_, T>> {
    let (front, back) = self.as_slices();
    front.iter().chain(back)
  }

  /// Mutable version of [`Self::iter`].
  #[inline]
  pub fn iter_mut(&mut self) -> Chain<slice::IterMut<'_, T>, slice::IterMut<'_, T>> {
    let (front, back) = self.as_slices_mut();
    front.iter_mut().chain(back)
  }

  /// Returns the last element, or `None` if the queue is empty.
  #[inline]
  pub fn last(&self) -> Option<&T> {
    self.get(self.len.checked_sub(1)?)
  }

  /// Returns the last mutable element, or `None` if the queue is empty.
  #[inline]
  pub fn last_mut(&mut self) -> Option<&mut T> {
    self.get_mut(self.len.checked_sub(1)?)
  }

  /// Returns the number of elements.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Drops the last element. Does nothing if the queue is empty.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::from_iterator([1, 2, 3]).unwrap();
  /// queue.pop_back().pop_back();
  /// assert_eq!(queue.as_slices(), (&[1][..], &[][..]));
  /// ```
  #[inline]
  pub fn pop_back(&mut self) -> &mut Self {
    let Some(new_len) = self.len.checked_sub(1) else {
      return self;
    };
    let slot = physical_idx(self.data.capacity(), self.head, new_len);
    self.len = new_len;
    // SAFETY: `slot` points to an initialized element that is no longer tracked
    unsafe {
      ptr::drop_in_place(self.data.as_ptr_mut().add(slot));
    }
    self
  }

  /// Drops the first element. Does nothing if the queue is empty.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::from_iterator([1, 2, 3]).unwrap();
  /// queue.pop_front().pop_front();
  /// assert_eq!(queue.as_slices(), (&[3][..], &[][..]));
  /// ```
  #[inline]
  pub fn pop_front(&mut self) -> &mut Self {
    let Some(new_len) = self.len.checked_sub(1) else {
      return self;
    };
    let prev_head = self.head;
    self.head = physical_idx(self.data.capacity(), prev_head, 1);
    self.len = new_len;
    // SAFETY: `prev_head` points to an initialized element that is no longer tracked
    unsafe {
      ptr::drop_in_place(self.data.as_ptr_mut().add(prev_head));
    }
    self
  }

  /// Appends an element to the back of the queue, growing the instance if it is full.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.push_back(1).unwrap().push_back(3).unwrap();
  /// assert_eq!(queue.as_slices(), (&[1, 3][..], &[][..]));
  /// ```
  #[inline]
  pub fn push_back(&mut self, value: T) -> crate::Result<&mut Self> {
    if self.is_full() {
      self.grow()?;
    }
    let slot = physical_idx(self.data.capacity(), self.head, self.len);
    // SAFETY: there is at least one free slot and `slot` is the first one after the last element
    let dst = unsafe { self.data.as_ptr_mut().add(slot) };
    // SAFETY: `dst` points to an uninitialized slot
    unsafe {
      ptr::write(dst, value);
    }
    self.len = self.len.wrapping_add(1);
    Ok(self)
  }

  /// Prepends an element to the queue, growing the instance if it is full.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::new();
  /// queue.push_front(1).unwrap().push_front(3).unwrap();
  /// assert_eq!(queue.as_slices(), (&[3][..], &[1][..]));
  /// ```
  #[inline]
  pub fn push_front(&mut self, value: T) -> crate::Result<&mut Self> {
    if self.is_full() {
      self.grow()?;
    }
    if self.len > 0 {
      self.head = prev_idx(self.data.capacity(), self.head);
    }
    // SAFETY: there is at least one free slot and `head` is the first one before the first element
    let dst = unsafe { self.data.as_ptr_mut().add(self.head) };
    // SAFETY: `dst` points to an uninitialized slot
    unsafe {
      ptr::write(dst, value);
    }
    self.len = self.len.wrapping_add(1);
    Ok(self)
  }

  /// Removes the last element and returns it, or `None` if the queue is empty.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::from_iterator([1, 3]).unwrap();
  /// assert_eq!(queue.take_back(), Some(3));
  /// assert_eq!(queue.as_slices(), (&[1][..], &[][..]));
  /// ```
  #[inline]
  pub fn take_back(&mut self) -> Option<T> {
    let new_len = self.len.checked_sub(1)?;
    let slot = physical_idx(self.data.capacity(), self.head, new_len);
    self.len = new_len;
    // SAFETY: `slot` points to an initialized element that is no longer tracked
    let src = unsafe { self.data.as_ptr_mut().add(slot) };
    // SAFETY: `src` points to valid memory
    Some(unsafe { ptr::read(src) })
  }

  /// Removes the first element and returns it, or `None` if the queue is empty.
  ///
  /// ```rust
  /// let mut queue = ring_deque::collection::Deque::from_iterator([1, 3]).unwrap();
  /// assert_eq!(queue.take_front(), Some(1));
  /// assert_eq!(queue.as_slices(), (&[3][..], &[][..]));
  /// ```
  #[inline]
  pub fn take_front(&mut self) -> Option<T> {
    let new_len = self.len.checked_sub(1)?;
    let prev_head = self.head;
    self.head = physical_idx(self.data.capacity(), prev_head, 1);
    self.len = new_len;
    // SAFETY: `prev_head` points to an initialized element that is no longer tracked
    let src = unsafe { self.data.as_ptr_mut().add(prev_head) };
    // SAFETY: `src` points to valid memory
    Some(unsafe { ptr::read(src) })
  }
}

impl<T> Clone for Deque<T>
where
  T: Clone,
{
  /// Deep copy with the same capacity. Elements are placed at the beginning of the new block.
  #[inline]
  fn clone(&self) -> Self {
    let data = RawBuffer::with_valid_capacity(self.capacity());
    let mut instance = Self { data, head: 0, len: 0 };
    let dst = instance.data.as_ptr_mut();
    for (idx, elem) in self.iter().enumerate() {
      // SAFETY: both instances have the same capacity and `idx` is less than `self.len`
      unsafe {
        ptr::write(dst.add(idx), elem.clone());
      }
      instance.len = idx.wrapping_add(1);
    }
    instance
  }

  /// Drops all current elements and releases the current block before adopting a copy of
  /// `source`.
  #[inline]
  fn clone_from(&mut self, source: &Self) {
    *self = source.clone();
  }
}

impl<T> Debug for Deque<T>
where
  T: Debug,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
    let (front, back) = self.as_slices();
    f.debug_struct("Deque").field("front", &front).field("back", &back).finish()
  }
}

impl<T> Default for Deque<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for Deque<T> {
  #[inline]
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Eq for Deque<T> where T: Eq {}

impl<T> Index<usize> for Deque<T> {
  type Output = T;

  #[inline]
  #[track_caller]
  fn index(&self, idx: usize) -> &Self::Output {
    self.at(idx)
  }
}

impl<T> IndexMut<usize> for Deque<T> {
  #[inline]
  #[track_caller]
  fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
    self.at_mut(idx)
  }
}

impl<'any, T> IntoIterator for &'any Deque<T> {
  type IntoIter = Chain<slice::Iter<'any, T>, slice::Iter<'any, T>>;
  type Item = &'any T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'any, T> IntoIterator for &'any mut Deque<T> {
  type IntoIter = Chain<slice::IterMut<'any, T>, slice::IterMut<'any, T>>;
  type Item = &'any mut T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

/// Physical layout is irrelevant, only the logical sequence of elements is compared.
impl<T> PartialEq for Deque<T>
where
  T: PartialEq,
{
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

/// Drops both runs of elements, even if the destructor of an element of the first run panics.
///
/// # Safety
///
/// Both slices must contain initialized elements that are not reachable through anything else.
unsafe fn drop_elements<T>(front: *mut [T], back: *mut [T]) {
  struct Guard<T>(*mut [T]);
  impl<T> Drop for Guard<T> {
    fn drop(&mut self) {
      // SAFETY: it is up to the caller to provide initialized elements
      unsafe {
        ptr::drop_in_place(self.0);
      }
    }
  }

  _trace!("Dropping elements");
  let _back_dropper = Guard(back);
  let _front_dropper = Guard(front);
}

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::collection::Deque;
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any, T> Arbitrary<'any> for Deque<T>
  where
    T: Arbitrary<'any>,
  {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let len = u8::arbitrary(u)?;
      let mut this = Self::new();
      for _ in 0..len {
        let elem = T::arbitrary(u)?;
        if bool::arbitrary(u)? {
          let _ = this.push_back(elem).map_err(|_err| arbitrary::Error::IncorrectFormat)?;
        } else {
          let _ = this.push_front(elem).map_err(|_err| arbitrary::Error::IncorrectFormat)?;
        }
      }
      Ok(this)
    }
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::collection::Deque;
  use core::{fmt::Formatter, marker::PhantomData};
  use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
  };

  impl<'de, T> Deserialize<'de> for Deque<T>
  where
    T: Deserialize<'de>,
  {
    #[inline]
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
      DE: Deserializer<'de>,
    {
      struct DequeVisitor<T>(PhantomData<T>);

      impl<'de, T> Visitor<'de> for DequeVisitor<T>
      where
        T: Deserialize<'de>,
      {
        type Value = Deque<T>;

        #[inline]
        fn expecting(&self, formatter: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
          formatter.write_str("a sequence")
        }

        #[inline]
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut this = Deque::new();
          while let Some(elem) = seq.next_element()? {
            let _ = this.push_back(elem).map_err(de::Error::custom)?;
          }
          Ok(this)
        }
      }

      deserializer.deserialize_seq(DequeVisitor::<T>(PhantomData))
    }
  }

  impl<T> Serialize for Deque<T>
  where
    T: Serialize,
  {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      let mut seq = serializer.serialize_seq(Some(self.len()))?;
      for elem in self.iter() {
        seq.serialize_element(elem)?;
      }
      seq.end()
    }
  }
}
