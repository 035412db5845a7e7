use crate::collection::{Deque, DequeError};
use alloc::{rc::Rc, vec::Vec};
use core::{
  cell::Cell,
  sync::atomic::{AtomicUsize, Ordering},
};

#[derive(Clone, Debug)]
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
  fn drop(&mut self) {
    self.0.set(self.0.get() + 1);
  }
}

fn elements<T>(deque: &Deque<T>) -> Vec<T>
where
  T: Clone,
{
  (0..deque.len()).map(|idx| deque.at(idx).clone()).collect()
}

#[test]
fn at_follows_push_order() {
  let mut deque = Deque::new();
  let _ = deque.push_back(3).unwrap().push_front(2).unwrap().push_back(4).unwrap();
  let _ = deque.push_front(1).unwrap().push_front(0).unwrap().push_back(5).unwrap();
  assert_eq!(deque.len(), 6);
  assert_eq!(elements(&deque), [0, 1, 2, 3, 4, 5]);
  assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
}

#[test]
fn at_mut_modifies_elements() {
  let mut deque = Deque::from_iterator([1, 2, 3]).unwrap();
  *deque.at_mut(1) = 20;
  deque[2] = 30;
  *deque.front_mut() = 10;
  assert_eq!(elements(&deque), [10, 20, 30]);
  *deque.back_mut() = 300;
  assert_eq!(deque[2], 300);
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
fn at_panics_when_out_of_bounds() {
  let deque = Deque::from_iterator([1, 2]).unwrap();
  let _ = deque.at(2);
}

#[test]
#[should_panic(expected = "`back` was called on an empty deque")]
fn back_panics_when_empty() {
  let deque = Deque::<i32>::new();
  let _ = deque.back();
}

#[test]
fn clear_drops_all_elements_and_keeps_capacity() {
  let counter = Rc::new(Cell::new(0));
  let mut deque = Deque::with_capacity(4).unwrap();
  let _ = deque.push_back(DropCounter(counter.clone())).unwrap();
  let _ = deque.push_front(DropCounter(counter.clone())).unwrap();
  let _ = deque.push_front(DropCounter(counter.clone())).unwrap();
  assert!(deque.is_wrapping());
  deque.clear();
  assert_eq!(counter.get(), 3);
  assert_eq!((deque.len(), deque.capacity(), deque.head), (0, 4, 0));
  assert!(deque.is_empty());
}

#[test]
fn clone_does_not_alias() {
  let mut original = Deque::with_capacity(4).unwrap();
  let _ = original.push_back(2).unwrap().push_front(1).unwrap().push_front(0).unwrap();
  let mut copy = original.clone();
  assert_eq!(copy, original);
  assert_eq!(copy.capacity(), original.capacity());
  let _ = copy.push_back(3).unwrap().pop_front().pop_front();
  *copy.at_mut(0) = 20;
  assert_eq!(elements(&original), [0, 1, 2]);
  assert_eq!(elements(&copy), [20, 3]);
}

#[test]
fn clone_from_releases_previous_elements() {
  let counter = Rc::new(Cell::new(0));
  let mut target = Deque::new();
  let _ = target.push_back(DropCounter(counter.clone())).unwrap();
  let _ = target.push_back(DropCounter(counter.clone())).unwrap();
  let mut source = Deque::new();
  let _ = source.push_back(DropCounter(counter.clone())).unwrap();
  target.clone_from(&source);
  assert_eq!(counter.get(), 2);
  assert_eq!((target.len(), source.len()), (1, 1));
  drop(target);
  assert_eq!(counter.get(), 3);
  drop(source);
  assert_eq!(counter.get(), 4);
}

#[test]
fn concrete_scenario() {
  let mut deque = Deque::with_capacity(2).unwrap();
  let _ = deque.push_back(1).unwrap().push_back(2).unwrap();
  assert_eq!((deque.len(), deque.capacity()), (2, 2));
  assert_eq!((deque.front(), deque.back()), (&1, &2));
  let _ = deque.push_back(3).unwrap();
  assert_eq!((deque.len(), deque.capacity()), (3, 4));
  assert_eq!(elements(&deque), [1, 2, 3]);
  let _ = deque.push_front(0).unwrap();
  assert_eq!((deque.len(), deque.capacity()), (4, 4));
  assert_eq!(elements(&deque), [0, 1, 2, 3]);
  let _ = deque.pop_front();
  assert_eq!(deque.len(), 3);
  assert_eq!(elements(&deque), [1, 2, 3]);
  let _ = deque.pop_back();
  assert_eq!(deque.len(), 2);
  assert_eq!(elements(&deque), [1, 2]);
}

#[test]
fn debug_shows_both_runs() {
  let mut deque = Deque::with_capacity(4).unwrap();
  let _ = deque.push_back(1).unwrap().push_front(0).unwrap();
  assert_eq!(alloc::format!("{deque:?}"), "Deque { front: [0], back: [1] }");
}

#[test]
fn drop_releases_every_element_once() {
  let counter = Rc::new(Cell::new(0));
  {
    let mut deque = Deque::new();
    for _ in 0..5 {
      let _ = deque.push_front(DropCounter(counter.clone())).unwrap();
      let _ = deque.push_back(DropCounter(counter.clone())).unwrap();
    }
    let _ = deque.pop_back().pop_front();
    assert_eq!(counter.get(), 2);
    let elem = deque.take_front();
    assert_eq!(counter.get(), 2);
    drop(elem);
    assert_eq!(counter.get(), 3);
  }
  assert_eq!(counter.get(), 10);
}

#[test]
fn empty_and_full_predicates() {
  let mut deque = Deque::new();
  assert!(deque.is_empty() && deque.is_full());
  let _ = deque.push_back(1).unwrap();
  assert!(!deque.is_empty() && deque.is_full());
  let _ = deque.push_back(2).unwrap().push_back(3).unwrap();
  assert_eq!((deque.len(), deque.capacity()), (3, 4));
  assert!(!deque.is_empty() && !deque.is_full());
  let _ = deque.pop_back().pop_back().pop_back();
  assert!(deque.is_empty() && !deque.is_full());
}

#[test]
fn equality_ignores_physical_layout() {
  let mut lhs = Deque::with_capacity(4).unwrap();
  let _ = lhs.push_back(2).unwrap().push_back(3).unwrap().push_front(1).unwrap();
  let rhs = Deque::from_iterator([1, 2, 3]).unwrap();
  assert!(lhs.is_wrapping());
  assert!(!rhs.is_wrapping());
  assert_eq!(lhs, rhs);
  let _ = lhs.pop_back();
  assert_ne!(lhs, rhs);
}

#[test]
fn extend_front_from_iter_reverses_input() {
  let mut deque = Deque::from_iterator([3, 4]).unwrap();
  deque.extend_front_from_iter([2, 1, 0]).unwrap();
  assert_eq!(elements(&deque), [0, 1, 2, 3, 4]);
}

#[test]
fn failed_push_drops_value_and_keeps_previous_state() {
  static DROPS: AtomicUsize = AtomicUsize::new(0);

  struct Zst;

  impl Drop for Zst {
    fn drop(&mut self) {
      let _ = DROPS.fetch_add(1, Ordering::Relaxed);
    }
  }

  let cap = usize::MAX / 2 + 1;
  let mut deque = Deque::with_capacity(cap).unwrap();
  let _ = deque.push_back(Zst).unwrap().push_front(Zst).unwrap();
  // Zero-sized slots carry no data so the remaining ones can be marked as taken.
  deque.len = cap;
  assert!(deque.is_full());
  let head = deque.head;
  assert!(matches!(
    deque.push_back(Zst),
    Err(crate::Error::DequeError(DequeError::CapacityOverflow))
  ));
  assert_eq!(DROPS.load(Ordering::Relaxed), 1);
  assert_eq!((deque.len(), deque.capacity(), deque.head), (cap, cap, head));
  assert!(matches!(
    deque.push_front(Zst),
    Err(crate::Error::DequeError(DequeError::CapacityOverflow))
  ));
  assert_eq!(DROPS.load(Ordering::Relaxed), 2);
  assert_eq!((deque.len(), deque.capacity(), deque.head), (cap, cap, head));
  deque.len = 2;
  drop(deque);
  assert_eq!(DROPS.load(Ordering::Relaxed), 4);
}

#[test]
fn first_and_last_are_optional() {
  let mut deque = Deque::new();
  assert_eq!((deque.first(), deque.last()), (None, None));
  assert_eq!(deque.get_mut(0), None);
  let _ = deque.push_back(1).unwrap().push_back(2).unwrap();
  assert_eq!((deque.first(), deque.last()), (Some(&1), Some(&2)));
  *deque.last_mut().unwrap() = 3;
  *deque.first_mut().unwrap() = 0;
  assert_eq!(elements(&deque), [0, 3]);
}

#[test]
#[should_panic(expected = "`front` was called on an empty deque")]
fn front_panics_when_empty() {
  let deque = Deque::<i32>::with_capacity(2).unwrap();
  let _ = deque.front();
}

#[test]
fn growth_preserves_wrapped_elements() {
  let mut deque = Deque::with_capacity(4).unwrap();
  let _ = deque.push_back(2).unwrap().push_back(3).unwrap();
  let _ = deque.push_front(1).unwrap().push_front(0).unwrap();
  assert!(deque.is_full());
  assert!(deque.is_wrapping());
  assert_eq!(deque.head, 2);
  let _ = deque.push_front(-1).unwrap();
  assert_eq!((deque.len(), deque.capacity()), (5, 8));
  assert_eq!(elements(&deque), [-1, 0, 1, 2, 3]);
  assert_eq!(deque.head, 7);
}

#[test]
fn growth_starts_at_one_and_doubles() {
  let mut deque = Deque::new();
  assert_eq!(deque.capacity(), 0);
  let mut capacities = Vec::new();
  for elem in 0..9 {
    let _ = deque.push_back(elem).unwrap();
    capacities.push(deque.capacity());
  }
  assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
  assert_eq!(elements(&deque), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn grow_moves_elements_to_the_beginning() {
  let mut deque = Deque::with_capacity(3).unwrap();
  let _ = deque.push_back(1).unwrap().push_front(0).unwrap();
  assert_eq!(deque.head, 2);
  deque.grow().unwrap();
  assert_eq!((deque.head, deque.len(), deque.capacity()), (0, 2, 6));
  assert_eq!(deque.as_slices(), (&[0, 1][..], &[][..]));
}

#[test]
fn grow_overflow_keeps_previous_state() {
  let mut deque = Deque::<()>::with_capacity(usize::MAX / 2 + 1).unwrap();
  let _ = deque.push_back(()).unwrap();
  assert!(deque.grow().is_err());
  assert_eq!((deque.len(), deque.capacity()), (1, usize::MAX / 2 + 1));
}

#[test]
fn iter_mut_visits_elements_in_order() {
  let mut deque = Deque::<usize>::with_capacity(4).unwrap();
  let _ = deque.push_back(2).unwrap().push_front(1).unwrap();
  for (idx, elem) in (&mut deque).into_iter().enumerate() {
    *elem *= 10 + idx;
  }
  assert_eq!((&deque).into_iter().copied().collect::<Vec<_>>(), [10, 22]);
}

#[test]
fn pop_on_empty_is_a_no_op() {
  let mut deque = Deque::<i32>::new();
  let _ = deque.pop_back().pop_front().pop_back().pop_front();
  assert_eq!((deque.len(), deque.capacity()), (0, 0));
  let mut deque = Deque::<i32>::with_capacity(2).unwrap();
  let _ = deque.pop_front().pop_back();
  assert_eq!((deque.len(), deque.capacity()), (0, 2));
  assert_eq!((deque.take_back(), deque.take_front()), (None, None));
}

#[test]
fn pops_never_shrink() {
  let mut deque = Deque::from_iterator(0..5).unwrap();
  assert_eq!(deque.capacity(), 8);
  while !deque.is_empty() {
    let _ = deque.pop_front();
  }
  assert_eq!(deque.capacity(), 8);
}

#[test]
fn push_front_into_empty_instance_keeps_head() {
  let mut deque = Deque::with_capacity(4).unwrap();
  let _ = deque.push_back(1).unwrap().push_back(2).unwrap().pop_front().pop_front();
  assert_eq!(deque.head, 2);
  let _ = deque.push_front(3).unwrap();
  assert_eq!(deque.head, 2);
  assert_eq!(deque.as_slices(), (&[3][..], &[][..]));
}

#[test]
fn push_pop_round_trips() {
  let mut deque = Deque::from_iterator([1, 2, 3]).unwrap();
  let _ = deque.push_front(0).unwrap();
  let snapshot = deque.clone();
  let _ = deque.push_back(9).unwrap().pop_back();
  assert_eq!(deque, snapshot);
  let _ = deque.push_front(9).unwrap().pop_front();
  assert_eq!(deque, snapshot);
}

#[test]
fn take_moves_elements_out() {
  let mut deque = Deque::with_capacity(2).unwrap();
  let _ = deque.push_back(alloc::string::String::from("b")).unwrap();
  let _ = deque.push_front(alloc::string::String::from("a")).unwrap();
  assert_eq!(deque.take_back().as_deref(), Some("b"));
  assert_eq!(deque.take_front().as_deref(), Some("a"));
  assert!(deque.is_empty());
}

#[test]
fn zero_sized_types() {
  let mut deque = Deque::new();
  for _ in 0..10 {
    let _ = deque.push_front(()).unwrap();
  }
  assert_eq!((deque.len(), deque.capacity()), (10, 16));
  let _ = deque.pop_back();
  assert_eq!(deque.iter().count(), 9);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_sequences() {
  let mut deque = Deque::with_capacity(4).unwrap();
  let _ = deque.push_back(2).unwrap().push_front(1).unwrap();
  let json = serde_json::to_string(&deque).unwrap();
  assert_eq!(json, "[1,2]");
  let other: Deque<i32> = serde_json::from_str(&json).unwrap();
  assert_eq!(other, deque);
}
