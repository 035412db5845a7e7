use crate::collection::Deque;
use alloc::collections::VecDeque;

#[kani::proof]
fn deque() {
  let bytes = kani::vec::any_vec::<u8, 8>();
  let mut deque = Deque::new();
  let mut vec_deque = VecDeque::new();

  for byte in bytes.iter().copied() {
    let _ = deque.push_front(byte).unwrap();
    vec_deque.push_front(byte);
  }
  assert_eq!(deque.len(), vec_deque.len());
  assert!(deque.len() <= deque.capacity());
  for _ in 0..(bytes.len() / 2) {
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.get(0), vec_deque.get(0));
    assert_eq!(deque.get_mut(0), vec_deque.get_mut(0));
    assert_eq!(deque.take_back(), vec_deque.pop_back());
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.get(0), vec_deque.get(0));
    assert_eq!(deque.get_mut(0), vec_deque.get_mut(0));
    assert_eq!(deque.take_front(), vec_deque.pop_front());
  }
  loop {
    if deque.is_empty() {
      break;
    }
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.take_back(), vec_deque.pop_back());
    if deque.is_empty() {
      break;
    }
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.take_front(), vec_deque.pop_front());
  }
  assert_eq!((deque.len(), vec_deque.len()), (0, 0));
}
