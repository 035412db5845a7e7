use crate::collection::Deque;
use alloc::{collections::VecDeque, vec::Vec};

#[test_strategy::proptest]
fn deque(bytes: Vec<u8>) {
  let mut deque = Deque::new();
  let mut vec_deque = VecDeque::new();

  for byte in bytes.iter().copied() {
    if byte % 2 == 0 {
      let _ = deque.push_front(byte).unwrap();
      vec_deque.push_front(byte);
    } else {
      let _ = deque.push_back(byte).unwrap();
      vec_deque.push_back(byte);
    }
  }
  assert_eq!(deque.len(), vec_deque.len());
  let expected_cap = if deque.is_empty() { 0 } else { deque.len().next_power_of_two() };
  assert_eq!(deque.capacity(), expected_cap);
  for _ in 0..(bytes.len() / 2) {
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.get(0), vec_deque.get(0));
    assert_eq!(deque.get_mut(0), vec_deque.get_mut(0));
    assert_eq!(deque.take_back(), vec_deque.pop_back());
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.last(), vec_deque.back());
    assert_eq!(deque.take_front(), vec_deque.pop_front());
  }
  loop {
    if deque.is_empty() {
      break;
    }
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.first(), vec_deque.front());
    let _ = deque.pop_back();
    let _ = vec_deque.pop_back();
    if deque.is_empty() {
      break;
    }
    assert!(deque.iter().eq(vec_deque.iter()));
    assert_eq!(deque.last(), vec_deque.back());
    let _ = deque.pop_front();
    let _ = vec_deque.pop_front();
  }
  assert_eq!((deque.len(), vec_deque.len()), (0, 0));
}

#[test_strategy::proptest]
fn interleaved_operations(ops: Vec<(u8, u16)>) {
  let mut deque = Deque::new();
  let mut vec_deque = VecDeque::new();

  for (op, value) in ops {
    match op % 6 {
      0 => {
        let _ = deque.push_back(value).unwrap();
        vec_deque.push_back(value);
      }
      1 => {
        let _ = deque.push_front(value).unwrap();
        vec_deque.push_front(value);
      }
      2 => {
        let _ = deque.pop_back();
        let _ = vec_deque.pop_back();
      }
      3 => {
        let _ = deque.pop_front();
        let _ = vec_deque.pop_front();
      }
      4 => {
        let prev_cap = deque.capacity();
        let clone = deque.clone();
        assert_eq!(clone, deque);
        deque.grow().unwrap();
        assert_eq!(deque.capacity(), prev_cap.saturating_mul(2).max(1));
        assert_eq!(clone, deque);
      }
      _ => {
        let idx = usize::from(value) % deque.len().max(1);
        assert_eq!(deque.get(idx), vec_deque.get(idx));
      }
    }
    assert_eq!(deque.len(), vec_deque.len());
    assert_eq!(deque.is_empty(), vec_deque.is_empty());
    assert_eq!(deque.is_full(), deque.len() == deque.capacity());
    assert!(deque.iter().eq(vec_deque.iter()));
  }
}
