//! Deque

#![no_main]

use ring_deque::collection::Deque;
use std::collections::VecDeque;

libfuzzer_sys::fuzz_target!(|data: (Deque<u8>, Vec<(u8, u8)>)| {
  let (mut deque, ops) = data;
  let mut vec_deque: VecDeque<u8> = deque.iter().copied().collect();
  for (op, value) in ops {
    match op % 6 {
      0 => {
        if deque.push_back(value).is_ok() {
          vec_deque.push_back(value);
        }
      }
      1 => {
        if deque.push_front(value).is_ok() {
          vec_deque.push_front(value);
        }
      }
      2 => {
        let _ = deque.pop_back();
        let _ = vec_deque.pop_back();
      }
      3 => {
        assert_eq!(deque.take_front(), vec_deque.pop_front());
      }
      4 => {
        let clone = deque.clone();
        assert_eq!(clone, deque);
      }
      _ => {
        let idx = usize::from(value);
        assert_eq!(deque.get(idx), vec_deque.get(idx));
      }
    }
    assert!(deque.len() <= deque.capacity());
    assert!(deque.iter().eq(vec_deque.iter()));
  }
});
