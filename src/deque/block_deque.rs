// Bounded blocking double-ended queue
//
// One mutex guards the buffer and the closed flag. Producers park on
// `producers` while the buffer is full, consumers park on `consumers` while it
// is empty. `close` empties the buffer and wakes everyone.

use crate::config::{Config, DEFAULT_CAPACITY};
use crate::error::{ConfigError, PeekError, PopError, PushError, TryPopError, TryPushError};
use crate::trace::{debug, trace};
use crate::BlockingQueue;
use parking_lot::{Condvar, Mutex, MutexGuard};
use std::{
   collections::VecDeque,
   fmt,
   time::{Duration, Instant},
};

/*──────────────────────────────────────────────────────────────────────────*/
/*  Shared state                                                            */
/*──────────────────────────────────────────────────────────────────────────*/

struct State<T> {
   buf   : VecDeque<T>,
   closed: bool, // false -> true, never back
}

#[derive(Clone, Copy)]
enum End {
   Front,
   Back,
}

pub struct BlockDeque<T> {
   state    : Mutex<State<T>>,
   capacity : usize,   // fixed at construction, >= 1
   producers: Condvar, // signalled when space frees up
   consumers: Condvar, // signalled when data arrives
}

/*───────────────────────────  constructors  ───────────────────────────────*/

impl<T> BlockDeque<T> {
   /// Build a deque holding at most `capacity` elements.
   ///
   /// # Panics
   /// If `capacity` is zero. Use [`BlockDeque::try_new`] to get an error
   /// instead.
   pub fn new(capacity: usize) -> Self {
      assert!(capacity > 0, "capacity must be greater than zero");
      Self::build(capacity)
   }

   pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
      Self::with_config(&Config::new().capacity(capacity))
   }

   pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
      config.validate()?;
      Ok(Self::build(config.capacity))
   }

   fn build(capacity: usize) -> Self {
      debug!(capacity, "block deque created");
      Self {
         // grows on demand; a large capacity should not allocate up front
         state: Mutex::new(State { buf: VecDeque::new(), closed: false }),
         capacity,
         producers: Condvar::new(),
         consumers: Condvar::new(),
      }
   }
}

impl<T> Default for BlockDeque<T> {
   fn default() -> Self {
      Self::build(DEFAULT_CAPACITY)
   }
}

/*──────────────────────────────  producers  ───────────────────────────────*/

impl<T> BlockDeque<T> {
   /// Append `item`, blocking while the deque is full.
   ///
   /// Fails, handing `item` back, if the deque is closed before space frees
   /// up.
   pub fn push_back(&self, item: T) -> Result<(), PushError<T>> {
      self.push(item, End::Back)
   }

   /// Prepend `item`, blocking while the deque is full.
   pub fn push_front(&self, item: T) -> Result<(), PushError<T>> {
      self.push(item, End::Front)
   }

   pub fn try_push_back(&self, item: T) -> Result<(), TryPushError<T>> {
      self.try_push(item, End::Back)
   }

   pub fn try_push_front(&self, item: T) -> Result<(), TryPushError<T>> {
      self.try_push(item, End::Front)
   }

   fn push(&self, item: T, end: End) -> Result<(), PushError<T>> {
      let mut state = self.state.lock();
      loop {
         if state.closed {
            trace!("push rejected: deque closed");
            return Err(PushError::Closed(item));
         }
         if state.buf.len() < self.capacity {
            break;
         }
         self.producers.wait(&mut state);
      }
      self.insert(state, item, end);
      Ok(())
   }

   fn try_push(&self, item: T, end: End) -> Result<(), TryPushError<T>> {
      let state = self.state.lock();
      if state.closed {
         return Err(TryPushError::Closed(item));
      }
      if state.buf.len() >= self.capacity {
         return Err(TryPushError::Full(item));
      }
      self.insert(state, item, end);
      Ok(())
   }

   // caller has checked open + not full
   fn insert(&self, mut state: MutexGuard<'_, State<T>>, item: T, end: End) {
      match end {
         End::Back => state.buf.push_back(item),
         End::Front => state.buf.push_front(item),
      }
      drop(state);
      self.consumers.notify_one();
   }
}

/*──────────────────────────────  consumers  ───────────────────────────────*/

impl<T> BlockDeque<T> {
   /// Remove the front element, blocking while the deque is empty.
   ///
   /// Returns [`PopError::Closed`] once the deque is closed and empty,
   /// including when it was already closed at the time of the call.
   pub fn pop(&self) -> Result<T, PopError> {
      let mut state = self.state.lock();
      loop {
         if let Some(item) = state.buf.pop_front() {
            return Ok(self.release_slot(state, item));
         }
         if state.closed {
            return Err(PopError::Closed);
         }
         self.consumers.wait(&mut state);
      }
   }

   /// Like [`pop`](Self::pop), but gives up once `timeout` has elapsed.
   ///
   /// The deadline is fixed when the call starts; wakeups that find nothing
   /// to take wait only for the time that is left.
   pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopError> {
      // `None` if the deadline is not representable: wait without bound
      let deadline = Instant::now().checked_add(timeout);
      let mut state = self.state.lock();
      let mut timed_out = false;
      loop {
         if let Some(item) = state.buf.pop_front() {
            return Ok(self.release_slot(state, item));
         }
         if state.closed {
            return Err(PopError::Closed);
         }
         if timed_out {
            trace!(?timeout, "pop timed out");
            return Err(PopError::Timeout);
         }
         match deadline {
            Some(at) => timed_out = self.consumers.wait_until(&mut state, at).timed_out(),
            None => self.consumers.wait(&mut state),
         }
      }
   }

   pub fn try_pop(&self) -> Result<T, TryPopError> {
      let mut state = self.state.lock();
      match state.buf.pop_front() {
         Some(item) => Ok(self.release_slot(state, item)),
         None if state.closed => Err(TryPopError::Closed),
         None => Err(TryPopError::Empty),
      }
   }

   /// Take every buffered element, oldest first, without closing the deque.
   pub fn drain(&self) -> Vec<T> {
      let items: Vec<T> = self.state.lock().buf.drain(..).collect();
      if !items.is_empty() {
         self.producers.notify_all();
      }
      items
   }

   #[inline]
   fn release_slot(&self, state: MutexGuard<'_, State<T>>, item: T) -> T {
      drop(state);
      self.producers.notify_one();
      item
   }
}

/*───────────────────────────────  peeking  ────────────────────────────────*/

impl<T: Clone> BlockDeque<T> {
   /// Copy of the front element.
   pub fn front(&self) -> Result<T, PeekError> {
      self.state.lock().buf.front().cloned().ok_or(PeekError::Empty)
   }

   /// Copy of the back element.
   pub fn back(&self) -> Result<T, PeekError> {
      self.state.lock().buf.back().cloned().ok_or(PeekError::Empty)
   }
}

/*───────────────────────  queries and shutdown  ───────────────────────────*/

impl<T> BlockDeque<T> {
   // The queries below are snapshots; they can be stale as soon as they
   // return.

   pub fn len(&self) -> usize {
      self.state.lock().buf.len()
   }

   pub fn capacity(&self) -> usize {
      self.capacity
   }

   pub fn is_empty(&self) -> bool {
      self.state.lock().buf.is_empty()
   }

   pub fn is_full(&self) -> bool {
      self.state.lock().buf.len() >= self.capacity
   }

   pub fn is_closed(&self) -> bool {
      self.state.lock().closed
   }

   /// Drop every buffered element. The deque stays open.
   pub fn clear(&self) {
      self.state.lock().buf.clear();
   }

   /// Close the deque, discarding anything still buffered.
   ///
   /// Every blocked producer and consumer wakes up and fails with a closed
   /// error. Closing again is harmless.
   pub fn close(&self) {
      {
         let mut state = self.state.lock();
         debug!(discarded = state.buf.len(), "closing block deque");
         state.buf.clear();
         state.closed = true;
      }
      self.producers.notify_all();
      self.consumers.notify_all();
   }

   /// Wake one blocked consumer so it re-checks the deque.
   pub fn flush(&self) {
      self.consumers.notify_one();
   }
}

impl<T> Drop for BlockDeque<T> {
   fn drop(&mut self) {
      self.close();
   }
}

impl<T> fmt::Debug for BlockDeque<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let state = self.state.lock();
      f.debug_struct("BlockDeque")
         .field("len", &state.buf.len())
         .field("capacity", &self.capacity)
         .field("closed", &state.closed)
         .finish()
   }
}

/*──────────────────────────  common interface  ────────────────────────────*/

impl<T: Send> BlockingQueue<T> for BlockDeque<T> {
   type PushError = PushError<T>;
   type PopError  = PopError;

   #[inline]
   fn push(&self, item: T) -> Result<(), PushError<T>> {
      self.push_back(item)
   }

   #[inline]
   fn pop(&self) -> Result<T, PopError> {
      BlockDeque::pop(self)
   }

   fn available(&self) -> bool {
      let state = self.state.lock();
      !state.closed && state.buf.len() < self.capacity
   }

   fn empty(&self) -> bool {
      self.is_empty()
   }

   fn close(&self) {
      BlockDeque::close(self)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn close_leaves_buffer_empty_and_flag_set() {
      let q = BlockDeque::new(4);
      q.push_back(1).unwrap();
      q.push_back(2).unwrap();
      q.close();
      let state = q.state.lock();
      assert!(state.closed);
      assert!(state.buf.is_empty());
   }

   #[test]
   fn default_capacity_is_used() {
      let q: BlockDeque<u8> = BlockDeque::default();
      assert_eq!(q.capacity(), DEFAULT_CAPACITY);
   }

   #[test]
   fn zero_timeout_on_empty_deque_times_out() {
      let q: BlockDeque<u8> = BlockDeque::new(1);
      assert_eq!(q.pop_timeout(Duration::ZERO), Err(PopError::Timeout));
   }

   #[test]
   fn huge_timeout_still_returns_buffered_item() {
      let q = BlockDeque::new(1);
      q.push_back(9).unwrap();
      assert_eq!(q.pop_timeout(Duration::MAX), Ok(9));
   }
}
