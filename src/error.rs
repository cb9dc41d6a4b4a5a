// Error types returned by `BlockDeque` operations.

use thiserror::Error;

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
   #[error("capacity must be greater than zero")]
   ZeroCapacity,
}

/// Failure of a blocking pop.
///
/// `Closed` is permanent: the queue will never yield another element.
/// `Timeout` only means nothing arrived in time and the caller may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PopError {
   #[error("deque is closed")]
   Closed,
   #[error("timed out waiting for an element")]
   Timeout,
}

impl PopError {
   pub fn is_closed(&self) -> bool {
      matches!(self, PopError::Closed)
   }

   pub fn is_timeout(&self) -> bool {
      matches!(self, PopError::Timeout)
   }
}

/// Failure of a non-blocking pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryPopError {
   #[error("deque is empty")]
   Empty,
   #[error("deque is closed")]
   Closed,
}

/// Failure of a blocking push; the rejected element is handed back.
#[derive(PartialEq, Eq, Error)]
pub enum PushError<T> {
   #[error("deque is closed")]
   Closed(T),
}

impl<T> PushError<T> {
   pub fn into_inner(self) -> T {
      match self {
         PushError::Closed(item) => item,
      }
   }
}

/// Failure of a non-blocking push; the rejected element is handed back.
#[derive(PartialEq, Eq, Error)]
pub enum TryPushError<T> {
   #[error("deque is full")]
   Full(T),
   #[error("deque is closed")]
   Closed(T),
}

impl<T> TryPushError<T> {
   pub fn into_inner(self) -> T {
      match self {
         TryPushError::Full(item) | TryPushError::Closed(item) => item,
      }
   }

   pub fn is_full(&self) -> bool {
      matches!(self, TryPushError::Full(_))
   }
}

/// `front`/`back` called on an empty deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeekError {
   #[error("deque is empty")]
   Empty,
}

// Element payloads are opaque, so Debug never requires `T: Debug`.
impl<T> std::fmt::Debug for PushError<T> {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      match self {
         PushError::Closed(_) => f.write_str("Closed(..)"),
      }
   }
}

impl<T> std::fmt::Debug for TryPushError<T> {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      match self {
         TryPushError::Full(_) => f.write_str("Full(..)"),
         TryPushError::Closed(_) => f.write_str("Closed(..)"),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn push_errors_hand_back_the_item() {
      assert_eq!(PushError::Closed(5).into_inner(), 5);
      assert_eq!(TryPushError::Full("a").into_inner(), "a");
      assert_eq!(TryPushError::Closed("b").into_inner(), "b");
      assert!(TryPushError::Full(()).is_full());
      assert!(!TryPushError::Closed(()).is_full());
   }

   #[test]
   fn pop_error_kinds_are_distinguishable() {
      assert!(PopError::Closed.is_closed());
      assert!(!PopError::Closed.is_timeout());
      assert!(PopError::Timeout.is_timeout());
      assert_eq!(PopError::Timeout.to_string(), "timed out waiting for an element");
   }

   #[test]
   fn debug_does_not_need_debug_payload() {
      struct Opaque;
      assert_eq!(format!("{:?}", PushError::Closed(Opaque)), "Closed(..)");
      assert_eq!(format!("{:?}", TryPushError::Full(Opaque)), "Full(..)");
   }
}
