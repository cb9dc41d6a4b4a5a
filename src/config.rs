// Construction parameters for `BlockDeque`.

use crate::error::ConfigError;

/// Capacity used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
   /// Maximum number of buffered elements. Must be at least 1.
   pub capacity: usize,
}

impl Config {
   pub const fn new() -> Self {
      Self { capacity: DEFAULT_CAPACITY }
   }

   pub const fn capacity(mut self, capacity: usize) -> Self {
      self.capacity = capacity;
      self
   }

   /// A zero-capacity deque could never accept an element, so it is
   /// rejected here rather than built.
   pub fn validate(&self) -> Result<(), ConfigError> {
      if self.capacity == 0 {
         return Err(ConfigError::ZeroCapacity);
      }
      Ok(())
   }
}

impl Default for Config {
   fn default() -> Self {
      Self::new()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn default_uses_default_capacity() {
      let cfg = Config::default();
      assert_eq!(cfg.capacity, DEFAULT_CAPACITY);
      assert!(cfg.validate().is_ok());
   }

   #[test]
   fn zero_capacity_is_rejected() {
      let cfg = Config::new().capacity(0);
      assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity));
   }

   #[test]
   fn builder_overrides_capacity() {
      let cfg = Config::new().capacity(7);
      assert_eq!(cfg.capacity, 7);
      assert!(cfg.validate().is_ok());
   }
}
