pub mod config;
pub mod deque;
pub mod error;
pub mod trace;

pub use config::{Config, DEFAULT_CAPACITY};
pub use deque::BlockDeque;
pub use error::{ConfigError, PeekError, PopError, PushError, TryPopError, TryPushError};
pub use trace::init_tracing;

/// Common interface for blocking queues shared between threads.
pub trait BlockingQueue<T: Send>: Send + Sync {
    /// Error on push when the item cannot be accepted.
    type PushError;
    /// Error on pop when no item can be delivered.
    type PopError;

    /// Blocks until there is room for `item`.
    fn push(&self, item: T) -> Result<(), Self::PushError>;
    /// Blocks until an item is available.
    fn pop(&self) -> Result<T, Self::PopError>;

    /// True when a subsequent `push` *may* succeed without blocking.
    fn available(&self) -> bool;
    /// True when a subsequent `pop` would block.
    fn empty(&self) -> bool;
    /// Releases every blocked caller and refuses further work.
    fn close(&self);
}
