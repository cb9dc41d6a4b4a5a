mod block_deque;

pub use block_deque::BlockDeque;
