//! A resizable double-ended queue backed by a circular buffer.
//!
//! [`Deque`] supports amortized O(1) insertion and removal at both ends. Its buffer length is always a power of two,
//! so every index wraps with a bitwise AND instead of a division. The buffer doubles as soon as an insertion fills it and never shrinks.
//!
//! ```
//! use circular_deque::Deque;
//! let mut deque = Deque::with_size(4);
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque.front(), Some(&0));
//! assert_eq!(deque.back(), Some(&2));
//! assert_eq!(deque.to_vec(), vec![0, 1, 2]);
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.len(), 2);
//! ```
//!
//! # Features
//! - `serde`: implements `Serialize` and `Deserialize` for [`Deque`], represented as a plain sequence.

pub mod deque;
pub mod settings;

pub use deque::{Deque, DEFAULT_CAPACITY};
pub use settings::{BackToFront, DropBehavior, FrontToBack};
