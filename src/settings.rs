//! Type-level settings for a [`Deque`](crate::Deque).
//!
//! Settings are zero-sized marker types passed as generic parameters, so choosing one costs nothing at runtime.

use std::fmt::Debug;

/// Drops remaining elements starting at the front, in the order [`pop_front`](crate::Deque::pop_front) would return them.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrontToBack;

/// Drops remaining elements starting at the back, in the order [`pop_back`](crate::Deque::pop_back) would return them.
#[derive(Copy, Clone, Debug, Default)]
pub struct BackToFront;

/// Selects the order in which a [`Deque`](crate::Deque) drops the elements it still holds,
/// both on [`clear`](crate::Deque::clear) and when the deque itself is dropped.
///
/// This trait is sealed; [`FrontToBack`] and [`BackToFront`] are the only implementations.
pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}

pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const IS_INVERTED: bool;
    }
}

impl DropBehavior for FrontToBack {}
impl DropBehavior for BackToFront {}

impl seal_drop_behavior::Sealed for FrontToBack {
    const IS_INVERTED: bool = false;
}
impl seal_drop_behavior::Sealed for BackToFront {
    const IS_INVERTED: bool = true;
}
