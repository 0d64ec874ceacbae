//! A [`Deque`] is a double-ended queue stored in a circular buffer whose length is always a power of two.
//! Its API is similar to [`VecDeque`](std::collections::VecDeque), but the growth policy and index arithmetic are fixed and observable:
//! the buffer starts at [`DEFAULT_CAPACITY`] (or the smallest power of two that fits a requested size), doubles the moment it fills up, and never shrinks.

use crate::{DropBehavior, FrontToBack};
use std::fmt::Debug;

/// The capacity of a [`Deque`] created with [`Deque::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A double-ended queue that allows for amortized O(1) insertion and removal at both ends.
/// The Deque is backed by a circular buffer whose length is always a power of two, so every index wraps with a single bitwise AND.
/// Capacity is doubled as soon as an insertion fills the buffer, and it is never reduced.
///
/// # Examples
/// ```
/// use circular_deque::Deque;
/// let mut deque = Deque::new();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.push_back(3);
/// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
/// ```
///
/// # Empty and full
/// The deque tracks a `head` index (the first element) and a `tail` index (one past the last element).
/// `head == tail` always means the deque is empty: an insertion that would make the indices meet on a non-empty deque
/// grows the buffer before it returns, so a completely full buffer is never observable.
///
/// # Removed elements
/// Every slot of the buffer is an [`Option`]. Removing an element moves it out to the caller and leaves `None` behind,
/// so the deque never keeps a removed value alive.
///
/// # Drop Order
/// The default drop order is front-to-back, meaning that elements still in the deque are dropped in the order [`pop_front`](Deque::pop_front) would return them.
/// This can be changed to back-to-front by using the [`BackToFront`](crate::BackToFront) drop order.
///
/// # Concurrency
/// A `Deque` has no internal synchronization. It is [`Send`] and [`Sync`] whenever `T` is, and every mutation takes `&mut self`,
/// so sharing one between threads requires the caller to wrap it in a lock.
pub struct Deque<T, DropOrder = FrontToBack>
where
    DropOrder: DropBehavior,
{
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    drop_order: DropOrder,
}

// allocates `cap` empty slots
fn allocate<T>(cap: usize) -> Box<[Option<T>]> {
    let mut buf = Vec::with_capacity(cap);
    buf.resize_with(cap, || None);
    buf.into_boxed_slice()
}

impl<T> Deque<T, FrontToBack> {
    /// Creates a new, empty `Deque` with a capacity of [`DEFAULT_CAPACITY`].
    /// The default is to drop items from front to back.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::{Deque, DEFAULT_CAPACITY};
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.to_vec(), vec![1, 2]);
    /// assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `Deque` whose capacity is the smallest power of two greater than or equal to `size`.
    /// A `size` of zero produces a capacity of one.
    ///
    /// # Panics
    /// Panics with `"capacity overflow"` if the rounded capacity does not fit in a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// assert_eq!(Deque::<i32>::with_size(0).capacity(), 1);
    /// assert_eq!(Deque::<i32>::with_size(5).capacity(), 8);
    /// assert_eq!(Deque::<i32>::with_size(16).capacity(), 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Deque::sized(size)
    }

    /// Creates a new, empty `Deque` of [`DEFAULT_CAPACITY`] with a specified drop order.
    ///
    /// # Examples
    /// ```
    /// use circular_deque::{Deque, BackToFront};
    /// let mut deque = Deque::new_with_drop_order::<BackToFront>();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.to_vec(), vec![1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn new_with_drop_order<D>() -> Deque<T, D>
    where
        D: DropBehavior,
    {
        Deque::sized(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `Deque` with the capacity rounding of [`with_size`](Deque::with_size) and a specified drop order.
    #[inline]
    #[must_use]
    pub fn with_size_and_drop_order<D>(size: usize) -> Deque<T, D>
    where
        D: DropBehavior,
    {
        Deque::sized(size)
    }
}

impl<T, DropOrder> Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn sized(size: usize) -> Self {
        let cap = match size.checked_next_power_of_two() {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        };
        debug_assert!(cap.is_power_of_two());
        Deque {
            buf: allocate(cap),
            head: 0,
            tail: 0,
            drop_order: DropOrder::default(),
        }
    }

    /// Changes the drop order of the `Deque` without moving any elements.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::{Deque, BackToFront};
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// let deque = deque.with_drop_order::<BackToFront>();
    /// assert_eq!(deque.to_vec(), vec![1, 2]);
    /// ```
    #[inline]
    #[must_use = "This Deque's drop order has been changed. Please make sure to use the new Deque or drop it explicitly."]
    pub fn with_drop_order<D>(mut self) -> Deque<T, D>
    where
        D: DropBehavior,
    {
        let buf = std::mem::take(&mut self.buf);
        let (head, tail) = (self.head, self.tail);
        // `self` now owns no slots, so dropping it does nothing
        self.head = 0;
        self.tail = 0;
        Deque {
            buf,
            head,
            tail,
            drop_order: D::default(),
        }
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buf.len() - 1
    }

    // The occupied slots in logical order: `[head, tail)` when the contents are contiguous,
    // otherwise `[head, cap)` followed by `[0, tail)`.
    #[inline]
    fn segments(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.head <= self.tail {
            (&self.buf[self.head..self.tail], &self.buf[..0])
        } else {
            (&self.buf[self.head..], &self.buf[..self.tail])
        }
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        let (first, second) = self.segments();
        first.iter().chain(second.iter()).flatten()
    }

    // Doubles the capacity. Only called when the buffer is logically full (`head == tail` after an insert),
    // so every slot is occupied and all of them move, in order, to the front of the new buffer.
    fn grow(&mut self) {
        let old_cap = self.buf.len();
        let new_cap = match old_cap.checked_mul(2) {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        };
        let mask = old_cap - 1;
        let mut buf = allocate(new_cap);
        for (i, slot) in buf.iter_mut().take(old_cap).enumerate() {
            *slot = self.buf[(self.head + i) & mask].take();
        }
        self.buf = buf;
        self.head = 0;
        self.tail = old_cap;
        debug_assert!(self.buf.len().is_power_of_two());
    }

    /// Pushes an element to the back of the `Deque`.
    /// If this fills the buffer, the capacity is doubled before returning.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque: Deque<i32> = Deque::from([42, 10]);
    /// deque.push_back(100);
    /// assert_eq!(deque.pop_back(), Some(100));
    /// ```
    #[inline]
    pub fn push_back(&mut self, elem: T) {
        self.buf[self.tail] = Some(elem);
        self.tail = (self.tail + 1) & self.mask();
        if self.head == self.tail {
            self.grow();
        }
    }

    /// Pushes an element to the front of the `Deque`.
    /// If this fills the buffer, the capacity is doubled before returning.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque: Deque<i32> = Deque::from([42, 10]);
    /// deque.push_front(100);
    /// assert_eq!(deque.pop_front(), Some(100));
    /// ```
    #[inline]
    pub fn push_front(&mut self, elem: T) {
        self.head = self.head.wrapping_sub(1) & self.mask();
        self.buf[self.head] = Some(elem);
        if self.head == self.tail {
            self.grow();
        }
    }

    /// Removes the element at the back of the `Deque`, returning `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque: Deque<i32> = Deque::from([42, 10]);
    /// assert_eq!(deque.pop_back(), Some(10));
    /// assert_eq!(deque.pop_back(), Some(42));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let i = self.tail.wrapping_sub(1) & self.mask();
        let elem = self.buf[i].take();
        self.tail = i;
        elem
    }

    /// Removes the element at the front of the `Deque`, returning `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque: Deque<i32> = Deque::from([42, 10]);
    /// assert_eq!(deque.pop_front(), Some(42));
    /// assert_eq!(deque.pop_front(), Some(10));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let elem = self.buf[self.head].take();
        self.head = (self.head + 1) & self.mask();
        elem
    }

    /// Returns a reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_front(3);
    /// assert_eq!(deque.front(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Returns a reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_back(3);
    /// assert_eq!(deque.back(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.tail.wrapping_sub(1) & self.mask()].as_ref()
    }

    /// Returns a mutable reference to the front element, or `None` if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.head].as_mut()
    }

    /// Returns a mutable reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque: Deque<i32> = Deque::from([1, 2]);
    /// if let Some(last) = deque.back_mut() {
    ///     *last = 5;
    /// }
    /// assert_eq!(deque.to_vec(), vec![1, 5]);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let i = self.tail.wrapping_sub(1) & self.mask();
        self.buf[i].as_mut()
    }

    /// Returns the number of elements in the `Deque`.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque: Deque<i32> = Deque::with_size(10);
    /// deque.push_back(42);
    /// assert_eq!(deque.capacity(), 16);
    /// assert_eq!(deque.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask()
    }

    /// Returns the length of the backing buffer. This is always a power of two, and it never decreases.
    /// Because a full buffer grows immediately, the deque holds at most `capacity() - 1` elements before the next insertion reallocates.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the deque contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque = Deque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_back(1);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Removes all elements from the `Deque` and drops them in the order specified by the deque's drop order.
    /// Note that this method has no effect on the allocated capacity of the deque.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while (if DropOrder::IS_INVERTED {
            self.pop_back()
        } else {
            self.pop_front()
        })
        .is_some()
        {
            // drop the element
        }
    }

    /// Returns a newly allocated [`Vec`] holding a copy of every element, in the order repeated calls to
    /// [`pop_front`](Deque::pop_front) would return them. An empty deque yields an empty `Vec`.
    ///
    /// The returned vector is independent of the deque; changing one never affects the other.
    ///
    /// # Examples
    /// ```
    /// # use circular_deque::Deque;
    /// let mut deque = Deque::with_size(4);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_front(0);
    /// assert_eq!(deque.to_vec(), vec![0, 1, 2]);
    /// assert_eq!(Deque::<i32>::new().to_vec(), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.elements().cloned());
        out
    }
}

impl<T, DropOrder> Drop for Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, DropOrder> Default for Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn default() -> Self {
        Deque::sized(DEFAULT_CAPACITY)
    }
}

impl<T: Debug, DropOrder> Debug for Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

// debug representation of the raw indices, for tests
#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct DequeDebug<DropOrder> {
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) cap: usize,
    pub(crate) drop_order: DropOrder,
}

impl<T, DropOrder> Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[allow(dead_code)]
    pub(crate) fn debug(&self) -> DequeDebug<DropOrder> {
        DequeDebug {
            head: self.head,
            tail: self.tail,
            cap: self.buf.len(),
            drop_order: self.drop_order,
        }
    }
}

/// Clones the elements into a buffer of the same capacity, starting at index zero.
impl<T, DropOrder> Clone for Deque<T, DropOrder>
where
    T: Clone,
    DropOrder: DropBehavior,
{
    fn clone(&self) -> Self {
        let mut buf = allocate(self.capacity());
        let mut len = 0;
        for (slot, elem) in buf.iter_mut().zip(self.elements()) {
            *slot = Some(elem.clone());
            len += 1;
        }
        Deque {
            buf,
            head: 0,
            tail: len,
            drop_order: self.drop_order,
        }
    }
}

impl<T, DropOrder> Extend<T> for Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, DropOrder> FromIterator<T> for Deque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        // one spare slot so that the lower bound fits without growing
        let mut deque = Deque::sized(iter.size_hint().0.saturating_add(1));
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Moves the elements out in front-to-back order without cloning them.
impl<T, DropOrder> From<Deque<T, DropOrder>> for Vec<T>
where
    DropOrder: DropBehavior,
{
    fn from(mut deque: Deque<T, DropOrder>) -> Self {
        let mut vec = Vec::with_capacity(deque.len());
        while let Some(elem) = deque.pop_front() {
            vec.push(elem);
        }
        vec
    }
}

// equality and hashing only look at the logical sequence, never at capacity or head offset
impl<T, A, B> PartialEq<Deque<T, B>> for Deque<T, A>
where
    T: PartialEq,
    A: DropBehavior,
    B: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &Deque<T, B>) -> bool {
        self.len() == other.len() && self.elements().eq(other.elements())
    }
}

impl<T, DropOrder> PartialEq<[T]> for Deque<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.elements().eq(other.iter())
    }
}

impl<T, DropOrder> PartialEq<Vec<T>> for Deque<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == **other
    }
}

impl<T, DropOrder, const N: usize> PartialEq<[T; N]> for Deque<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T, DropOrder> Eq for Deque<T, DropOrder>
where
    T: Eq,
    DropOrder: DropBehavior,
{
}

impl<T, DropOrder> std::hash::Hash for Deque<T, DropOrder>
where
    T: std::hash::Hash,
    DropOrder: DropBehavior,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for elem in self.elements() {
            elem.hash(state);
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, DropOrder> Serialize for Deque<T, DropOrder>
    where
        T: Serialize,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.elements())
        }
    }

    impl<'src, T, DropOrder> Deserialize<'src> for Deque<T, DropOrder>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(vec.into_iter().collect())
        }
    }

}

/// A version of the [`vec!`] macro but for [`Deque`]. This macro helps you create a [`Deque`] from a list of elements.
/// It will use the default drop order of [`FrontToBack`](crate::FrontToBack), and a capacity large enough to hold the elements without growing.
/// # Examples
/// ```
/// # use circular_deque::deque;
/// let deque = deque![1, 2, 3, 4, 5];
/// assert_eq!(deque.len(), 5);
/// assert_eq!(deque.capacity(), 8);
/// assert_eq!(deque.to_vec(), vec![1, 2, 3, 4, 5]);
/// ```
/// ```
/// # use circular_deque::deque;
/// let deque = deque![1; 5];
/// assert_eq!(deque.len(), 5);
/// assert_eq!(deque.to_vec(), vec![1, 1, 1, 1, 1]);
/// ```
/// ```
/// # use circular_deque::{Deque, deque};
/// let deque: Deque<i32> = deque![];
/// assert_eq!(deque.len(), 0);
/// assert_eq!(deque.capacity(), 16);
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::Deque::<_>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::Deque<_> as ::std::iter::FromIterator<_>>::from_iter(
            ::std::iter::repeat($elem).take($n),
        )
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Deque::<_>::from([$($x),+])
    };
}
