#![doc = include_str!("../README.md")]

use std::fmt;

use more_asserts::debug_assert_le;
use tracing::{debug, trace};

mod error;
mod iter;

pub use error::QueueError;
pub use iter::{IntoIter, Iter};

/// Capacity used by [`RingQueue::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// First-in-first-out queue over a circular buffer that doubles when full.
///
/// Not synchronized; share it across threads behind your own lock.
#[derive(Clone)]
pub struct RingQueue<T> {
    // every slot outside `head..head + len` (wrapped) is `None`
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with `capacity` slots.
    ///
    /// Fails with [`QueueError::InvalidArgument`] if `capacity` is negative, zero, does
    /// not fit in a `usize`, or is more slots than can be allocated.
    pub fn with_capacity<C>(capacity: C) -> Result<Self, QueueError>
    where
        C: TryInto<usize>,
    {
        let capacity: usize = capacity
            .try_into()
            .map_err(|_| QueueError::InvalidArgument {
                reason: "capacity must be a non-negative integer that fits in usize",
            })?;

        if capacity < 1 {
            return Err(QueueError::InvalidArgument {
                reason: "capacity must be at least 1",
            });
        }

        Self::try_with_slots(capacity)
    }

    /// Builds a queue sized to `items` and enqueues each item in iteration order.
    ///
    /// `None` stands for an absent source and fails with [`QueueError::InvalidArgument`].
    /// An empty source still yields one slot so the queue can grow.
    pub fn from_sequence<I>(items: Option<I>) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items
            .ok_or(QueueError::InvalidArgument {
                reason: "source sequence is absent",
            })?
            .into_iter();

        let mut queue = Self::try_with_slots(items.len().max(1))?;
        queue.extend(items);
        Ok(queue)
    }

    fn with_slots(capacity: usize) -> Self {
        trace!(capacity, "allocating ring queue");
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    fn try_with_slots(capacity: usize) -> Result<Self, QueueError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| QueueError::InvalidArgument {
                reason: "capacity exceeds what can be allocated",
            })?;
        slots.resize_with(capacity, || None);

        trace!(capacity, "allocating ring queue");
        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            len: 0,
        })
    }

    /// Adds `value` to the back of the queue, doubling the capacity first if it is full.
    pub fn enqueue(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(value);
        self.len += 1;

        debug_assert_le!(self.len, self.capacity());
    }

    /// Removes the front element and hands ownership to the caller.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        // all slots are `None` while empty, so this also covers `len == 0`
        let value = self.slots[self.head]
            .take()
            .ok_or(QueueError::EmptyContainer)?;

        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.slots[self.head]
            .as_ref()
            .ok_or(QueueError::EmptyContainer)
    }

    /// Number of elements currently queued.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next [`Self::enqueue`] will grow the buffer.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates front to back without consuming the queue.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.head, self.len)
    }

    /// Drains every element via [`Self::dequeue`] into the front of a buffer twice the size.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        debug!(old_capacity, new_capacity, "growing ring queue");

        let drained = std::iter::from_fn(|| self.dequeue().ok()).map(Some);
        let slots: Box<[Option<T>]> = drained
            .chain(std::iter::repeat_with(|| None))
            .take(new_capacity)
            .collect();

        self.slots = slots;
        self.head = 0;
        self.len = old_capacity;
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_slots(iter.size_hint().0.max(1));
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RingQueue<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
