use std::iter::FusedIterator;

use crate::RingQueue;

/// Borrowing iterator over a [`RingQueue`] in FIFO order.
///
/// Holding an [`Iter`] keeps the queue borrowed, so it cannot be mutated until the
/// iterator is dropped. Call [`RingQueue::iter`] again to restart from the front.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(slots: &'a [Option<T>], head: usize, len: usize) -> Self {
        Self {
            slots,
            cursor: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.slots[self.cursor].as_ref();
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues every element in FIFO order.
pub struct IntoIter<T> {
    queue: RingQueue<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(queue: RingQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.count();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
