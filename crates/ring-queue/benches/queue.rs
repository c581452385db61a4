use std::{collections::VecDeque, hint::black_box};

use divan::Bencher;
use ring_queue::RingQueue;

const LENS: &[usize] = &[1, 8, 64, 512, 4096];

fn main() {
    divan::main();
}

trait Fifo<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
}

impl<T> Fifo<T> for RingQueue<T> {
    fn push(&mut self, value: T) {
        self.enqueue(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.dequeue().ok()
    }
}

impl<T> Fifo<T> for VecDeque<T> {
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

/// Starts from the default capacity so larger lengths include every growth step.
#[divan::bench(types = [RingQueue<u64>, VecDeque<u64>], args = LENS)]
fn fill_then_drain<Q: Fifo<u64>>(bencher: Bencher<'_, '_>, len: usize) {
    bencher.counter(len).bench_local(|| {
        let mut queue = Q::default();
        for _ in 0..len {
            queue.push(fastrand::u64(..));
        }
        while let Some(value) = queue.pop() {
            black_box(value);
        }
    });
}

#[divan::bench(types = [RingQueue<u64>, VecDeque<u64>], args = LENS)]
fn interleaved<Q: Fifo<u64>>(bencher: Bencher<'_, '_>, len: usize) {
    let mut queue = Q::default();
    for _ in 0..len {
        queue.push(fastrand::u64(..));
    }

    bencher.counter(len).bench_local(move || {
        for _ in 0..len {
            queue.push(fastrand::u64(..));
            black_box(queue.pop());
        }
    });
}
