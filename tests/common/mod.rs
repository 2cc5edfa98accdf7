#![allow(dead_code)]

use maybe::{Maybe, just, nothing};
use std::cell::Cell;

/// Counts how often a stage of a chain is actually invoked.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }
}

/// `Just(x / 2)` for even inputs, `Nothing` for odd ones.
pub fn half(x: i32) -> Maybe<i32> {
    if x % 2 == 0 { just(x / 2) } else { nothing() }
}

/// `Just(x)` for strictly positive inputs.
pub fn positive(x: i32) -> Maybe<i32> {
    if x > 0 { just(x) } else { nothing() }
}

/// `Just(x - 1)` unless that would overflow.
pub fn decrement(x: i32) -> Maybe<i32> {
    x.checked_sub(1).into()
}

/// Integer square root of non-negative inputs.
pub fn sqrt_floor(x: i32) -> Maybe<i32> {
    if x < 0 {
        return nothing();
    }
    let mut root = 0i32;
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= x) {
        root += 1;
    }
    just(root)
}

pub fn add_three(x: i32) -> i32 {
    x.wrapping_add(3)
}

pub fn triple(x: i32) -> i32 {
    x.wrapping_mul(3)
}
