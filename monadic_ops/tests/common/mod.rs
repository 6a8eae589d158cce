#![allow(dead_code)]

use std::cell::Cell;

thread_local! {
    static CLONES: Cell<usize> = const { Cell::new(0) };
}

/// Counts every clone made on the current thread.
///
/// Moves in Rust are plain bitwise copies and cannot be observed, so only
/// clones are tracked.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TrackClones {
    pub value: i32,
}

impl TrackClones {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn reset_counts() {
        CLONES.with(|clones| clones.set(0));
    }

    pub fn clone_count() -> usize {
        CLONES.with(Cell::get)
    }
}

impl Clone for TrackClones {
    fn clone(&self) -> Self {
        CLONES.with(|clones| clones.set(clones.get() + 1));
        Self { value: self.value }
    }
}

/// Counts how many times a callable was invoked.
#[derive(Debug, Default)]
pub struct Calls(Cell<usize>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}
