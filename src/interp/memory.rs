//! Runtime storage: one integer per variable slot plus the input cursor.

use crate::frontend::ast::Value;

/// Zero-initialized values addressed by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    values: Vec<Value>,
}

impl Memory {
    /// Memory for `slots` variables, all zero.
    pub fn new(slots: usize) -> Self {
        Self { values: vec![0; slots] }
    }

    /// Value in `slot`; unknown slots read as 0.
    pub fn get(&self, slot: usize) -> Value {
        self.values.get(slot).copied().unwrap_or(0)
    }

    pub fn set(&mut self, slot: usize, value: Value) {
        if slot >= self.values.len() {
            self.values.resize(slot + 1, 0);
        }
        self.values[slot] = value;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reads the INPUTS list front to back. Once exhausted, every read is 0.
#[derive(Debug, Clone)]
pub struct InputCursor<'a> {
    values: &'a [Value],
    next: usize,
}

impl<'a> InputCursor<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values, next: 0 }
    }

    /// Consume the next input value.
    pub fn read(&mut self) -> Value {
        match self.values.get(self.next) {
            Some(&v) => {
                self.next += 1;
                v
            }
            None => 0,
        }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.next)
    }
}
