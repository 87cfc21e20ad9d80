//! Bus naming for the adder audit.

use crate::circuit::{bus_index, bus_wire};

/// Wire prefixes identifying the addend and sum buses of an adder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdderLayout {
    /// Prefix of the first addend's bits
    pub addend_a: String,
    /// Prefix of the second addend's bits
    pub addend_b: String,
    /// Prefix of the sum's bits
    pub sum: String,
}

impl Default for AdderLayout {
    fn default() -> Self {
        Self {
            addend_a: "x".to_string(),
            addend_b: "y".to_string(),
            sum: "z".to_string(),
        }
    }
}

impl AdderLayout {
    /// Create a layout with the conventional `x` + `y` -> `z` buses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the addend bus prefixes.
    pub fn with_addends(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.addend_a = a.into();
        self.addend_b = b.into();
        self
    }

    /// Set the sum bus prefix.
    pub fn with_sum(mut self, sum: impl Into<String>) -> Self {
        self.sum = sum.into();
        self
    }

    /// Bit index of `name` on either addend bus.
    pub fn addend_index(&self, name: &str) -> Option<usize> {
        bus_index(name, &self.addend_a).or_else(|| bus_index(name, &self.addend_b))
    }

    /// Check if `name` is a bit of either addend.
    pub fn is_addend(&self, name: &str) -> bool {
        self.addend_index(name).is_some()
    }

    /// Bit index of `name` on the sum bus.
    pub fn sum_index(&self, name: &str) -> Option<usize> {
        bus_index(name, &self.sum)
    }

    /// Name of sum bit `index`.
    pub fn sum_wire(&self, index: usize) -> String {
        bus_wire(&self.sum, index)
    }
}
