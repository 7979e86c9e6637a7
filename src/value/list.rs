//! Ordered, exclusively-owned sequence of Values.
//!
//! Not concurrency-safe; meant to be used serially.

use std::iter::FromIterator;

use super::value::Value;


#[derive(Debug, Default, PartialEq)]
pub struct List {
    elements: Vec<Value>,
}

impl List {
    pub fn new() -> List {
        List {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Value> {
        self.elements.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Adds val as the new last element. Returns self for chaining.
    pub fn append<T: Into<Value>>(&mut self, val: T) -> &mut Self {
        self.elements.push(val.into());
        self
    }

    /// Removes and returns the element at i, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn remove_at(&mut self, i: usize) -> Value {
        let len = self.elements.len();
        if i >= len {
            panic!("remove_at index {} out of bounds for List of {}", i, len);
        }
        self.elements.remove(i)
    }

    /// Extracts the element at i and drops the rest of the List.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn take_at(mut self, i: usize) -> Value {
        self.remove_at(i)
    }

    /// Applies f to every element in place, left to right.
    ///
    /// Each element is moved into f and its slot is filled with the result.
    pub fn map_in_place<F: FnMut(Value) -> Value>(&mut self, mut f: F) {
        let elements = std::mem::take(&mut self.elements);
        self.elements = elements.into_iter().map(&mut f).collect();
    }
}


impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List {
            elements: iter.into_iter().collect(),
        }
    }
}


#[cfg(test)]
#[path = "./list_test.rs"]
mod list_test;
