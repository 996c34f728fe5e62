//! Owned, ordered element storage shared by S-expressions and Q-expressions.
//!
//! All ownership transfer out of a list goes through two primitives:
//!  * remove_at ("pop"): detach one element, shifting the rest down.
//!  * take: pop one element and release the remainder of the list.
//!
//! Not concurrency-safe; meant to be used serially.

use std::iter::FromIterator;
use std::mem;
use std::slice;
use std::vec;

use super::Value;


#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprList {
    elements: Vec<Value>,
}

impl ExprList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn append<T: Into<Value>>(&mut self, val: T) {
        self.elements.push(val.into());
    }

    /// Detaches the element at index and transfers it to the caller.
    /// Subsequent elements shift down by one.
    ///
    /// # Panics
    ///
    /// Panics if index is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Value {
        self.elements.remove(index)
    }

    /// Pops the element at index, then releases the rest of the list.
    ///
    /// # Panics
    ///
    /// Panics if index is out of bounds.
    pub fn take(mut self, index: usize) -> Value {
        self.remove_at(index)
    }

    /// Replaces each element, left to right, with f(element). The original
    /// element is moved into f, so it is released as soon as f is done with
    /// it.
    pub fn replace_each<F: FnMut(Value) -> Value>(&mut self, mut f: F) {
        for elem in self.elements.iter_mut() {
            let original = mem::take(elem);
            *elem = f(original);
        }
    }
}


impl From<Vec<Value>> for ExprList {
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}

impl<T: Into<Value>> FromIterator<T> for ExprList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ExprList {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExprList {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}


#[cfg(test)]
#[path = "./expr_list_test.rs"]
mod expr_list_test;
