//! A flat convenience variant of [`List`] with the depth fixed at 1.
//!
//! Every element is a borrowed leaf, so the wrapper trades the depth-generic
//! [`Elem`] surface for plain `&'a T` in and out. Shape errors cannot occur
//! here; fallible outcomes are `Option`s, plus `try_` variants where node
//! allocation is involved.

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::cmp::Ordering;
use core::fmt;

use crate::Elem;
use crate::Iter;
use crate::List;
use crate::ListError;

/// A depth-1 list of borrowed leaf values.

pub struct FlatList<'a, T, A: Allocator = Global> {
  inner: List<'a, T, A>,
}

/// An iterator over the leaves of a [`FlatList`], head to tail.

pub struct FlatIter<'s, 'a, T, A: Allocator> {
  inner: Iter<'s, 'a, T, A>,
}

impl<'a, T> FlatList<'a, T, Global> {
  /// Creates an empty flat list backed by the global allocator.

  pub fn new() -> Self {
    Self { inner: List::new(1) }
  }

  /// Builds a flat list holding a borrow of each element of `items`, in
  /// slice order.

  pub fn from_slice(items: &'a [T]) -> Self {
    Self::from_slice_in(items, Global)
  }
}

impl<'a, T> Default for FlatList<'a, T, Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, T, A: Allocator> FlatList<'a, T, A> {
  /// Creates an empty flat list backed by the given allocator.

  pub fn new_in(allocator: A) -> Self {
    Self { inner: List::new_in(1, allocator) }
  }

  /// Whether the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// The number of elements, counted by walking the chain.

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  /// An iterator over the leaves, head to tail.

  #[inline(always)]
  pub fn iter(&self) -> FlatIter<'_, 'a, T, A> {
    FlatIter { inner: self.inner.iter() }
  }

  /// Calls `visit` once per leaf in head-to-tail order.

  pub fn for_each<F>(&self, mut visit: F)
  where
    F: FnMut(&'a T)
  {
    for item in self.iter() {
      visit(item);
    }
  }

  /// The leaf at the given 0-based index, or `None` if the index is past
  /// the end.

  pub fn get(&self, index: usize) -> Option<&'a T> {
    self.inner.get(index)?.as_leaf()
  }

  /// The first leaf for which `cmp(needle, leaf)` is `Equal`, head to tail.

  pub fn find<F>(&self, needle: &T, cmp: F) -> Option<&'a T>
  where
    F: Fn(&T, &T) -> Ordering
  {
    for item in self.iter() {
      if cmp(needle, item) == Ordering::Equal {
        return Some(item);
      }
    }

    None
  }

  /// The 0-based index of the first match. When no leaf matches, the result
  /// is the number of elements scanned, i.e. `self.len()`, never a negative
  /// sentinel.

  pub fn position<F>(&self, needle: &T, cmp: F) -> usize
  where
    F: Fn(&T, &T) -> Ordering
  {
    let mut at = 0;

    for item in self.iter() {
      if cmp(needle, item) == Ordering::Equal {
        return at;
      }
      at += 1;
    }

    at
  }

  /// Whether any leaf matches `needle`.

  pub fn contains<F>(&self, needle: &T, cmp: F) -> bool
  where
    F: Fn(&T, &T) -> Ordering
  {
    self.find(needle, cmp).is_some()
  }

  /// Whether `self` and `other` hold leaves comparing equal at every
  /// position. A length mismatch is unequal without a walk; otherwise every
  /// pair is visited.

  pub fn equals<F>(&self, other: &Self, cmp: F) -> bool
  where
    F: Fn(&T, &T) -> Ordering
  {
    if self.len() != other.len() {
      return false;
    }

    let mut total = 0;

    for (x, y) in self.iter().zip(other.iter()) {
      total += usize::from(cmp(x, y) != Ordering::Equal);
    }

    total == 0
  }

  /// Overwrites the leaf at `index` and returns the previous one, or `None`
  /// if the index is out of range.

  pub fn assign(&mut self, index: usize, item: &'a T) -> Option<&'a T> {
    self.inner.try_assign(index, Elem::Leaf(item)).ok()?.into_leaf()
  }

  /// Removes and returns the leaf at `index`, or `None` if the list is
  /// empty or the index is out of range.

  pub fn remove(&mut self, index: usize) -> Option<&'a T> {
    self.inner.try_remove(index).ok()?.into_leaf()
  }

  /// Removes and returns the head leaf, or `None` if the list is empty.

  pub fn pop_front(&mut self) -> Option<&'a T> {
    self.inner.pop_front()?.into_leaf()
  }

  /// Removes every element, releasing every node.

  pub fn clear(&mut self) {
    self.inner.clear()
  }

  /// Reverses the list purely by relinking `next` pointers.

  pub fn reverse(&mut self) {
    self.inner.reverse()
  }

  /// A view of the underlying depth-1 [`List`].

  #[inline(always)]
  pub fn as_list(&self) -> &List<'a, T, A> {
    &self.inner
  }

  /// Converts the wrapper into the underlying depth-1 [`List`].

  pub fn into_list(self) -> List<'a, T, A> {
    self.inner
  }
}

impl<'a, T, A: Allocator + Clone> FlatList<'a, T, A> {
  /// Builds a flat list holding a borrow of each element of `items`, in
  /// slice order, backed by the given allocator.

  pub fn from_slice_in(items: &'a [T], allocator: A) -> Self {
    let mut list = Self::new_in(allocator);

    for item in items.iter().rev() {
      list.push_front(item);
    }

    list
  }

  /// Links a new node borrowing `item` as the new head. O(1).
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate the node.

  pub fn push_front(&mut self, item: &'a T) {
    self.inner.push_front(Elem::Leaf(item))
  }

  /// Links a new node borrowing `item` as the new head. O(1).
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate the node.

  pub fn try_push_front(&mut self, item: &'a T) -> Result<(), ListError> {
    self.inner.try_push_front(Elem::Leaf(item))
  }

  /// Splices a new node borrowing `item` in at the given 0-based index.
  /// `index == 0` is a front push and `index == self.len()` appends.
  ///
  /// # Panics
  ///
  /// Panics if `index > self.len()`, or on failure to allocate the node.

  pub fn insert(&mut self, index: usize, item: &'a T) {
    self.inner.insert(index, Elem::Leaf(item))
  }

  /// Splices a new node borrowing `item` in at the given 0-based index.
  ///
  /// # Errors
  ///
  /// An error is returned if `index > self.len()`, or on failure to
  /// allocate the node.

  pub fn try_insert(&mut self, index: usize, item: &'a T) -> Result<(), ListError> {
    self.inner.try_insert(index, Elem::Leaf(item))
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for FlatList<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.inner.fmt(f)
  }
}

impl<'s, 'a, T, A: Allocator> Iterator for FlatIter<'s, 'a, T, A> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()?.as_leaf()
  }
}

impl<'s, 'a, T, A: Allocator> Clone for FlatIter<'s, 'a, T, A> {
  #[inline(always)]
  fn clone(&self) -> Self {
    FlatIter { inner: self.inner.clone() }
  }
}

impl<'s, 'a, T, A: Allocator> IntoIterator for &'s FlatList<'a, T, A> {
  type Item = &'a T;
  type IntoIter = FlatIter<'s, 'a, T, A>;

  #[inline(always)]
  fn into_iter(self) -> FlatIter<'s, 'a, T, A> {
    self.iter()
  }
}
