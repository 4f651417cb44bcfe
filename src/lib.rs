#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use alloc::alloc::handle_alloc_error;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use core::alloc::Layout;
use core::cmp::Ordering;
use core::fmt;
use core::mem::replace;
use core::ptr::NonNull;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod flat;

#[cfg(feature = "regex")]
pub mod pattern;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly linked list whose elements are leaves or nested lists, decided by
/// the list's [`depth`](Self::depth).
///
/// At depth 1 every element is a borrowed leaf. At depth `d > 1` every
/// element is an owned nested `List` of depth `d - 1`, and clearing or
/// dropping the parent releases the whole tree.
///
/// Node storage comes from the allocator `A`, so allocation failure can be
/// observed through the `try_` variants of the mutating operations.

pub struct List<'a, T, A: Allocator = Global> {
  head: Link<'a, T, A>,
  depth: usize,
  size_hint: usize,
  allocator: A,
}

/// A single element of a [`List`].
///
/// An element must fit the depth of the list holding it: a `Leaf` fits a
/// depth-1 list, and a nested `List` of depth `d` fits a list of depth
/// `d + 1`. Every insertion point checks this, so a well-formed list is
/// homogeneous.

pub enum Elem<'a, T, A: Allocator = Global> {
  /// A borrowed leaf value. The list owns the node wrapper, never the
  /// referent.
  Leaf(&'a T),
  /// An owned nested list, one level shallower than its parent.
  List(List<'a, T, A>),
}

/// An iterator over the elements of a [`List`], head to tail.

pub struct Iter<'s, 'a, T, A: Allocator> {
  node: Option<&'s Node<'a, T, A>>,
}

/// An error from a list operation.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListError {
  /// Node allocation could not be satisfied by the backing allocator.
  AllocFailed(Layout),
  /// The given index is outside the valid range for the operation.
  OutOfRange {
    /// The requested index.
    index: usize,
    /// The length of the list at the time of the operation.
    len: usize,
  },
  /// Removal was attempted on an empty list.
  Empty,
  /// An element or operand does not have the shape the list's depth calls
  /// for.
  DepthMismatch {
    /// The depth required by the receiving list.
    expected: usize,
    /// The depth of the offending element or operand.
    found: usize,
  },
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<'a, T, A> = Option<Box<Node<'a, T, A>, A>>;

struct Node<'a, T, A: Allocator> {
  data: Elem<'a, T, A>,
  next: Link<'a, T, A>,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: ListError) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

// Takes a node out of its box and releases the box's memory, without running
// the recursive drop of the `next` chain still owned by the node.

#[inline(always)]
fn unbox<'a, T, A: Allocator>(node: Box<Node<'a, T, A>, A>) -> Node<'a, T, A> {
  let (p, allocator) = Box::into_raw_with_allocator(node);
  let node = unsafe { p.read() };
  let l = Layout::new::<Node<'a, T, A>>();
  unsafe { allocator.deallocate(NonNull::new_unchecked(p).cast(), l) };
  node
}

#[inline(always)]
fn alloc_node<'a, T, A, E>(node: Node<'a, T, A>, allocator: A) -> Result<Box<Node<'a, T, A>, A>, E>
where
  A: Allocator,
  E: Fail,
{
  match Box::try_new_in(node, allocator) {
    Ok(node) => Ok(node),
    Err(_) => E::fail(ListError::AllocFailed(Layout::new::<Node<'a, T, A>>())),
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: ListError) -> Result<T, Self> {
    match e {
      ListError::AllocFailed(layout) =>
        handle_alloc_error(layout),
      ListError::OutOfRange { index, len } =>
        panic!("nestlist: index {} is out of range for a list of length {}!", index, len),
      ListError::Empty =>
        panic!("nestlist: attempted to remove from an empty list!"),
      ListError::DepthMismatch { expected, found } =>
        panic!("nestlist: depth mismatch: expected depth {}, found depth {}!", expected, found),
    }
  }
}

impl Fail for ListError {
  #[inline(always)]
  fn fail<T>(e: ListError) -> Result<T, Self> {
    Err(e)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// ListError                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for ListError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ListError::AllocFailed(layout) =>
        write!(f, "node allocation of {} bytes failed", layout.size()),
      ListError::OutOfRange { index, len } =>
        write!(f, "index {} is out of range for a list of length {}", index, len),
      ListError::Empty =>
        write!(f, "attempted to remove from an empty list"),
      ListError::DepthMismatch { expected, found } =>
        write!(f, "depth mismatch: expected depth {}, found depth {}", expected, found),
    }
  }
}

impl core::error::Error for ListError { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Elem                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, A: Allocator> Elem<'a, T, A> {
  /// The depth of a list this element could belong to. A leaf fits a depth-1
  /// list; a nested list of depth `d` fits a list of depth `d + 1`.

  #[inline(always)]
  pub fn depth(&self) -> usize {
    match self {
      Elem::Leaf(_) => 1,
      Elem::List(list) => list.depth + 1,
    }
  }

  /// The leaf payload, if this element is a leaf.

  #[inline(always)]
  pub fn as_leaf(&self) -> Option<&'a T> {
    match self {
      Elem::Leaf(x) => Some(x),
      Elem::List(_) => None,
    }
  }

  /// A reference to the nested list, if this element is one.

  #[inline(always)]
  pub fn as_list(&self) -> Option<&List<'a, T, A>> {
    match self {
      Elem::Leaf(_) => None,
      Elem::List(list) => Some(list),
    }
  }

  /// Converts the element into its leaf payload, if it is a leaf.

  #[inline(always)]
  pub fn into_leaf(self) -> Option<&'a T> {
    match self {
      Elem::Leaf(x) => Some(x),
      Elem::List(_) => None,
    }
  }

  /// Converts the element into its nested list, if it is one.

  #[inline(always)]
  pub fn into_list(self) -> Option<List<'a, T, A>> {
    match self {
      Elem::Leaf(_) => None,
      Elem::List(list) => Some(list),
    }
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Elem<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Elem::Leaf(x) => x.fmt(f),
      Elem::List(list) => list.fmt(f),
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// OPERATIONS                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn fits<'a, T, A, E>(depth: usize, elem: &Elem<'a, T, A>) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let found = elem.depth();

  if found == depth {
    Ok(())
  } else {
    E::fail(ListError::DepthMismatch { expected: depth, found })
  }
}

fn insert<'a, T, A, E>(list: &mut List<'a, T, A>, index: usize, elem: Elem<'a, T, A>) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  fits(list.depth, &elem)?;

  let allocator = list.allocator.clone();

  let mut link = &mut list.head;
  let mut at = 0;

  while at < index {
    match link {
      None => return E::fail(ListError::OutOfRange { index, len: at }),
      Some(node) => {
        link = &mut node.next;
        at += 1;
      }
    }
  }

  // The node is allocated before anything is unlinked, so a failed
  // allocation leaves the list untouched.

  let mut node = alloc_node(Node { data: elem, next: None }, allocator)?;
  node.next = link.take();
  *link = Some(node);

  Ok(())
}

fn assign<'a, T, A, E>(list: &mut List<'a, T, A>, index: usize, elem: Elem<'a, T, A>) -> Result<Elem<'a, T, A>, E>
where
  A: Allocator,
  E: Fail,
{
  fits(list.depth, &elem)?;

  let mut node = list.head.as_deref_mut();
  let mut at = 0;

  while let Some(n) = node {
    if at == index {
      return Ok(replace(&mut n.data, elem));
    }
    node = n.next.as_deref_mut();
    at += 1;
  }

  E::fail(ListError::OutOfRange { index, len: at })
}

fn remove<'a, T, A, E>(list: &mut List<'a, T, A>, index: usize) -> Result<Elem<'a, T, A>, E>
where
  A: Allocator,
  E: Fail,
{
  if list.head.is_none() {
    return E::fail(ListError::Empty);
  }

  let mut link = &mut list.head;
  let mut at = 0;

  while at < index {
    match link {
      None => return E::fail(ListError::OutOfRange { index, len: at }),
      Some(node) => {
        link = &mut node.next;
        at += 1;
      }
    }
  }

  match link.take() {
    None => E::fail(ListError::OutOfRange { index, len: at }),
    Some(node) => {
      let node = unbox(node);
      *link = node.next;
      Ok(node.data)
    }
  }
}

fn elem_matches<'a, T, A, F, E>(needle: &Elem<'a, T, A>, elem: &Elem<'a, T, A>, cmp: &F) -> Result<bool, E>
where
  A: Allocator,
  F: Fn(&T, &T) -> Ordering,
  E: Fail,
{
  match (needle, elem) {
    (Elem::Leaf(p), Elem::Leaf(q)) => Ok(cmp(*p, *q) == Ordering::Equal),
    (Elem::List(p), Elem::List(q)) => Ok(mismatches(p, q, cmp)? == 0),
    // A well-formed list is homogeneous, so a mixed pair cannot occur.
    _ => Ok(false),
  }
}

// The number of element positions at which `a` and `b` differ. A length
// mismatch is reported without walking either list; otherwise every pair is
// visited, even after a difference has already been found.

fn mismatches<'a, T, A, F, E>(a: &List<'a, T, A>, b: &List<'a, T, A>, cmp: &F) -> Result<usize, E>
where
  A: Allocator,
  F: Fn(&T, &T) -> Ordering,
  E: Fail,
{
  if a.depth != b.depth {
    return E::fail(ListError::DepthMismatch { expected: a.depth, found: b.depth });
  }

  if a.len() != b.len() {
    return Ok(1);
  }

  let mut total = 0;

  for (x, y) in a.iter().zip(b.iter()) {
    total += usize::from(! elem_matches(x, y, cmp)?);
  }

  Ok(total)
}

fn find<'s, 'a, T, A, F, E>(list: &'s List<'a, T, A>, needle: &Elem<'a, T, A>, cmp: &F) -> Result<Option<&'s Elem<'a, T, A>>, E>
where
  A: Allocator,
  F: Fn(&T, &T) -> Ordering,
  E: Fail,
{
  fits(list.depth, needle)?;

  for elem in list.iter() {
    if elem_matches(needle, elem, cmp)? {
      return Ok(Some(elem));
    }
  }

  Ok(None)
}

fn position<'a, T, A, F, E>(list: &List<'a, T, A>, needle: &Elem<'a, T, A>, cmp: &F) -> Result<usize, E>
where
  A: Allocator,
  F: Fn(&T, &T) -> Ordering,
  E: Fail,
{
  fits(list.depth, needle)?;

  let mut at = 0;

  for elem in list.iter() {
    if elem_matches(needle, elem, cmp)? {
      return Ok(at);
    }
    at += 1;
  }

  // Absent: the number of elements scanned, which is the length of the list.

  Ok(at)
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> List<'a, T, Global> {
  /// Creates an empty list of the given depth, backed by the global
  /// allocator.
  ///
  /// # Panics
  ///
  /// Panics if `depth` is zero.

  pub fn new(depth: usize) -> Self {
    Self::new_in(depth, Global)
  }

  /// Creates an empty list of the given depth with an explicit element size
  /// hint, backed by the global allocator.
  ///
  /// # Panics
  ///
  /// Panics if `depth` is zero.

  pub fn with_size_hint(depth: usize, size_hint: usize) -> Self {
    Self::with_size_hint_in(depth, size_hint, Global)
  }
}

impl<'a, T, A: Allocator> List<'a, T, A> {
  /// Creates an empty list of the given depth, backed by the given
  /// allocator.
  ///
  /// # Panics
  ///
  /// Panics if `depth` is zero.

  pub fn new_in(depth: usize, allocator: A) -> Self {
    Self::with_size_hint_in(depth, size_of::<T>(), allocator)
  }

  /// Creates an empty list of the given depth with an explicit element size
  /// hint, backed by the given allocator.
  ///
  /// # Panics
  ///
  /// Panics if `depth` is zero.

  pub fn with_size_hint_in(depth: usize, size_hint: usize, allocator: A) -> Self {
    assert!(depth >= 1, "nestlist: a list must have depth at least 1!");

    Self { head: None, depth, size_hint, allocator }
  }

  /// The nesting level of this list. Depth 1 holds leaves; depth `d > 1`
  /// holds nested lists of depth `d - 1`.

  #[inline(always)]
  pub fn depth(&self) -> usize {
    self.depth
  }

  /// The informational size of the scalar this list is ultimately built
  /// from.

  #[inline(always)]
  pub fn size_hint(&self) -> usize {
    self.size_hint
  }

  /// A reference to the backing allocator.

  #[inline(always)]
  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Whether the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The number of elements, counted by walking the chain.

  pub fn len(&self) -> usize {
    self.iter().count()
  }

  /// An iterator over the elements, head to tail.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, 'a, T, A> {
    Iter { node: self.head.as_deref() }
  }

  /// Calls `visit` once per element in head-to-tail order. An empty list
  /// visits nothing.

  pub fn for_each<F>(&self, mut visit: F)
  where
    F: FnMut(&Elem<'a, T, A>)
  {
    for elem in self.iter() {
      visit(elem);
    }
  }

  /// The element at the given 0-based index, or `None` if the index is past
  /// the end.

  pub fn get(&self, index: usize) -> Option<&Elem<'a, T, A>> {
    let mut node = self.head.as_deref();
    let mut at = 0;

    while let Some(n) = node {
      if at == index {
        return Some(&n.data);
      }
      node = n.next.as_deref();
      at += 1;
    }

    None
  }

  /// The first element matching `needle`, head to tail. At depth 1 a match
  /// is `cmp == Equal` on the leaves; at greater depths it is recursive
  /// structural equality against the needle list.
  ///
  /// # Panics
  ///
  /// Panics if the needle does not fit this list's depth.

  pub fn find<F>(&self, needle: &Elem<'a, T, A>, cmp: F) -> Option<&Elem<'a, T, A>>
  where
    F: Fn(&T, &T) -> Ordering
  {
    unwrap(find(self, needle, &cmp))
  }

  /// The first element matching `needle`, head to tail.
  ///
  /// # Errors
  ///
  /// An error is returned if the needle does not fit this list's depth.

  pub fn try_find<F>(&self, needle: &Elem<'a, T, A>, cmp: F) -> Result<Option<&Elem<'a, T, A>>, ListError>
  where
    F: Fn(&T, &T) -> Ordering
  {
    find(self, needle, &cmp)
  }

  /// The 0-based index of the first element matching `needle`. When no
  /// element matches, the result is the number of elements scanned, i.e.
  /// `self.len()`, never a negative sentinel.
  ///
  /// # Panics
  ///
  /// Panics if the needle does not fit this list's depth.

  pub fn position<F>(&self, needle: &Elem<'a, T, A>, cmp: F) -> usize
  where
    F: Fn(&T, &T) -> Ordering
  {
    unwrap(position(self, needle, &cmp))
  }

  /// The 0-based index of the first match, or `self.len()` when absent.
  ///
  /// # Errors
  ///
  /// An error is returned if the needle does not fit this list's depth.

  pub fn try_position<F>(&self, needle: &Elem<'a, T, A>, cmp: F) -> Result<usize, ListError>
  where
    F: Fn(&T, &T) -> Ordering
  {
    position(self, needle, &cmp)
  }

  /// Whether any element matches `needle`.
  ///
  /// # Panics
  ///
  /// Panics if the needle does not fit this list's depth.

  pub fn contains<F>(&self, needle: &Elem<'a, T, A>, cmp: F) -> bool
  where
    F: Fn(&T, &T) -> Ordering
  {
    unwrap(find(self, needle, &cmp)).is_some()
  }

  /// Whether any element matches `needle`.
  ///
  /// # Errors
  ///
  /// An error is returned if the needle does not fit this list's depth.

  pub fn try_contains<F>(&self, needle: &Elem<'a, T, A>, cmp: F) -> Result<bool, ListError>
  where
    F: Fn(&T, &T) -> Ordering
  {
    Ok(find::<_, _, _, ListError>(self, needle, &cmp)?.is_some())
  }

  /// The number of element positions at which `self` and `other` differ,
  /// recursing through nested lists; zero means structurally equal.
  ///
  /// A length mismatch reports a nonzero result without walking either
  /// list. Otherwise every element pair is visited, even after a difference
  /// has already been found.
  ///
  /// # Panics
  ///
  /// Panics if the two lists have different depths.

  pub fn compare<F>(&self, other: &Self, cmp: F) -> usize
  where
    F: Fn(&T, &T) -> Ordering
  {
    unwrap(mismatches(self, other, &cmp))
  }

  /// The number of element positions at which `self` and `other` differ;
  /// zero means structurally equal.
  ///
  /// # Errors
  ///
  /// An error is returned if the two lists have different depths.

  pub fn try_compare<F>(&self, other: &Self, cmp: F) -> Result<usize, ListError>
  where
    F: Fn(&T, &T) -> Ordering
  {
    mismatches(self, other, &cmp)
  }

  /// Whether `self` and `other` are structurally equal down to the leaves.
  /// Two empty lists of equal depth are equal.
  ///
  /// # Panics
  ///
  /// Panics if the two lists have different depths.

  pub fn equals<F>(&self, other: &Self, cmp: F) -> bool
  where
    F: Fn(&T, &T) -> Ordering
  {
    unwrap(mismatches(self, other, &cmp)) == 0
  }

  /// Whether `self` and `other` are structurally equal down to the leaves.
  ///
  /// # Errors
  ///
  /// An error is returned if the two lists have different depths.

  pub fn try_equals<F>(&self, other: &Self, cmp: F) -> Result<bool, ListError>
  where
    F: Fn(&T, &T) -> Ordering
  {
    Ok(mismatches::<_, _, _, ListError>(self, other, &cmp)? == 0)
  }

  /// Overwrites the element at `index` and returns the previous element, so
  /// an owned nested list is handed back rather than silently destroyed.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of range or the element does not fit this
  /// list's depth.

  pub fn assign(&mut self, index: usize, elem: Elem<'a, T, A>) -> Elem<'a, T, A> {
    unwrap(assign(self, index, elem))
  }

  /// Overwrites the element at `index` and returns the previous element.
  ///
  /// # Errors
  ///
  /// An error is returned if `index` is out of range or the element does
  /// not fit this list's depth. On error the given element is dropped.

  pub fn try_assign(&mut self, index: usize, elem: Elem<'a, T, A>) -> Result<Elem<'a, T, A>, ListError> {
    assign(self, index, elem)
  }

  /// Removes and returns the element at `index`, relinking its neighbors.
  ///
  /// # Panics
  ///
  /// Panics if the list is empty or `index` is out of range.

  pub fn remove(&mut self, index: usize) -> Elem<'a, T, A> {
    unwrap(remove(self, index))
  }

  /// Removes and returns the element at `index`.
  ///
  /// # Errors
  ///
  /// [`ListError::Empty`] is returned for an empty list, and
  /// [`ListError::OutOfRange`] for a bad index, so neither outcome can be
  /// confused with a legitimately removed element.

  pub fn try_remove(&mut self, index: usize) -> Result<Elem<'a, T, A>, ListError> {
    remove(self, index)
  }

  /// Removes and returns the head element, or `None` if the list is empty.

  pub fn pop_front(&mut self) -> Option<Elem<'a, T, A>> {
    let node = unbox(self.head.take()?);
    self.head = node.next;
    Some(node.data)
  }

  /// Removes every element, releasing every node. Owned nested lists are
  /// destroyed with their own chains.

  pub fn clear(&mut self) {
    let mut link = self.head.take();

    while let Some(node) = link {
      let node = unbox(node);
      link = node.next;
    }
  }

  /// Reverses the list purely by relinking `next` pointers. No allocation,
  /// no payload copies; reversing twice restores the original order.

  pub fn reverse(&mut self) {
    let mut prev = None;
    let mut cur = self.head.take();

    while let Some(mut node) = cur {
      cur = node.next.take();
      node.next = prev;
      prev = Some(node);
    }

    self.head = prev;
  }
}

impl<'a, T, A: Allocator + Clone> List<'a, T, A> {
  /// Links a new node holding `elem` as the new head. O(1).
  ///
  /// # Panics
  ///
  /// Panics if the element does not fit this list's depth, or on failure to
  /// allocate the node.

  pub fn push_front(&mut self, elem: Elem<'a, T, A>) {
    unwrap(insert(self, 0, elem))
  }

  /// Links a new node holding `elem` as the new head. O(1).
  ///
  /// # Errors
  ///
  /// An error is returned if the element does not fit this list's depth, or
  /// on failure to allocate the node. On error the given element is dropped
  /// and the list is unchanged.

  pub fn try_push_front(&mut self, elem: Elem<'a, T, A>) -> Result<(), ListError> {
    insert(self, 0, elem)
  }

  /// Splices a new node holding `elem` in at the given 0-based index.
  /// `index == 0` is a front push and `index == self.len()` appends.
  ///
  /// An out-of-range index is a hard failure, not a silent front insertion.
  ///
  /// # Panics
  ///
  /// Panics if `index > self.len()`, if the element does not fit this
  /// list's depth, or on failure to allocate the node.

  pub fn insert(&mut self, index: usize, elem: Elem<'a, T, A>) {
    unwrap(insert(self, index, elem))
  }

  /// Splices a new node holding `elem` in at the given 0-based index.
  ///
  /// # Errors
  ///
  /// An error is returned if `index > self.len()`, if the element does not
  /// fit this list's depth, or on failure to allocate the node. On error
  /// the given element is dropped and the list is unchanged.

  pub fn try_insert(&mut self, index: usize, elem: Elem<'a, T, A>) -> Result<(), ListError> {
    insert(self, index, elem)
  }
}

impl<'a, T, A: Allocator> Drop for List<'a, T, A> {
  fn drop(&mut self) {
    self.clear()
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for List<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'s, 'a, T, A: Allocator> Iterator for Iter<'s, 'a, T, A> {
  type Item = &'s Elem<'a, T, A>;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.node?;
    self.node = node.next.as_deref();
    Some(&node.data)
  }
}

impl<'s, 'a, T, A: Allocator> Clone for Iter<'s, 'a, T, A> {
  #[inline(always)]
  fn clone(&self) -> Self {
    Iter { node: self.node }
  }
}

impl<'s, 'a, T, A: Allocator> IntoIterator for &'s List<'a, T, A> {
  type Item = &'s Elem<'a, T, A>;
  type IntoIter = Iter<'s, 'a, T, A>;

  #[inline(always)]
  fn into_iter(self) -> Iter<'s, 'a, T, A> {
    self.iter()
  }
}
