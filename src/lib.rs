//! This crate provides a doubly-linked list with owned nodes, threaded
//! as a ring through a slab of index-linked slots.
//!
//! The [`List`] allows inserting and removing elements at any given
//! position in constant time. Positions are named by [`Cursor`] values:
//! small copyable tokens that do not borrow the list and are validated
//! against it on every use, so a cursor used with the wrong list, or
//! kept across the removal of its node, is reported as an error rather
//! than silently honoured.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use slab_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let cursor = list.cursor_front();
//! list.insert(cursor, 0).unwrap(); // insert 0 before the first element
//! assert_eq!(list.front(), Ok(&0));
//!
//! let cursor = list.next(cursor).unwrap(); // move to 2
//! let (removed, after) = list.remove(cursor).unwrap();
//! assert_eq!(removed, 2);
//! assert_eq!(list.get(after), Ok(&3));
//!
//! // The removed position is dead now.
//! assert_eq!(list.get(cursor), Err(Error::InvalidCursor));
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! All nodes live in one `Vec` owned by the list — the slab. A node
//! holds `prev`/`next` slot indices and its element. Slot 0 is the
//! *anchor*: it is created with the list, carries no element, and marks
//! the ring boundary; slots freed by removals are kept on a free stack
//! and reused by later insertions.
//!
//! ```text
//!           slot 0      slot 1      slot 2      slot 3      slot 4
//!        ╔══════════╗ ╔══════════╗ ┌──────────┐ ╔══════════╗ ╔══════════╗
//! nodes: ║  anchor  ║ ║ "B"      ║ ┊ (vacant) ┊ ║ "A"      ║ ║ "C"      ║
//!        ║ next: 3  ║ ║ next: 4  ║ ┊          ┊ ║ next: 1  ║ ║ next: 0  ║
//!        ║ prev: 4  ║ ║ prev: 3  ║ ┊          ┊ ║ prev: 0  ║ ║ prev: 1  ║
//!        ╚══════════╝ ╚══════════╝ └──────────┘ ╚══════════╝ ╚══════════╝
//!
//!        free: [2]        ring order: anchor → "A" → "B" → "C" → anchor
//! ```
//!
//! The anchor's `next` is the logical head and its `prev` the logical
//! tail; an empty list is the anchor linked to itself. In a list with
//! *n* elements there are *n* + 1 cursor positions, the extra one being
//! the anchor — the end position, returned by [`List::cursor_end`].
//!
//! # Cursors
//!
//! A [`Cursor`] records which list minted it and which slot it names.
//! Operations taking a cursor ([`List::get`], [`List::get_mut`],
//! [`List::next`], [`List::prev`], [`List::insert`], [`List::remove`])
//! return `Result` and fail with [`Error::InvalidCursor`] when the
//! cursor belongs to another list, has been invalidated by a removal,
//! or crosses a ring boundary: the end position cannot be dereferenced
//! or stepped past, and the first element cannot be stepped before.
//! Operations that need an element ([`List::front`], [`List::back`],
//! [`List::pop_front`], [`List::pop_back`], [`List::remove`]) fail with
//! [`Error::Empty`] on an empty list.
//!
//! ```
//! use slab_list::{Error, List};
//!
//! let mut list = List::new();
//! assert_eq!(list.pop_front(), Err(Error::Empty));
//!
//! let one = list.push_back(1);
//! let other = List::from([2]);
//! // `one` belongs to `list`, not `other`.
//! assert_eq!(other.get(one), Err(Error::InvalidCursor));
//! assert_eq!(list.get(one), Ok(&1));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, exact-size iterators and iterate the list
//! like an array (fused and non-cyclic). [`IterMut`] provides
//! mutability of the elements (but not of the linked structure).
//!
//! ## Examples
//!
//! ```
//! use slab_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Algorithms
//!
//! The whole-list operations re-link slots instead of moving elements:
//! - [`sort`](List::sort) (with [`sort_by`](List::sort_by) and
//!   [`sort_by_key`](List::sort_by_key)): collects the ring order into
//!   a buffer, sorts it, and re-threads the links;
//! - [`merge`](List::merge) (and [`merge_by`](List::merge_by)): splices
//!   a second sorted list in, transferring node records and leaving the
//!   source empty;
//! - [`reverse`](List::reverse): swaps every `prev`/`next` pair around
//!   the ring;
//! - [`unique`](List::unique): drops consecutive duplicates.
//!
//! ```
//! use slab_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([3, 1, 2, 3, 2]);
//! list.sort();
//! list.unique();
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
//! ```

#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::error::Error;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
