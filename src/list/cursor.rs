use crate::list::error::Error;
use crate::list::{List, ListId, ANCHOR};

/// A position in a [`List`].
///
/// A `Cursor` is a copyable value naming one node of one particular list
/// instance; it does not borrow the list. Every operation that takes a
/// cursor first checks that the cursor belongs to the list it is used
/// with and that its node is still live, and reports
/// [`Error::InvalidCursor`] otherwise.
///
/// In a list with *n* elements there are *n* + 1 positions: one per
/// element, plus the *end* position (the anchor node). The end position
/// never holds an element; it is returned by [`List::cursor_end`] and is
/// also where [`List::cursor_front`] points when the list is empty.
/// Because the ring wraps, the end position doubles as the position
/// before the first element, which is why dereferencing it is always
/// rejected.
///
/// Two cursors are equal exactly when they name the same node of the
/// same list instance.
///
/// # Examples
///
/// Here is a simple example showing how cursors work. (The end position
/// is denoted by `#`.)
/// ```
/// use slab_list::{Error, List};
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // A cursor at the start: [|A B C D #]
/// let cursor = list.cursor_front();
/// assert_eq!(list.get(cursor), Ok(&'A'));
///
/// // Step forward: [ A|B C D #]
/// let cursor = list.next(cursor).unwrap();
/// assert_eq!(list.get(cursor), Ok(&'B'));
///
/// // A cursor at the end position: [ A B C D|#]
/// let cursor = list.cursor_end();
/// assert_eq!(list.get(cursor), Err(Error::InvalidCursor));
///
/// // Step backward: [ A B C|D #]
/// let cursor = list.prev(cursor).unwrap();
/// assert_eq!(list.get(cursor), Ok(&'D'));
/// ```
///
/// A cursor is only honoured by the list that minted it:
/// ```
/// use slab_list::{Error, List};
/// use std::iter::FromIterator;
///
/// let first = List::from_iter([1, 2, 3]);
/// let second = List::from_iter([1, 2, 3]);
///
/// let cursor = first.cursor_front();
/// assert_eq!(first.get(cursor), Ok(&1));
/// assert_eq!(second.get(cursor), Err(Error::InvalidCursor));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) list: ListId,
    pub(crate) node: usize,
}

// private methods
impl<T> List<T> {
    pub(crate) fn cursor_at(&self, node: usize) -> Cursor {
        Cursor {
            list: self.id,
            node,
        }
    }

    /// Resolve `cursor` to a slot of this list's ring (element or
    /// anchor), rejecting foreign and stale cursors.
    fn index_of(&self, cursor: Cursor) -> Result<usize, Error> {
        if cursor.list != self.id {
            return Err(Error::InvalidCursor);
        }
        match self.nodes.get(cursor.node) {
            Some(node) if !node.slot.is_vacant() => Ok(cursor.node),
            _ => Err(Error::InvalidCursor),
        }
    }

    /// Like [`List::index_of`], but additionally rejects the anchor, for
    /// operations that need an element.
    fn element_index_of(&self, cursor: Cursor) -> Result<usize, Error> {
        let index = self.index_of(cursor)?;
        if index == ANCHOR {
            return Err(Error::InvalidCursor);
        }
        Ok(index)
    }
}

impl<T> List<T> {
    /// Cursor at the first element, or at the end position if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(list.cursor_front()), Ok(&1));
    ///
    /// let empty = List::<i32>::new();
    /// assert_eq!(empty.cursor_front(), empty.cursor_end());
    /// ```
    pub fn cursor_front(&self) -> Cursor {
        self.cursor_at(self.head())
    }

    /// Cursor at the end position (one past the last element).
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let end = list.cursor_end();
    /// assert!(list.get(end).is_err());
    /// assert_eq!(list.get(list.prev(end).unwrap()), Ok(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor {
        self.cursor_at(ANCHOR)
    }

    /// Cursor one step forward of `cursor`.
    ///
    /// Fails with [`Error::InvalidCursor`] if `cursor` does not belong
    /// to this list, is stale, or is already at the end position: there
    /// is no position past the end.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    ///
    /// let cursor = list.cursor_front();
    /// let cursor = list.next(cursor).unwrap();
    /// assert_eq!(list.get(cursor), Ok(&2));
    ///
    /// // Stepping off the last element reaches the end position...
    /// let cursor = list.next(cursor).unwrap();
    /// assert_eq!(cursor, list.cursor_end());
    ///
    /// // ...and stepping past it is rejected.
    /// assert_eq!(list.next(cursor), Err(Error::InvalidCursor));
    /// ```
    pub fn next(&self, cursor: Cursor) -> Result<Cursor, Error> {
        let index = self.element_index_of(cursor)?;
        Ok(self.cursor_at(self.nodes[index].next))
    }

    /// Cursor one step backward of `cursor`.
    ///
    /// Fails with [`Error::InvalidCursor`] if `cursor` does not belong
    /// to this list, is stale, or is at the first element: there is no
    /// position before the front. Stepping backward from the end
    /// position reaches the last element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    ///
    /// let cursor = list.prev(list.cursor_end()).unwrap();
    /// assert_eq!(list.get(cursor), Ok(&2));
    ///
    /// let cursor = list.prev(cursor).unwrap();
    /// assert_eq!(list.get(cursor), Ok(&1));
    /// assert_eq!(list.prev(cursor), Err(Error::InvalidCursor));
    /// ```
    pub fn prev(&self, cursor: Cursor) -> Result<Cursor, Error> {
        let index = self.index_of(cursor)?;
        let prev = self.nodes[index].prev;
        if prev == ANCHOR {
            return Err(Error::InvalidCursor);
        }
        Ok(self.cursor_at(prev))
    }

    /// Reference to the element at `cursor`.
    ///
    /// Fails with [`Error::InvalidCursor`] if `cursor` does not belong
    /// to this list, is stale, or is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.get(list.cursor_front()), Ok(&1));
    /// assert_eq!(list.get(list.cursor_end()), Err(Error::InvalidCursor));
    /// ```
    pub fn get(&self, cursor: Cursor) -> Result<&T, Error> {
        let index = self.element_index_of(cursor)?;
        Ok(self.element(index))
    }

    /// Mutable reference to the element at `cursor`.
    ///
    /// Fails with [`Error::InvalidCursor`] if `cursor` does not belong
    /// to this list, is stale, or is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let cursor = list.cursor_front();
    /// *list.get_mut(cursor).unwrap() *= 5;
    /// assert_eq!(list.get(cursor), Ok(&5));
    /// ```
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<&mut T, Error> {
        let index = self.element_index_of(cursor)?;
        Ok(self.element_mut(index))
    }

    /// Splices a new element immediately before `at` and returns its
    /// cursor. Inserting before the end position appends.
    ///
    /// Fails with [`Error::InvalidCursor`] if `at` does not belong to
    /// this list or is stale; `at` itself stays valid and now follows
    /// the new element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    ///
    /// let at = list.next(list.cursor_front()).unwrap();
    /// let new = list.insert(at, 2).unwrap();
    /// assert_eq!(list.get(new), Ok(&2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, at: Cursor, value: T) -> Result<Cursor, Error> {
        let next = self.index_of(at)?;
        let prev = self.nodes[next].prev;
        let index = self.attach(prev, next, value);
        Ok(self.cursor_at(index))
    }

    /// Removes the element at `at`, returning it together with a cursor
    /// to the node that followed it.
    ///
    /// Fails with [`Error::Empty`] if the list holds no elements, and
    /// with [`Error::InvalidCursor`] if `at` does not belong to this
    /// list, is stale, or is the end position. `at` itself is
    /// invalidated by a successful removal.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let at = list.next(list.cursor_front()).unwrap();
    /// let (value, following) = list.remove(at).unwrap();
    /// assert_eq!(value, 2);
    /// assert_eq!(list.get(following), Ok(&3));
    ///
    /// // The removed position no longer resolves.
    /// assert_eq!(list.get(at), Err(Error::InvalidCursor));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, at: Cursor) -> Result<(T, Cursor), Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let index = self.element_index_of(at)?;
        let next = self.nodes[index].next;
        let value = self.detach(index);
        Ok((value, self.cursor_at(next)))
    }
}
