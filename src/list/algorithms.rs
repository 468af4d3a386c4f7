use crate::list::{List, ANCHOR};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep copy: a fresh list with the same elements in the same order.
    /// Cursors of the original do not resolve against the copy.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-assignment: drop the current elements, then copy `other`
    /// element-wise.
    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list.
    ///
    /// No element is moved or cloned: the ring is re-threaded, so every
    /// cursor keeps naming the element it named before the sort.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(*n*) auxiliary memory.
    ///
    /// # Current Implementation
    ///
    /// The ring's slot indices are collected in order into a buffer,
    /// the buffer is handed to the standard library's unstable slice
    /// sort, and the links are rewritten to match the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list; if it does not, the resulting order is
    /// unspecified. For example, while [`f64`] doesn't implement
    /// [`Ord`] because `NaN != NaN`, `partial_cmp` can serve as the
    /// comparator when the list is known not to contain a `NaN`:
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut floats = List::from_iter([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(*n*) auxiliary memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 4, 1, 3, 2]);
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }

        let mut order = Vec::with_capacity(self.len);
        let mut index = self.head();
        while index != ANCHOR {
            order.push(index);
            index = self.nodes[index].next;
        }

        let this = &*self;
        order.sort_unstable_by(|&a, &b| compare(this.element(a), this.element(b)));

        let mut prev = ANCHOR;
        for &index in &order {
            self.nodes[prev].next = index;
            self.nodes[index].prev = prev;
            prev = index;
        }
        self.nodes[prev].next = ANCHOR;
        self.nodes[ANCHOR].prev = prev;
    }

    /// Sorts the list with a key extraction function.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// list.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Merges `other` into this list, leaving `other` empty.
    ///
    /// Both lists are expected to be sorted ascending; this is not
    /// checked, and on unsorted input the result is simply whatever the
    /// linear merge below produces. Each element of `other` is spliced
    /// in front of the first element of `self` it is strictly less
    /// than; once `self` is exhausted, the remaining suffix of `other`
    /// is appended wholesale. Element records move between the two
    /// slabs without cloning, so cursors minted by `other` do not
    /// resolve afterwards.
    ///
    /// Merging a list into itself is not expressible; the borrows alias:
    /// ```compile_fail
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.merge(&mut list);
    /// ```
    ///
    /// # Complexity
    ///
    /// *O*(*n* + *m*) time; *O*(1) when `self` is empty (the backing
    /// stores are swapped).
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 5]);
    /// let mut other = List::from_iter([2, 4, 6]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, |a, b| a.lt(b));
    }

    /// Merges `other` into this list with a "less than" predicate.
    ///
    /// See [`List::merge`]; `less(a, b)` stands in for `a < b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 3, 1]);
    /// let mut other = List::from_iter([6, 4, 2]);
    ///
    /// list.merge_by(&mut other, |a, b| a > b);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![6, 5, 4, 3, 2, 1]);
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            // Wholesale splice: take over the whole backing store. The
            // list identities stay put, so cursors of `other` die with
            // the move, like any other removal.
            mem::swap(&mut self.nodes, &mut other.nodes);
            mem::swap(&mut self.free, &mut other.free);
            self.len = mem::take(&mut other.len);
            return;
        }

        let mut dest = self.head();
        let mut source = other.head();
        while dest != ANCHOR && source != ANCHOR {
            if less(other.element(source), self.element(dest)) {
                let following = other.nodes[source].next;
                let value = other.detach(source);
                let prev = self.nodes[dest].prev;
                self.attach(prev, dest, value);
                source = following;
            } else {
                dest = self.nodes[dest].next;
            }
        }
        while source != ANCHOR {
            let following = other.nodes[source].next;
            let value = other.detach(source);
            let tail = self.tail();
            self.attach(tail, ANCHOR, value);
            source = following;
        }
    }

    /// Reverses the order of the elements.
    ///
    /// One pass around the ring, swapping the `prev`/`next` links of
    /// every member including the anchor; no element is moved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut index = ANCHOR;
        loop {
            let node = &mut self.nodes[index];
            mem::swap(&mut node.prev, &mut node.next);
            // After the swap, `prev` holds the old successor.
            index = node.prev;
            if index == ANCHOR {
                break;
            }
        }
    }

    /// Removes every element that equals its predecessor, keeping the
    /// first of each run.
    ///
    /// Only *consecutive* duplicates are removed; sort first for a
    /// global deduplication.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slab_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 2, 2, 3, 1]);
    /// list.unique();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 1]);
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        if self.len < 2 {
            return;
        }
        let mut index = self.head();
        loop {
            let following = self.nodes[index].next;
            if following == ANCHOR {
                break;
            }
            if self.element(index) == self.element(following) {
                self.detach(following);
            } else {
                index = following;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    fn collect<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn sort_reorders_links_only() {
        let mut list = List::new();
        let five = list.push_back(5);
        let two = list.push_back(2);
        let four = list.push_back(4);

        list.sort();
        assert_eq!(collect(&list), vec![2, 4, 5]);

        // Cursors follow their elements through the re-threading.
        assert_eq!(list.get(five), Ok(&5));
        assert_eq!(list.get(two), Ok(&2));
        assert_eq!(list.get(four), Ok(&4));
        assert_eq!(list.next(two).unwrap(), four);
    }

    #[test]
    fn sort_cases() {
        for (input, expected) in vec![
            (vec![], vec![]),
            (vec![1], vec![1]),
            (vec![2, 1], vec![1, 2]),
            (vec![5, 2, 4, 3, 1], vec![1, 2, 3, 4, 5]),
            (vec![1, 2, 3], vec![1, 2, 3]),
            (vec![3, 2, 1], vec![1, 2, 3]),
            (vec![2, 1, 2, 1, 2], vec![1, 1, 2, 2, 2]),
        ] {
            let mut list = List::from_iter(input.clone());
            list.sort();
            assert_eq!(collect(&list), expected, "input {:?}", input);
            assert_eq!(list.len(), expected.len());
            // The backward threading matches the forward one.
            let mut reversed = expected.clone();
            reversed.reverse();
            assert_eq!(list.iter().rev().cloned().collect::<Vec<_>>(), reversed);
        }
    }

    #[test]
    fn sort_by_and_key() {
        let mut list = List::from_iter([1, 4, 2, 3]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(collect(&list), vec![4, 3, 2, 1]);

        let mut list = List::from_iter([-5i32, 4, 1, -3, 2]);
        list.sort_by_key(|k| k.abs());
        assert_eq!(collect(&list), vec![1, 2, -3, 4, -5]);
    }

    #[test]
    fn merge_interleaves() {
        let mut list = List::from_iter([1, 3, 5]);
        let mut other = List::from_iter([2, 4, 6]);
        list.merge(&mut other);
        assert_eq!(collect(&list), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list.len(), 6);
        assert!(other.is_empty());
        assert_eq!(other.len(), 0);
        assert_eq!(other.cursor_front(), other.cursor_end());
    }

    #[test]
    fn merge_appends_the_suffix() {
        let mut list = List::from_iter([1, 2]);
        let mut other = List::from_iter([0, 5, 6, 7]);
        list.merge(&mut other);
        assert_eq!(collect(&list), vec![0, 1, 2, 5, 6, 7]);
        assert!(other.is_empty());
    }

    #[test]
    fn merge_into_empty_swaps_storage() {
        let mut list = List::new();
        let mut other = List::from_iter([1, 2, 3]);
        let cursor = other.cursor_front();

        list.merge(&mut other);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert!(other.is_empty());

        // `other`'s cursors die with the move.
        assert!(other.get(cursor).is_err());

        // Both lists remain fully usable.
        other.push_back(9);
        assert_eq!(collect(&other), vec![9]);
        list.push_front(0);
        assert_eq!(collect(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn merge_from_empty_is_a_no_op() {
        let mut list = List::from_iter([1, 2]);
        let mut other = List::new();
        list.merge(&mut other);
        assert_eq!(collect(&list), vec![1, 2]);
        assert!(other.is_empty());
    }

    #[test]
    fn merge_keeps_existing_elements_first_on_ties() {
        let mut list = List::from_iter([(1, 'a'), (2, 'a')]);
        let mut other = List::from_iter([(1, 'b'), (2, 'b')]);
        list.merge_by(&mut other, |x, y| x.0 < y.0);
        assert_eq!(
            collect(&list),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
    }

    #[test]
    fn merge_after_churn() {
        // Slabs with holes merge like fresh ones.
        let mut list = List::from_iter([1, 3, 9, 5]);
        let cursor = list.prev(list.cursor_end()).unwrap();
        let cursor = list.prev(cursor).unwrap();
        assert_eq!(list.remove(cursor).unwrap().0, 9);

        let mut other = List::from_iter([0, 2, 4, 6, 8]);
        assert_eq!(other.pop_back(), Ok(8));

        list.merge(&mut other);
        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(other.is_empty());
    }

    #[test]
    fn reverse_basic() {
        let mut list = List::from_iter([1, 2, 3]);
        list.reverse();
        assert_eq!(collect(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Ok(&3));
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(
            list.iter().rev().cloned().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn reverse_is_an_involution() {
        let values = vec![4, 1, 3, 2, 5];
        let mut list = List::from_iter(values.clone());
        list.reverse();
        list.reverse();
        assert_eq!(collect(&list), values);

        let mut single = List::from_iter([1]);
        single.reverse();
        assert_eq!(collect(&single), vec![1]);

        let mut empty = List::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn unique_collapses_adjacent_runs() {
        let mut list = List::from_iter([1, 1, 2, 2, 2, 3, 1]);
        list.unique();
        assert_eq!(collect(&list), vec![1, 2, 3, 1]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn unique_trivial_lists() {
        let mut empty = List::<i32>::new();
        empty.unique();
        assert!(empty.is_empty());

        let mut single = List::from_iter([1]);
        single.unique();
        assert_eq!(collect(&single), vec![1]);

        let mut uniform = List::from_iter([7, 7, 7, 7]);
        uniform.unique();
        assert_eq!(collect(&uniform), vec![7]);
    }

    #[test]
    fn sort_then_unique_deduplicates_globally() {
        let mut list = List::from_iter([3, 1, 2, 3, 1, 2, 3]);
        list.sort();
        list.unique();
        assert_eq!(collect(&list), vec![1, 2, 3]);
    }

    #[test]
    fn clone_is_independent() {
        let original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.push_back(4);
        *copy.front_mut().unwrap() = 9;
        assert_eq!(collect(&original), vec![1, 2, 3]);
        assert_eq!(collect(&copy), vec![9, 2, 3, 4]);

        // Cursors do not transfer to the copy.
        let cursor = original.cursor_front();
        assert!(copy.get(cursor).is_err());
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = List::from_iter([1, 2]);
        let mut target = List::from_iter([7, 8, 9]);
        target.clone_from(&source);
        assert_eq!(collect(&target), vec![1, 2]);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn comparisons() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        let d = List::from_iter([1, 2]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(d < a);
    }

    #[test]
    fn contains_scans_elements() {
        let list = List::from_iter([1, 2, 3]);
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
    }
}
