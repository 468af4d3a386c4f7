//! A design study: the same ring, but with the borrow checker proving
//! the link discipline instead of slot indices. Each knot is owned by
//! exactly two half-references (its neighbours' links, or the deque
//! ends), so no slab, no vacant slots, and no runtime cursor checks.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

type Half<'id, T> = StaticRc<GhostCell<'id, Knot<'id, T>>, 1, 2>;
type Full<'id, T> = StaticRc<GhostCell<'id, Knot<'id, T>>, 2, 2>;

struct Knot<'id, T> {
    prev: Option<Half<'id, T>>,
    next: Option<Half<'id, T>>,
    value: T,
}

pub struct Deque<'id, T> {
    front: Option<Half<'id, T>>,
    back: Option<Half<'id, T>>,
    len: usize,
}

impl<'id, T> Knot<'id, T> {
    fn new(value: T) -> Self {
        Self {
            prev: None,
            next: None,
            value,
        }
    }

    /// The two halves of a freshly tied knot.
    fn tie(value: T) -> (Half<'id, T>, Half<'id, T>) {
        Full::split(Full::new(GhostCell::new(Knot::new(value))))
    }

    /// Rejoin the two halves and take the element out.
    fn untie(left: Half<'id, T>, right: Half<'id, T>) -> T {
        Full::into_box(Full::join(left, right)).into_inner().value
    }
}

impl<'id, T> Deque<'id, T> {
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (left, right) = Knot::tie(value);
        match self.front.take() {
            Some(first) => {
                first.borrow_mut(token).prev = Some(left);
                right.borrow_mut(token).next = Some(first);
                self.front = Some(right);
            }
            None => {
                self.back = Some(left);
                self.front = Some(right);
            }
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (left, right) = Knot::tie(value);
        match self.back.take() {
            Some(last) => {
                last.borrow_mut(token).next = Some(left);
                right.borrow_mut(token).prev = Some(last);
                self.back = Some(right);
            }
            None => {
                self.front = Some(left);
                self.back = Some(right);
            }
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let first = self.front.take()?;
        let other = match first.borrow_mut(token).next.take() {
            Some(second) => {
                let other = second.borrow_mut(token).prev.take().unwrap();
                self.front = Some(second);
                other
            }
            None => self.back.take().unwrap(),
        };
        self.len -= 1;
        Some(Knot::untie(first, other))
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let last = self.back.take()?;
        let other = match last.borrow_mut(token).prev.take() {
            Some(second_to_last) => {
                let other = second_to_last.borrow_mut(token).next.take().unwrap();
                self.back = Some(second_to_last);
                other
            }
            None => self.front.take().unwrap(),
        };
        self.len -= 1;
        Some(Knot::untie(last, other))
    }
}

impl<'id, T> Default for Deque<'id, T> {
    fn default() -> Self {
        Self::new()
    }
}
