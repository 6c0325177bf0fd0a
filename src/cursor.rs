//! Explicit cursors over the live elements of a `DynArray`.
//!
//! A cursor is a position plus a direction. It borrows the array, so any
//! operation that could move elements (growth, insertion, removal) is
//! rejected by the compiler while a cursor is alive:
//!
//! ```compile_fail
//! # use dynarray::DynArray;
//! let mut array = DynArray::new();
//! array.push(1);
//! let cursor = array.cursor();
//! array.push(2); // the cursor would be invalidated here
//! assert_eq!(cursor.get(), Some(&1));
//! ```

use core::fmt;

/// Traversal order of a cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From index 0 toward the last element
    Forward,
    /// From the last element toward index 0
    Reverse,
}

/// Position of the first element visited in `direction`, or `None` when empty.
fn first_position(len: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Forward => (len > 0).then_some(0),
        Direction::Reverse => len.checked_sub(1),
    }
}

/// Position after `position` in `direction`, `None` once past the last element.
fn step(position: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    let index = position?;
    match direction {
        Direction::Forward => (index + 1 < len).then_some(index + 1),
        Direction::Reverse => index.checked_sub(1),
    }
}

/// Read-only cursor
///
/// `has_next` is true while another element follows the current one, so a
/// cursor over `[1, 2, 3]` reports `false` once it sits on the last element
/// it will visit. Advancing from there moves it past the end, which compares
/// equal to [`DynArray::cursor_end`](crate::DynArray::cursor_end).
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: Option<usize>,
    direction: Direction,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], direction: Direction) -> Self {
        Self {
            items,
            position: first_position(items.len(), direction),
            direction,
        }
    }

    pub(crate) fn past_end(items: &'a [T], direction: Direction) -> Self {
        Self {
            items,
            position: None,
            direction,
        }
    }

    /// The current element, `None` past the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.position?)
    }

    /// Moves to the next element in traversal order.
    ///
    /// Advancing a cursor that is already past the end does nothing.
    pub fn advance(&mut self) {
        self.position = step(self.position, self.items.len(), self.direction);
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        step(self.position, self.items.len(), self.direction).is_some()
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Index of the current element in the array.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Cursors compare by position only.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Cursor that can modify the element it points at
pub struct CursorMut<'a, T> {
    items: &'a mut [T],
    position: Option<usize>,
    direction: Direction,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T], direction: Direction) -> Self {
        let position = first_position(items.len(), direction);
        Self {
            items,
            position,
            direction,
        }
    }

    /// The current element, `None` past the end.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.items.get(self.position?)
    }

    /// The current element for modification, `None` past the end.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.position?)
    }

    /// Overwrites the current element, dropping the old value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end.
    pub fn set(&mut self, value: T) {
        match self.get_mut() {
            Some(slot) => *slot = value,
            None => panic!("cannot set an element through a cursor past the end"),
        }
    }

    /// Moves to the next element in traversal order.
    ///
    /// Advancing a cursor that is already past the end does nothing.
    pub fn advance(&mut self) {
        self.position = step(self.position, self.items.len(), self.direction);
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        step(self.position, self.items.len(), self.direction).is_some()
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Index of the current element in the array.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
