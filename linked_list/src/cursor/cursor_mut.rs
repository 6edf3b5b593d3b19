use core::ptr::NonNull;

use crate::{node::Node, Ends, LinkedList};

use super::Cursor;

/// A mutable cursor over a [`LinkedList`].
///
/// Cursors point to an element in the list. There is an extra "ghost"
/// element between the front and the back, making the list circular.
pub struct CursorMut<'a, T> {
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a mut LinkedList<T>,
}

impl<T> CursorMut<'_, T> {
    #[must_use]
    #[inline]
    /// Gets an immutable cursor over the list.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current,
            list: self.list,
        }
    }

    /// Moves the cursor to the next element.
    ///
    /// If the cursor is on the "ghost" element, this moves to the front of
    /// the list. If the cursor is at the back of the list, this moves to
    /// the "ghost" element.
    pub fn move_next(&mut self) {
        self.current = match self.current {
            None => self.list.ends.map(|Ends { front, .. }| front),
            // SAFETY:
            // The node is linked into the borrowed list, so it is live.
            Some(node) => unsafe { node.as_ref() }.next,
        }
    }

    /// Moves the cursor to the previous element.
    ///
    /// If the cursor is on the "ghost" element, this moves to the back of
    /// the list. If the cursor is at the front of the list, this moves to
    /// the "ghost" element.
    pub fn move_previous(&mut self) {
        self.current = match self.current {
            None => self.list.ends.map(|Ends { back, .. }| back),
            // SAFETY:
            // The node is linked into the borrowed list, so it is live.
            Some(node) => unsafe { node.as_ref() }.previous,
        }
    }

    #[must_use]
    /// Gets a mutable reference to the current element.
    ///
    /// If the cursor is pointing to the "ghost" element, this returns
    /// [`None`].
    pub fn current(&mut self) -> Option<&mut T> {
        self.current.map(|mut node| {
            // SAFETY:
            // The node is linked into the exclusively borrowed list, and
            // the reference is bounded by the borrow of the cursor.
            let node = unsafe { node.as_mut() };
            &mut node.value
        })
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the underlying list.
    pub const fn as_list(&self) -> &LinkedList<T> {
        self.list
    }

    /// Inserts `value` before the current element.
    ///
    /// If the cursor is on the "ghost" element, the value is inserted at
    /// the back of the list.
    pub fn insert_before(&mut self, value: T) {
        let (next, previous) = match self.current {
            // SAFETY:
            // The node is linked into the borrowed list, so it is live.
            Some(node) => (Some(node), unsafe { node.as_ref() }.previous),
            None => (None, self.list.ends.map(|Ends { back, .. }| back)),
        };

        let node = Node::allocate(next, previous, value);
        // SAFETY:
        // `next` and `previous` are adjacent positions in the list, and the
        // node is freshly allocated.
        unsafe { self.list.insert(node) };
    }

    /// Inserts `value` after the current element.
    ///
    /// If the cursor is on the "ghost" element, the value is inserted at
    /// the front of the list.
    pub fn insert_after(&mut self, value: T) {
        let (next, previous) = match self.current {
            // SAFETY:
            // The node is linked into the borrowed list, so it is live.
            Some(node) => (unsafe { node.as_ref() }.next, Some(node)),
            None => (self.list.ends.map(|Ends { front, .. }| front), None),
        };

        let node = Node::allocate(next, previous, value);
        // SAFETY:
        // `next` and `previous` are adjacent positions in the list, and the
        // node is freshly allocated.
        unsafe { self.list.insert(node) };
    }

    #[must_use]
    /// Removes the current element and returns its value, moving the cursor
    /// to the next element.
    ///
    /// If the cursor is pointing to the "ghost" element, this returns
    /// [`None`].
    pub fn remove_current(&mut self) -> Option<T> {
        let node = self.current?;

        let (next, previous) = {
            // SAFETY:
            // The node is linked into the borrowed list, so it is live.
            let header = unsafe { node.as_ref() };
            (header.next, header.previous)
        };

        if let Some(mut next_node) = next {
            // SAFETY:
            // The list is borrowed mutably, so the next node is not aliased
            // and can be rewired.
            let next_header = unsafe { next_node.as_mut() };

            debug_assert_eq!(next_header.previous, Some(node));
            next_header.previous = previous;
        }

        if let Some(mut previous_node) = previous {
            // SAFETY:
            // The list is borrowed mutably, so the previous node is not
            // aliased and can be rewired.
            let previous_header = unsafe { previous_node.as_mut() };

            debug_assert_eq!(previous_header.next, Some(node));
            previous_header.next = next;
        }

        debug_assert!(self.list.ends.is_some());
        // SAFETY:
        // The list contains `node`, so it cannot be empty.
        let Ends { front, back } = unsafe { self.list.ends.as_mut().unwrap_unchecked() };

        match (next, previous) {
            (Some(_next), Some(_previous)) => {}

            (None, Some(previous_node)) => {
                debug_assert_eq!(*back, node);
                *back = previous_node;
            }
            (Some(next_node), None) => {
                debug_assert_eq!(*front, node);
                *front = next_node;
            }

            (None, None) => {
                self.list.ends = None;
            }
        }

        self.current = next;
        // SAFETY:
        // The node is now unlinked from the list.
        Some(unsafe { Node::take(node) })
    }
}

unsafe impl<T> Send for CursorMut<'_, T> where T: Send {}
unsafe impl<T> Sync for CursorMut<'_, T> where T: Sync {}
