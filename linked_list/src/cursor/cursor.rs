use core::ptr::NonNull;

use crate::{node::Node, Ends, LinkedList};

/// A cursor over a [`LinkedList`].
///
/// Cursors point to an element in the list. There is an extra "ghost"
/// element between the front and the back, making the list circular.
pub struct Cursor<'a, T> {
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a LinkedList<T>,
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
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
    /// Gets a reference to the current element.
    ///
    /// If the cursor is pointing to the "ghost" element, this returns
    /// [`None`].
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|node| {
            // SAFETY:
            // The node is linked into the borrowed list, so it is live for
            // 'a.
            let node = unsafe { node.as_ref() };
            &node.value
        })
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the underlying list.
    pub const fn as_list(&self) -> &'a LinkedList<T> {
        self.list
    }
}

unsafe impl<T> Send for Cursor<'_, T> where T: Sync {}
unsafe impl<T> Sync for Cursor<'_, T> where T: Sync {}
