use alloc::boxed::Box;
use core::ptr::NonNull;

/// A single link in the chain: one value and its two neighbours.
///
/// Nodes are only ever reached through the owning [`LinkedList`], which
/// keeps the chain acyclic and each node linked in exactly once.
///
/// [`LinkedList`]: crate::LinkedList
pub struct Node<T> {
    pub next: Option<NonNull<Node<T>>>,
    pub previous: Option<NonNull<Node<T>>>,
    pub value: T,
}

impl<T> Node<T> {
    /// Heap-allocates a node with the given neighbours and leaks it.
    ///
    /// The caller owns the allocation until the node is linked into a list.
    #[must_use]
    pub fn allocate(
        next: Option<NonNull<Self>>,
        previous: Option<NonNull<Self>>,
        value: T,
    ) -> NonNull<Self> {
        let node = Box::new(Self {
            next,
            previous,
            value,
        });
        NonNull::from(Box::leak(node))
    }

    /// Reclaims an unlinked node and returns its value.
    ///
    /// # Safety
    /// - `node` must have come from [`Node::allocate`]
    /// - `node` must not be linked into any list
    /// - `node` (including copies of the pointer) must not be used after
    ///   this call
    #[must_use]
    pub unsafe fn take(node: NonNull<Self>) -> T {
        // SAFETY:
        // `node` came from `Box::into_raw` (via `Box::leak`) and nothing
        // else can reach it. (safety condition)
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.value
    }
}
