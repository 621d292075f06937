//! Chain: singly-linked bucket list used by `ChainedMap`.
//!
//! Nodes are boxed and owned by their predecessor (or by the chain head).
//! Order within a chain is unspecified; new nodes are pushed at the head.

use core::fmt;

/// One key/value pair in a chain.
///
/// The key is read-only once inserted: changing it would strand the node in
/// the wrong bucket. The value can be updated in place via [`Node::value_mut`].
pub struct Node<V> {
    key: String,
    value: V,
    next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

pub struct Chain<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> Chain<V> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes a new node at the head. Does not check for an existing `key`.
    pub fn insert(&mut self, key: String, value: V) {
        self.push_node(Box::new(Node {
            key,
            value,
            next: None,
        }));
    }

    /// Links an existing node at the head, reusing its allocation.
    pub(crate) fn push_node(&mut self, mut node: Box<Node<V>>) {
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Detaches the head node; its `next` link is cleared.
    pub(crate) fn pop_front(&mut self) -> Option<Box<Node<V>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node)
    }

    pub fn find(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|n| n.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == key {
                return Some(node);
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the node holding `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|n| n.key != key) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        let node = link.take()?;
        let Node { value, next, .. } = *node;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so long chains cannot overflow the stack through
// recursive `Box` drops.
impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

/// Iterator over the nodes of a chain, head first.
pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = &'a Node<V>;
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
