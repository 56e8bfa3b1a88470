//! Singly-linked, exclusively owned node chain.
//!
//! Both the per-sensor reading history and the registry's sensor list are
//! stored in a [`Chain`]. Every node is owned by its predecessor (the head by
//! the chain itself), so dropping the chain releases every node. Release is
//! done iteratively to keep long chains from exhausting the stack.

use std::fmt;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Node<T>> {
        Box::new(Node { value, next: None })
    }
}

/// Ordered chain of owned values; traversal order equals insertion order.
pub(crate) struct Chain<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) const fn new() -> Chain<T> {
        Chain { head: None, len: 0 }
    }

    /// Appends at the tail; the tail is located by walking the chain.
    pub(crate) fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::new(value));
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Unlinks the node at `index` and hands back its value.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        let node = cursor.take()?;
        let Node { value, next } = *node;
        *cursor = next;
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Releases every node, front to back.
    pub(crate) fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        for value in iter {
            let node = tail.insert(Node::new(value));
            tail = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let mut copy = Chain::new();
        copy.extend(self.iter().cloned());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub(crate) struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub(crate) struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}
