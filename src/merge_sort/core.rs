//! Merge sort over a singly linked chain of integers.
//!
//! The chain is sorted by relinking nodes: values are never copied or
//! mutated and no node is allocated or freed while sorting.

use std::fmt;

/// Owning link to the next node, `None` at the end of the chain.
pub type Link = Option<Box<Node>>;

/// One element of a chain.
#[derive(Debug)]
pub struct Node {
    pub value: i64,
    pub next: Link,
}

impl Node {
    pub fn new(value: i64) -> Self {
        Node { value, next: None }
    }
}

impl Drop for Node {
    // Unlink iteratively; the default drop recurses once per node and
    // overflows the stack on million-element chains.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Sort a chain in ascending order and return its new head.
///
/// Stable: on equal values the node from the left half is linked first.
/// Runs in O(n log n) time with O(log n) recursion depth.
pub fn merge_sort(mut head: Link) -> Link {
    if head.as_ref().is_none_or(|node| node.next.is_none()) {
        return head;
    }

    let right = split_at_midpoint(&mut head);
    merge(merge_sort(head), merge_sort(right))
}

/// Detach and return the second half of the chain.
///
/// Walks a slow cursor one node and a fast cursor two nodes per step; the
/// number of steps taken before the fast cursor runs off the end is the
/// length of the first half (`floor(n / 2)`).
pub(crate) fn split_at_midpoint(head: &mut Link) -> Link {
    let mut steps = 0usize;
    let mut fast = head.as_deref();
    while let Some(next) = fast.and_then(|n| n.next.as_deref()) {
        fast = next.next.as_deref();
        steps += 1;
    }

    let mut slow = head;
    for _ in 0..steps {
        slow = &mut slow.as_mut()?.next;
    }
    slow.take()
}

/// Merge two sorted chains into one sorted chain.
pub fn merge(mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut tail = &mut head;

    loop {
        let take_left = match (left.as_deref(), right.as_deref()) {
            (Some(l), Some(r)) => l.value <= r.value,
            _ => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    // At most one side still has nodes; it is already sorted.
    *tail = if left.is_some() { left } else { right };
    head
}

/// An owned chain with its length cached.
#[derive(Default)]
pub struct List {
    head: Link,
    len: usize,
}

impl List {
    pub fn new() -> Self {
        List::default()
    }

    /// Build a chain holding `values` in order, one node per value.
    pub fn from_slice(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }

    /// Take ownership of an existing chain.
    pub fn from_head(head: Link) -> Self {
        let mut len = 0;
        let mut cursor = head.as_deref();
        while let Some(node) = cursor {
            len += 1;
            cursor = node.next.as_deref();
        }
        List { head, len }
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn into_head(mut self) -> Link {
        self.head.take()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }

    /// The first `max` values, front to back.
    pub fn prefix(&self, max: usize) -> Vec<i64> {
        self.iter().take(max).collect()
    }

    /// Consume the chain and return it merge sorted.
    pub fn sort(mut self) -> List {
        let len = self.len;
        let head = merge_sort(self.head.take());
        List { head, len }
    }

    pub fn is_sorted(&self) -> bool {
        crate::verify::is_sorted_iter(self.iter())
    }
}

impl FromIterator<i64> for List {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut head: Link = None;
        let mut tail = &mut head;
        let mut len = 0;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
            len += 1;
        }
        List { head, len }
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `1 -> 2 -> 3 -> nil`.
impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("nil")
    }
}

/// Borrowing iterator over chain values.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Consuming iterator that unlinks nodes front to back.
pub struct IntoIter {
    next: Link,
}

impl Iterator for IntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let mut node = self.next.take()?;
        self.next = node.next.take();
        Some(node.value)
    }
}

impl IntoIterator for List {
    type Item = i64;
    type IntoIter = IntoIter;

    fn into_iter(mut self) -> IntoIter {
        IntoIter {
            next: self.head.take(),
        }
    }
}
