//! Singly linked list exercises over explicitly owned nodes.

use std::fmt;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinkedListError {
    #[error("index {index} is out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

type Error = LinkedListError;
type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Iterative,
    Recursive,
}

pub struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Builds a list holding `values` in order, `None` when there are none.
    pub fn from_values<I>(values: I) -> Option<Box<Node<T>>>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        values.into_iter().rev().fold(None, |next, value| {
            Some(Box::new(Node { value, next }))
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: Some(self) }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().map(|n| n.value.clone()).collect()
    }
}

// Clone, equality and formatting walk the chain with `iter()` rather than
// recursing through `next`, so they work on lists of any length.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node::new(self.value.clone());
        let mut tail = &mut head.next;
        for node in self.iter().skip(1) {
            tail = &mut tail.insert(Box::new(Node::new(node.value.clone()))).next;
        }
        head
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().map(|n| &n.value).eq(other.iter().map(|n| &n.value))
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|n| &n.value)).finish()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next.as_deref();
        Some(current)
    }
}

/// Calls `visit` on every node from `head` onwards.
pub fn traverse<T, F>(head: &Node<T>, mut visit: F, mode: ExecutionMode)
where
    F: FnMut(&Node<T>),
{
    match mode {
        ExecutionMode::Iterative => {
            let mut current = Some(head);
            while let Some(node) = current {
                visit(node);
                current = node.next.as_deref();
            }
        }
        ExecutionMode::Recursive => traverse_recursive(Some(head), &mut visit),
    }
}

fn traverse_recursive<T, F>(current: Option<&Node<T>>, visit: &mut F)
where
    F: FnMut(&Node<T>),
{
    let Some(node) = current else {
        return;
    };

    visit(node);
    traverse_recursive(node.next.as_deref(), visit);
}

pub fn find_first<'a, T: PartialEq>(head: &'a Node<T>, value: &T) -> Option<&'a Node<T>> {
    head.iter().find(|node| node.value == *value)
}

pub fn get_at_index<T>(head: &Node<T>, index: usize) -> Result<&Node<T>> {
    let mut current = head;
    for i in 0..index {
        current = match current.next.as_deref() {
            Some(next) => next,
            None => return Err(Error::IndexOutOfRange { index, len: i + 1 }),
        };
    }

    Ok(current)
}

/// Reverses the list in place, returning the new head.
pub fn reverse<T>(mut head: Box<Node<T>>) -> Box<Node<T>> {
    let mut current = head.next.take();
    let mut len = 1usize;

    while let Some(mut node) = current {
        current = node.next.take();
        node.next = Some(head);
        head = node;
        len += 1;
    }

    debug!(len, "reversed list");
    head
}

/// Interleaves the nodes of both lists, starting with `head1`.
///
/// Once either list runs out the rest of the other is appended as is.
pub fn zipper<T>(mut head1: Box<Node<T>>, head2: Box<Node<T>>) -> Box<Node<T>> {
    let mut first = head1.next.take();
    let mut second = Some(head2);
    let mut tail = &mut head1.next;
    let mut count = 0usize;

    loop {
        let source = if count % 2 == 0 { &mut second } else { &mut first };
        match source.take() {
            Some(mut node) => {
                *source = node.next.take();
                tail = &mut tail.insert(node).next;
            }
            None => {
                *tail = if count % 2 == 0 { first.take() } else { second.take() };
                break;
            }
        }
        count += 1;
    }

    debug!(zipped = count, "zipped lists");
    head1
}
