//! Binary tree traversals and the classic folds built on top of them.
//!
//! A parent owns its children through `Box`, there are no parent links.
//! Traversals hand out references so the tree is never copied.

use std::collections::VecDeque;

use tracing::trace;

/// Binary tree node owning both children.
///
/// Dropping is iterative, so even a degenerate list-shaped tree is freed safely.
/// The derived `Clone`, `PartialEq` and `Debug`, like the recursive helpers below,
/// recurse once per level and expect trees of reasonable height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: TreeNode<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: TreeNode<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn children(&self) -> impl Iterator<Item = &TreeNode<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Pre-order iterator driven by an explicit stack.
pub struct DepthFirst<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Right goes in first so that left comes out first.
        if let Some(right) = current.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = current.left.as_deref() {
            self.stack.push(left);
        }

        Some(current)
    }
}

/// Level-order iterator driven by a queue.
pub struct BreadthFirst<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        self.queue.extend(current.children());
        Some(current)
    }
}

pub fn depth_first_iterative<T>(root: &TreeNode<T>) -> DepthFirst<'_, T> {
    DepthFirst { stack: vec![root] }
}

pub fn depth_first_recursive<T>(root: &TreeNode<T>) -> Vec<&TreeNode<T>> {
    fn visit<'a, T>(node: &'a TreeNode<T>, out: &mut Vec<&'a TreeNode<T>>) {
        out.push(node);
        for child in node.children() {
            visit(child, out);
        }
    }

    let mut out = Vec::new();
    visit(root, &mut out);
    out
}

pub fn breadth_first<T>(root: &TreeNode<T>) -> BreadthFirst<'_, T> {
    BreadthFirst {
        queue: VecDeque::from([root]),
    }
}

pub fn includes<T: PartialEq>(root: &TreeNode<T>, value: &T) -> bool {
    breadth_first(root).any(|node| node.value == *value)
}

pub fn tree_sum(root: &TreeNode<i32>) -> i64 {
    root.value as i64 + root.children().map(tree_sum).sum::<i64>()
}

pub fn tree_min<T: Ord + Copy>(root: &TreeNode<T>) -> T {
    depth_first_iterative(root)
        .skip(1)
        .map(|node| node.value)
        .fold(root.value, T::min)
}

pub fn tree_max<T: Ord + Copy>(root: &TreeNode<T>) -> T {
    breadth_first(root)
        .skip(1)
        .map(|node| node.value)
        .fold(root.value, T::max)
}

/// Largest sum along any root-to-leaf path.
pub fn max_path_sum(root: &TreeNode<i32>) -> i64 {
    let best_child = root.children().map(max_path_sum).max();
    trace!(value = root.value, ?best_child, "max_path_sum");

    root.value as i64 + best_child.unwrap_or(0)
}

/// Whether some root-to-leaf path adds up to exactly `target`.
pub fn has_path_sum(root: &TreeNode<i32>, target: i64) -> bool {
    let remaining = target - root.value as i64;
    if root.is_leaf() {
        return remaining == 0;
    }

    root.children().any(|child| has_path_sum(child, remaining))
}
