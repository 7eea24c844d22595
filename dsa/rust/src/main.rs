use std::collections::HashMap;

use anyhow::Result;
use tracing::info;

use dsa_exercises::binary_tree::{self, TreeNode};
use dsa_exercises::linked_list::{self, Node};
use dsa_exercises::{problems, recursion, telemetry};

fn main() -> Result<()> {
    telemetry::init()?;

    let nums = vec![-1, 0, 1, 2, -1, -4];
    let triplets = problems::three_sum(nums.clone());
    info!(?nums, ?triplets, "three_sum");

    info!(anagram = problems::is_anagram("restful", "fluster"), "is_anagram restful/fluster");
    info!(most_frequent = ?problems::most_frequent_char("mississippi"), "most_frequent_char mississippi");
    info!(pair = ?problems::pair_sum(&[3, 2, 5, 4, 1], 8), "pair_sum");
    info!(pair = ?problems::pair_product(&[3, 2, 5, 4, 1], 8), "pair_product");
    info!(common = ?problems::intersection(&[4, 2, 1, 6], &[3, 6, 9, 2, 10]), "intersection");

    let prime = problems::is_prime(101)?;
    info!(prime, "is_prime 101");

    let mut cache = HashMap::new();
    let iterative = recursion::fibonacci_iterative(50)?;
    let memoized = recursion::fibonacci_memoized(50, &mut cache)?;
    let binet = recursion::fibonacci_binet(50)?;
    info!(iterative, memoized, binet, "fibonacci 50");

    let mut steps = Vec::new();
    recursion::countdown(5, 1, 1, |n| steps.push(n), |_| {})?;
    info!(?steps, "countdown");

    if let Some(head) = Node::from_values("fish".chars().collect::<Vec<_>>()) {
        let reversed = linked_list::reverse(head);
        let reversed: String = reversed.values().into_iter().collect();
        info!(%reversed, "reverse");
    }

    let tree = TreeNode::new(3)
        .with_left(TreeNode::new(11).with_left(TreeNode::new(4)).with_right(TreeNode::new(-2)))
        .with_right(TreeNode::new(4).with_right(TreeNode::new(1)));
    let order: Vec<i32> = binary_tree::breadth_first(&tree).map(|n| n.value).collect();
    info!(?order, max_path_sum = binary_tree::max_path_sum(&tree), "binary tree");

    Ok(())
}
