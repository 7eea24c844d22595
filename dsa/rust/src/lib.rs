pub mod binary_tree;
pub mod linked_list;
pub mod problems;
pub mod recursion;
pub mod telemetry;
