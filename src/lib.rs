pub mod avl_tree;
pub mod bounded_vec;
pub mod bst;
pub mod sort_vec;
