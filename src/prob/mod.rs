pub mod heredity;
pub mod pagerank;
