pub mod common;
pub mod recommendation;
