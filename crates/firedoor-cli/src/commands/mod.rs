pub mod catalog;
pub mod extract;
