pub mod catalog;
pub mod naming;
pub mod resolver;
