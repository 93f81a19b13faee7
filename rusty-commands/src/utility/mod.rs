pub mod help;
pub mod pages;
