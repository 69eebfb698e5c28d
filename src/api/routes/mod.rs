pub mod pages;
pub mod presence;
