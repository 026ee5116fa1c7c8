pub mod nums;
pub mod show;
