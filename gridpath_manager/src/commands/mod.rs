pub mod show;
pub mod solve;
