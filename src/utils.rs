pub mod logs;
pub mod testing;
