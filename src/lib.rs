pub mod books;
pub mod catalog;
pub mod core;
pub mod lookup;
pub mod utils;
