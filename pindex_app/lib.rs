pub mod config;
pub mod logs;
pub mod repository;
pub mod test_utils;
