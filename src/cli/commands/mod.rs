pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;
