//! CLI command implementations

pub mod catalog;
pub mod check;
pub mod edit;
pub mod export;
pub mod init;
pub mod render;
pub mod schema;
