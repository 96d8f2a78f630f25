//! CLI command implementations

pub mod catalog;
pub mod common;
pub mod encode;
pub mod render;
