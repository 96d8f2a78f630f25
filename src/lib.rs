pub mod catalog;
pub mod commands;
pub mod config;
pub mod encoder;
pub mod logging;
pub mod staging;

pub use catalog::{Catalog, CatalogError, CommandRole, CommandSpec};
pub use encoder::{encode_batch, fold, render_line, BatchOutput, EncodeWarning, StagedCommand};
