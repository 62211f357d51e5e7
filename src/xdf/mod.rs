//! In-memory XDF document model and the builders that populate it.

pub mod axis;
pub mod builder;
pub mod category;
pub mod format;
pub mod node;

pub use builder::build_document;
pub use node::{XdfNode, XdfValue};
