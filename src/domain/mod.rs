//! Domain logic - version grammar and file rewriting rules, independent of I/O

pub mod tag;
pub mod target;
pub mod version;

pub use tag::TagType;
pub use target::Target;
pub use version::{Component, Version};
