pub mod configuration;
pub mod registry;
pub mod strategy;

pub use registry::Registry;
pub use strategy::{merge_attributes, Attributes, LinkStrategy, Strategy};
