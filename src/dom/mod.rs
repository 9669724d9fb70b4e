//! DOM arena: slotmap-backed element tree with id, class and selector queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{LayoutBox, NodeData, NodeId};
pub use tree::Dom;
