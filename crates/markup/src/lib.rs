//! Declarative markup tree and HTML stringifier for vcd-web
//!
//! The UI layer describes its markup as a tree of [`Node`] values and turns
//! the tree into text with [`stringify`]. Raw children pass through the
//! serializer verbatim, so embedded fragments render as live sub-elements.

pub mod node;
pub mod stringify;

pub use node::{Element, Node};
pub use stringify::{stringify, write_node};
